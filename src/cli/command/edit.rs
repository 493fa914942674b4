//! Edit an expense
//!
//! Loads the expense into the draft, applies the given fields over it and
//! submits the result as an update.

use crate::{
    configuration::Settings,
    error::AppError as Error,
    model::ExpenseId,
};

use super::{mounted_controller, print_controller};

pub async fn edit(
    config: &Settings,
    id: ExpenseId,
    name: Option<String>,
    amount: Option<String>,
    category: Option<String>,
) -> Result<(), Error> {
    let mut controller = mounted_controller(config).await?;

    let Some(expense) = controller.find(&id).cloned() else {
        controller.report(&Error::NotFound(id.to_string()));
        print_controller(&controller);
        return Ok(());
    };
    controller.edit(&expense);

    if let Some(name) = name {
        controller.set_name(name);
    }
    if let Some(amount) = amount {
        controller.set_amount(amount);
    }
    if let Some(category) = category {
        controller.set_category(category);
    }

    controller.submit().await;
    print_controller(&controller);

    Ok(())
}

//! Add an expense
//!
//! The fields go through the same validation as the interactive form before
//! anything is sent to the store.

use crate::{configuration::Settings, error::AppError as Error};

use super::{mounted_controller, print_controller};

pub async fn add(
    config: &Settings,
    name: Option<String>,
    amount: Option<String>,
    category: Option<String>,
) -> Result<(), Error> {
    let mut controller = mounted_controller(config).await?;

    controller.set_name(name.unwrap_or_default());
    controller.set_amount(amount.unwrap_or_default());
    controller.set_category(category.unwrap_or_default());

    controller.submit().await;
    print_controller(&controller);

    Ok(())
}

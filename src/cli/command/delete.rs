use crate::{configuration::Settings, error::AppError as Error, model::ExpenseId};

use super::{mounted_controller, print_controller};

pub async fn delete(config: &Settings, id: ExpenseId) -> Result<(), Error> {
    let mut controller = mounted_controller(config).await?;

    controller.delete(&id).await;
    print_controller(&controller);

    Ok(())
}

//! List expenses
//!
//! Shows the store's list, or the cached snapshot if the store can't be
//! reached.

use crate::{configuration::Settings, error::AppError as Error};

use super::{mounted_controller, print_controller};

pub async fn list(config: &Settings) -> Result<(), Error> {
    let controller = mounted_controller(config).await?;
    print_controller(&controller);

    Ok(())
}

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod shell;

pub use add::add;
pub use delete::delete;
pub use edit::edit;
pub use init::init;
pub use list::list;
pub use shell::shell;

use crate::{
    cache::JsonFileCache, client::ExpenseClient, configuration::Settings, controller::Controller,
    error::AppError as Error, notify::ConsoleNotifier,
};

use super::render::print_expenses;

pub type AppController = Controller<ExpenseClient, JsonFileCache, ConsoleNotifier>;

/// Build the controller from configuration and run the startup load
///
/// # Errors
/// Will return an error if the configured store url is invalid. A failed load
/// is only notified.
pub async fn mounted_controller(config: &Settings) -> Result<AppController, Error> {
    let client = ExpenseClient::new_from_config(config)?;
    let cache = JsonFileCache::new_from_config(config);

    let mut controller = Controller::new(client, cache, ConsoleNotifier);
    controller.mount().await;

    Ok(controller)
}

fn print_controller(controller: &AppController) {
    print_expenses(controller.expenses(), &controller.total_display());
}

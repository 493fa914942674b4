//! Interactive session
//!
//! Keeps one controller alive and lets the user add, edit and delete
//! expenses until they quit. Editing overwrites whatever draft was in
//! progress without asking.

use colored::Colorize;
use dialoguer::{Input, Select};
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::{
    configuration::Settings,
    error::AppError as Error,
    model::{Category, Expense},
};

use super::{mounted_controller, print_controller, AppController};
use crate::cli::render::expense_row;

const NO_CATEGORY: &str = "Select Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Action {
    #[strum(serialize = "Add expense")]
    Add,
    #[strum(serialize = "Update expense")]
    Update,
    #[strum(serialize = "Cancel edit")]
    CancelEdit,
    #[strum(serialize = "Edit expense")]
    Edit,
    #[strum(serialize = "Delete expense")]
    Delete,
    #[strum(serialize = "Refresh")]
    Refresh,
    #[strum(serialize = "Quit")]
    Quit,
}

pub async fn shell(config: &Settings) -> Result<(), Error> {
    let mut controller = mounted_controller(config).await?;

    loop {
        println!();
        print_controller(&controller);
        println!();

        let actions =
            available_actions(controller.is_editing(), !controller.expenses().is_empty());
        let choice = Select::new()
            .with_prompt(heading(&controller))
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::Add | Action::Update => {
                fill_draft(&mut controller)?;
                controller.submit().await;
            }
            Action::CancelEdit => controller.cancel_edit(),
            Action::Edit => {
                if let Some(expense) = pick_expense(&controller, "Edit which expense?")? {
                    controller.edit(&expense);
                    fill_draft(&mut controller)?;
                    controller.submit().await;
                }
            }
            Action::Delete => {
                if let Some(expense) = pick_expense(&controller, "Delete which expense?")? {
                    controller.delete(&expense.id).await;
                }
            }
            Action::Refresh => {
                controller.refresh().await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn heading(controller: &AppController) -> String {
    if controller.is_editing() {
        "Edit Expense".bold().to_string()
    } else {
        "Add New Expense".bold().to_string()
    }
}

fn available_actions(editing: bool, has_expenses: bool) -> Vec<Action> {
    let mut actions = if editing {
        vec![Action::Update, Action::CancelEdit]
    } else {
        vec![Action::Add]
    };

    if has_expenses {
        actions.extend([Action::Edit, Action::Delete]);
    }
    actions.extend([Action::Refresh, Action::Quit]);

    actions
}

// Prompt for each draft field, starting from its current value
fn fill_draft(controller: &mut AppController) -> Result<(), Error> {
    let draft = controller.draft().clone();

    let name: String = Input::new()
        .with_prompt("Expense Name")
        .with_initial_text(draft.name)
        .allow_empty(true)
        .interact_text()?;

    let amount: String = Input::new()
        .with_prompt("Amount")
        .with_initial_text(draft.amount)
        .allow_empty(true)
        .interact_text()?;

    let mut categories = vec![NO_CATEGORY.to_string()];
    categories.extend(Category::iter().map(|c| c.to_string()));
    let current = categories
        .iter()
        .position(|c| c == &draft.category)
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(current)
        .interact()?;
    let category = if picked == 0 {
        String::new()
    } else {
        categories[picked].clone()
    };

    controller.set_name(name);
    controller.set_amount(amount);
    controller.set_category(category);

    Ok(())
}

fn pick_expense(controller: &AppController, prompt: &str) -> Result<Option<Expense>, Error> {
    let mut rows: Vec<String> = controller.expenses().iter().map(expense_row).collect();
    rows.push("Back".to_string());

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&rows)
        .default(0)
        .interact()?;

    Ok(controller.expenses().get(picked).cloned())
}

// -- Tests ----------------------------------------------------------------------------

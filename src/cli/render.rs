//! Text rendering of the expense list

use colored::Colorize;

use crate::model::{format_amount, Expense};

const RULE: &str = "----------------------------------------------------------------";

/// One table row per expense, in list order
#[must_use]
pub fn expense_row(expense: &Expense) -> String {
    // Entries are trusted as loaded, so an amount may not be numeric
    let amount_fmt = match expense.amount_value() {
        Some(amount) => format!("${}", format_amount(amount)),
        None => expense.amount.clone(),
    };

    format!(
        "{:<8} {:<28} {:>12}  {:<14}",
        expense.id.as_str(),
        expense.name,
        amount_fmt,
        expense.category
    )
}

/// The list and the running total, ready for the terminal
#[must_use]
pub fn render_expenses(expenses: &[Expense], total: &str) -> String {
    let mut out = format!("{:>64}\n{RULE}\n", "EXPENSES");

    if expenses.is_empty() {
        out.push_str("No expenses yet\n");
    } else {
        out.push_str(&format!(
            "{:<8} {:<28} {:>12}  {:<14}\n",
            "ID", "NAME", "AMOUNT", "CATEGORY"
        ));
        for expense in expenses {
            out.push_str(&expense_row(expense));
            out.push('\n');
        }
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Total Spent: {}", format!("${total}").bold()));

    out
}

pub fn print_expenses(expenses: &[Expense], total: &str) {
    println!("{}", render_expenses(expenses, total));
}

// -- Tests ----------------------------------------------------------------------------

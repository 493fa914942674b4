pub mod category;
pub mod expense;

pub use category::Category;
pub use expense::{format_amount, total, Expense, ExpenseId, NewExpense};

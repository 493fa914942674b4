//! The form's uncommitted input

use std::str::FromStr;

use crate::error::ValidationError;
use crate::model::expense::parse_amount;
use crate::model::{Category, Expense, NewExpense};

/// Draft fields, held as typed text until submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl Draft {
    /// Copy an existing expense into the form
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.clone(),
            category: expense.category.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check the fields in form order and build the request body.
    ///
    /// Stops at the first failing field.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<NewExpense, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        match parse_amount(&self.amount) {
            Some(amount) if amount > 0.0 => {}
            _ => return Err(ValidationError::InvalidAmount),
        }

        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let category = Category::from_str(&self.category)
            .map_err(|_| ValidationError::UnknownCategory(self.category.clone()))?;

        Ok(NewExpense {
            name: self.name.clone(),
            amount: self.amount.clone(),
            category,
        })
    }
}

// -- Tests ----------------------------------------------------------------------------

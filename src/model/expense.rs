//! Models for the expenses endpoint

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing_log::log::warn;

use super::category::Category;

/// Identifier assigned by the remote store on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExpenseId(String);

impl ExpenseId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_or_number(deserializer).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expense as held by the remote store and the local snapshot.
///
/// Entries are trusted as they arrive: `amount` and `category` are kept as
/// text and only the form input is validated. Missing or null fields load as
/// empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
}

impl Expense {
    /// The amount as a number, if it parses as one
    #[must_use]
    pub fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }
}

/// Body of the create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: String,
    pub category: Category,
}

/// Sum of the amounts of all expenses
///
/// Amounts that don't parse contribute nothing.
#[must_use]
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().fold(0.0, |sum, expense| match expense.amount_value() {
        Some(amount) => sum + amount,
        None => {
            warn!(
                "Skipping unparseable amount {:?} for expense {}",
                expense.amount, expense.id
            );
            sum
        }
    })
}

/// Render an amount rounded to two decimal places
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Parse a decimal amount, ignoring surrounding whitespace
pub(crate) fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

// The store may send ids and amounts as JSON strings, numbers or null
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Null,
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
            Scalar::Null => String::new(),
        }
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_text)
}

// -- Tests ----------------------------------------------------------------------------

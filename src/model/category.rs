use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of categories an expense can be filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Groceries,
    Bills,
    Entertainment,
    Transport,
}

// -- Tests ----------------------------------------------------------------------------

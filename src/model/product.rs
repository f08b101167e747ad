use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DisplayFromStr};

/// A coffee on the menu.
///
/// Products are compiled into the binary (see [`crate::catalog`]) and never
/// change at runtime. Decimal fields serialize as strings (`"3.53"`) so the
/// mobile client sees the same shape it always has.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Short tagline shown on the menu card.
    pub description: String,
    pub price: BigDecimal,
    pub rating: BigDecimal,
    /// Review count.
    #[serde_as(as = "DisplayFromStr")]
    pub reviews: u32,
    pub image: String,
    pub full_description: Option<String>,
}

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Items with a quantity strictly below this are low on stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Category suggestions offered when no config overrides them.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Drinks", "Snacks", "Dairy", "Others"];

/// Filter value that shows every category.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// One inventory record.
///
/// The quantity is kept as the text the operator typed (trimmed), which is also what
/// goes to disk. It is validated as an integer before it ever reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl StockItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    /// The quantity as a number, or `None` for hand-edited lines that don't parse.
    pub fn quantity_value(&self) -> Option<i64> {
        self.quantity.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Low,
    Normal,
}

impl StockLevel {
    pub fn of(quantity: i64) -> Self {
        if quantity < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Normal
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, StockLevel::Low)
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Low => write!(f, "low"),
            StockLevel::Normal => write!(f, "normal"),
        }
    }
}

/// Category selector for the visible table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &StockItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

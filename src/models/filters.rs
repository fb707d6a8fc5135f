//! Transaction view filters
//!
//! Transient state: filters are never persisted.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;
use super::month::Month;
use super::transaction::{Transaction, TransactionType};

/// Category restriction: everything, or one category id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(CategoryId),
}

impl CategorySelector {
    pub fn matches(&self, category_id: &CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category_id,
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

/// Type restriction: everything, or only income / only expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSelector {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeSelector {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == kind,
        }
    }

    /// All -> Income -> Expense -> All
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Only(TransactionType::Income),
            Self::Only(TransactionType::Income) => Self::Only(TransactionType::Expense),
            Self::Only(TransactionType::Expense) => Self::All,
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

impl FromStr for TypeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<TransactionType>().map(Self::Only)
        }
    }
}

/// The active date/category/type restriction applied to the transaction view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// Inclusive start of the date window
    pub date_from: NaiveDate,
    /// Inclusive end of the date window
    pub date_to: NaiveDate,
    pub category: CategorySelector,
    pub kind: TypeSelector,
}

impl Filters {
    /// First day of the month containing `today` through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            date_from: Month::containing(today).start_date(),
            date_to: today,
            category: CategorySelector::All,
            kind: TypeSelector::All,
        }
    }

    /// The whole of the given month
    pub fn for_month(month: Month) -> Self {
        Self {
            date_from: month.start_date(),
            date_to: month.end_date(),
            category: CategorySelector::All,
            kind: TypeSelector::All,
        }
    }

    /// Set the date window
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Restrict to one category
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category = CategorySelector::Only(category_id);
        self
    }

    /// Restrict to one transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = TypeSelector::Only(kind);
        self
    }

    /// Whether a transaction passes every restriction
    pub fn matches(&self, txn: &Transaction) -> bool {
        txn.date >= self.date_from
            && txn.date <= self.date_to
            && self.category.matches(&txn.category_id)
            && self.kind.matches(txn.kind)
    }

    /// The month budgets are compared against: the one containing `date_to`
    pub fn active_month(&self) -> Month {
        Month::containing(self.date_to)
    }
}

impl Default for Filters {
    fn default() -> Self {
        Self::month_to_date(chrono::Local::now().date_naive())
    }
}

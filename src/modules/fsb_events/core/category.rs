use serde::{Deserialize, Serialize};
use std::fmt;

pub type CategoryId = i32;

/// Top-level grouping, e.g. "Football".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl Category {
    pub fn new(id: CategoryId, reference: impl Into<String>) -> Self {
        Self {
            id,
            reference: reference.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category{{id={}, ref='{}'}}", self.id, self.reference)
    }
}

/// Second level of the classification. Several subcategories may carry the
/// same category by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: CategoryId,
    #[serde(rename = "ref")]
    pub reference: String,
    pub category: Category,
}

impl SubCategory {
    pub fn new(id: CategoryId, reference: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            reference: reference.into(),
            category,
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubCategory{{id={}, ref='{}', category={}}}",
            self.id, self.reference, self.category
        )
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::modules::fsb_events::core::category::SubCategory;
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;

pub type EventId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub sub_category: SubCategory,
    #[serde(default)]
    pub market_ref_types: Vec<MarketRefType>,
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        sub_category: SubCategory,
        market_ref_types: Vec<MarketRefType>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sub_category,
            market_ref_types,
            completed,
        }
    }

    pub fn has_market_ref_type(&self, market_ref_type: &MarketRefType) -> bool {
        self.market_ref_types.contains(market_ref_type)
    }

    /// A copy of this event carrying `market_ref_types` instead of its own.
    pub fn with_market_ref_types(&self, market_ref_types: Vec<MarketRefType>) -> Self {
        Self {
            market_ref_types,
            ..self.clone()
        }
    }

    pub fn has_unique_market_ref_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.market_ref_types.len());
        self.market_ref_types
            .iter()
            .all(|market_ref_type| seen.insert(market_ref_type.market_ref_id))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event{{id={}, name='{}', subCategory={}, marketRefTypes=[",
            self.id, self.name, self.sub_category
        )?;
        for (index, market_ref_type) in self.market_ref_types.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{market_ref_type}")?;
        }
        write!(f, "], completed={}}}", self.completed)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

pub type MarketRefId = i32;

/// Outcome-type tag such as Home, Draw or Away. Identified by
/// `market_ref_id`; containment checks compare the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRefType {
    pub market_ref_id: MarketRefId,
    pub market_ref_name: String,
}

impl MarketRefType {
    pub fn new(market_ref_id: MarketRefId, market_ref_name: impl Into<String>) -> Self {
        Self {
            market_ref_id,
            market_ref_name: market_ref_name.into(),
        }
    }
}

impl fmt::Display for MarketRefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketRefType{{marketRefId={}, marketRefName='{}'}}",
            self.market_ref_id, self.market_ref_name
        )
    }
}

// Shared event fixtures: six events, three Football and three Tennis,
// loaded from json/sample_events.json.

use crate::modules::fsb_events::core::category::SubCategory;
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;

const SAMPLE_EVENTS_JSON: &str = include_str!("json/sample_events.json");

pub const GOLDEN_DUMP: &str = concat!(
    "[Event{id=1, name='ManU vs Chelsea', subCategory=SubCategory{id=1, ref='Premier League', category=Category{id=2, ref='Football'}}, marketRefTypes=[MarketRefType{marketRefId=1, marketRefName='Home'}, MarketRefType{marketRefId=2, marketRefName='Draw'}, MarketRefType{marketRefId=3, marketRefName='Away'}], completed=false}\n",
    ", Event{id=2, name='ManU vs Chelsea', subCategory=SubCategory{id=2, ref='Champions League', category=Category{id=2, ref='Football'}}, marketRefTypes=[MarketRefType{marketRefId=1, marketRefName='Home'}, MarketRefType{marketRefId=2, marketRefName='Draw'}, MarketRefType{marketRefId=3, marketRefName='Away'}], completed=false}\n",
    ", Event{id=3, name='ManCity vs ManU', subCategory=SubCategory{id=1, ref='Premier League', category=Category{id=2, ref='Football'}}, marketRefTypes=[MarketRefType{marketRefId=1, marketRefName='Home'}, MarketRefType{marketRefId=2, marketRefName='Draw'}, MarketRefType{marketRefId=3, marketRefName='Away'}], completed=false}\n",
    ", Event{id=4, name='Roger vs Nadal', subCategory=SubCategory{id=3, ref='French Open', category=Category{id=1, ref='Tennis'}}, marketRefTypes=[MarketRefType{marketRefId=1, marketRefName='Home'}], completed=false}\n",
    ", Event{id=5, name='Nadal vs Djokovic', subCategory=SubCategory{id=4, ref='Wimbledon', category=Category{id=1, ref='Tennis'}}, marketRefTypes=[MarketRefType{marketRefId=1, marketRefName='Home'}, MarketRefType{marketRefId=2, marketRefName='Draw'}], completed=false}\n",
    ", Event{id=6, name='Paes vs Roger', subCategory=SubCategory{id=3, ref='French Open', category=Category{id=1, ref='Tennis'}}, marketRefTypes=[MarketRefType{marketRefId=2, marketRefName='Draw'}], completed=false}\n",
    "]"
);

pub fn sample_events() -> Vec<Event> {
    serde_json::from_str(SAMPLE_EVENTS_JSON).unwrap()
}

pub fn sample_events_json() -> &'static str {
    SAMPLE_EVENTS_JSON
}

pub fn home() -> MarketRefType {
    MarketRefType::new(1, "Home")
}

pub fn draw() -> MarketRefType {
    MarketRefType::new(2, "Draw")
}

pub fn away() -> MarketRefType {
    MarketRefType::new(3, "Away")
}

/// Starts from the first sample event ("ManU vs Chelsea", Premier League).
pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: sample_events().remove(0),
        }
    }

    pub fn id(mut self, v: EventId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn sub_category(mut self, v: SubCategory) -> Self {
        self.inner.sub_category = v;
        self
    }

    pub fn market_ref_types(mut self, v: Vec<MarketRefType>) -> Self {
        self.inner.market_ref_types = v;
        self
    }

    pub fn completed(mut self, v: bool) -> Self {
        self.inner.completed = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_load_three_football_and_three_tennis_events() {
        let events = sample_events();
        let football = events
            .iter()
            .filter(|e| e.sub_category.category.reference == "Football")
            .count();
        assert_eq!(events.len(), 6);
        assert_eq!(football, 3);
    }

    #[rstest]
    fn setters_override_fields() {
        let event = EventBuilder::new()
            .id(10)
            .name("Federer vs Murray")
            .market_ref_types(vec![away()])
            .completed(true)
            .build();
        assert_eq!(event.id, 10);
        assert_eq!(event.name, "Federer vs Murray");
        assert_eq!(event.market_ref_types, vec![away()]);
        assert!(event.completed);
    }
}

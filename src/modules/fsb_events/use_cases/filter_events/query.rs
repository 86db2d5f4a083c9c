use crate::modules::fsb_events::core::event::Event;

type Predicate<'a> = Box<dyn Fn(&Event) -> bool + Send + Sync + 'a>;

/// Filter over category and subcategory refs. A criterion only takes part
/// when it is non-blank; comparison uses the value as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub market_ref_name: Option<String>,
}

impl EventFilter {
    pub fn new(
        category: Option<&str>,
        sub_category: Option<&str>,
        market_ref_name: Option<&str>,
    ) -> Self {
        Self {
            category: active(category),
            sub_category: active(sub_category),
            market_ref_name: active(market_ref_name),
        }
    }

    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates: Vec<Predicate<'_>> = Vec::new();
        if let Some(sub_category) = &self.sub_category {
            predicates.push(Box::new(move |event: &Event| {
                event.sub_category.reference == *sub_category
            }));
        }
        if let Some(category) = &self.category {
            predicates.push(Box::new(move |event: &Event| {
                event.sub_category.category.reference == *category
            }));
        }
        predicates
    }

    /// All active predicates joined with AND; matches everything when none
    /// are active.
    pub fn conjunction(&self) -> Predicate<'_> {
        self.predicates().into_iter().reduce(and).unwrap_or_else(always)
    }

    /// Canonical renderings of the matching events, in the order given.
    pub fn apply(&self, events: &[Event]) -> Vec<String> {
        let predicate = self.conjunction();
        let rendered: Vec<String> = events
            .iter()
            .filter(|&event| predicate(event))
            .map(ToString::to_string)
            .collect();

        // Evaluated for the log line only; it never narrows the result.
        let tagged = self.market_ref_name.as_ref().map(|market_ref_name| {
            events
                .iter()
                .filter(|event| {
                    event
                        .market_ref_types
                        .iter()
                        .any(|tag| tag.market_ref_name == *market_ref_name)
                })
                .count()
        });

        tracing::info!(
            category = ?self.category,
            sub_category = ?self.sub_category,
            market_ref_name = ?self.market_ref_name,
            market_ref_tagged = ?tagged,
            matched = rendered.len(),
            "filter by categories"
        );
        rendered
    }
}

fn active(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}

fn and<'a>(left: Predicate<'a>, right: Predicate<'a>) -> Predicate<'a> {
    Box::new(move |event: &Event| left(event) && right(event))
}

fn always<'a>() -> Predicate<'a> {
    Box::new(|_: &Event| true)
}

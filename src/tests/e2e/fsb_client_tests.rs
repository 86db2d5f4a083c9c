use rstest::{fixture, rstest};

use crate::modules::fsb_events::adapters::inbound::client::FsbClient;
use crate::modules::fsb_events::core::event::Event;
use crate::tests::fixtures::events::{GOLDEN_DUMP, draw, sample_events};

struct BeforeEach {
    client: FsbClient,
    events: Vec<Event>,
}

#[fixture]
fn before_each() -> BeforeEach {
    BeforeEach {
        client: FsbClient::in_memory(),
        events: sample_events(),
    }
}

async fn add_all(before_each: &BeforeEach) {
    for event in &before_each.events {
        before_each.client.add_event(event.clone()).await;
    }
}

#[rstest]
#[tokio::test]
async fn add_event(before_each: BeforeEach) {
    let event = before_each.events[0].clone();
    before_each.client.add_event(event.clone()).await;
    assert_eq!(before_each.client.event(event.id).await, Some(event));
    assert_eq!(before_each.client.len().await, 1);
}

#[rstest]
#[tokio::test]
async fn add_duplicate_events(before_each: BeforeEach) {
    let event = before_each.events[0].clone();
    for _ in 0..3 {
        before_each.client.add_event(event.clone()).await;
    }
    assert_eq!(before_each.client.event(event.id).await, Some(event));
    assert_eq!(before_each.client.len().await, 1);
}

#[rstest]
#[tokio::test]
async fn event_completed(before_each: BeforeEach) {
    let client = &before_each.client;
    client.add_event(before_each.events[0].clone()).await;
    client.add_event(before_each.events[1].clone()).await;
    let id = before_each.events[1].id;
    client.event_completed(id).await;
    assert_eq!(client.len().await, 1);
    assert_eq!(client.event(id).await, None);
}

#[rstest]
#[tokio::test]
async fn event_completed_with_unknown_id(before_each: BeforeEach) {
    add_all(&before_each).await;
    before_each.client.event_completed(99).await;
    assert_eq!(before_each.client.len().await, 6);
}

#[rstest]
#[tokio::test]
async fn attach_market_ref_type_to_event(before_each: BeforeEach) {
    let client = &before_each.client;
    let tennis = before_each.events[3].clone();
    client.add_event(before_each.events[0].clone()).await;
    client.add_event(tennis.clone()).await;

    client.attach_market_ref_type_to_event(tennis.id, draw()).await;

    assert_eq!(client.len().await, 2);
    let stored = client.event(tennis.id).await.unwrap();
    assert!(stored.has_market_ref_type(&draw()));
    assert_eq!(stored.market_ref_types.len(), tennis.market_ref_types.len() + 1);
}

#[rstest]
#[tokio::test]
async fn attach_already_present_market_ref_type(before_each: BeforeEach) {
    let client = &before_each.client;
    let event = before_each.events[0].clone();
    client.add_event(event.clone()).await;
    client.attach_market_ref_type_to_event(event.id, draw()).await;
    assert_eq!(client.event(event.id).await, Some(event));
}

#[rstest]
#[tokio::test]
async fn remove_market_ref_type_from_event(before_each: BeforeEach) {
    let client = &before_each.client;
    let wimbledon = before_each.events[4].clone();
    client.add_event(before_each.events[0].clone()).await;
    client.add_event(wimbledon.clone()).await;

    client.remove_market_ref_type_from_event(wimbledon.id, draw()).await;

    assert_eq!(client.len().await, 2);
    let stored = client.event(wimbledon.id).await.unwrap();
    assert!(!stored.has_market_ref_type(&draw()));
    assert_eq!(stored.market_ref_types.len(), wimbledon.market_ref_types.len() - 1);
}

#[rstest]
#[tokio::test]
async fn remove_absent_market_ref_type(before_each: BeforeEach) {
    let client = &before_each.client;
    let french_open = before_each.events[3].clone();
    client.add_event(french_open.clone()).await;
    client.remove_market_ref_type_from_event(french_open.id, draw()).await;
    assert_eq!(client.event(french_open.id).await, Some(french_open));
}

#[rstest]
#[case::with_category(Some("Football"), None, None, 3)]
#[case::with_sub_category(Some(""), Some("Premier League"), None, 2)]
#[case::with_ref_type(None, Some(""), Some("Home"), 6)]
#[case::with_all(Some("Football"), Some("Premier League"), Some("Away"), 2)]
#[case::with_sub_category_and_ref_type(None, Some("Premier League"), Some("Home"), 2)]
#[tokio::test]
async fn future_event_names_collection(
    before_each: BeforeEach,
    #[case] cat: Option<&str>,
    #[case] subcat: Option<&str>,
    #[case] market_ref_name: Option<&str>,
    #[case] expected: usize,
) {
    add_all(&before_each).await;
    let result = before_each
        .client
        .future_event_names_collection(cat, subcat, market_ref_name)
        .await;
    assert_eq!(result.len(), expected);
}

#[rstest]
#[tokio::test]
async fn dump_full_structure(before_each: BeforeEach) {
    let client = &before_each.client;
    client.add_event(before_each.events[0].clone()).await;
    client.add_event(before_each.events[1].clone()).await;
    add_all(&before_each).await;
    assert_eq!(client.dump_full_structure().await, GOLDEN_DUMP);
}

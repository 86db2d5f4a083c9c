use async_graphql::{Context, InputObject, Object, SimpleObject};

use crate::modules::fsb_events::core::category::{Category, SubCategory};
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;
use crate::modules::fsb_events::use_cases::filter_events::query::EventFilter;
use crate::shell::state::AppState;

#[derive(SimpleObject, InputObject, Clone)]
#[graphql(input_name = "CategoryInput", name = "Category")]
pub struct GqlCategory {
    pub id: i32,
    #[graphql(name = "ref")]
    pub reference: String,
}

#[derive(SimpleObject, InputObject, Clone)]
#[graphql(input_name = "SubCategoryInput", name = "SubCategory")]
pub struct GqlSubCategory {
    pub id: i32,
    #[graphql(name = "ref")]
    pub reference: String,
    pub category: GqlCategory,
}

#[derive(SimpleObject, InputObject, Clone)]
#[graphql(input_name = "MarketRefTypeInput", name = "MarketRefType")]
pub struct GqlMarketRefType {
    pub market_ref_id: i32,
    pub market_ref_name: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: EventId,
    pub name: String,
    pub sub_category: GqlSubCategory,
    pub market_ref_types: Vec<GqlMarketRefType>,
    pub completed: bool,
}

#[derive(InputObject, Clone)]
#[graphql(name = "EventInput")]
pub struct GqlEventInput {
    pub id: EventId,
    pub name: String,
    pub sub_category: GqlSubCategory,
    #[graphql(default)]
    pub market_ref_types: Vec<GqlMarketRefType>,
    #[graphql(default)]
    pub completed: bool,
}

impl From<GqlCategory> for Category {
    fn from(v: GqlCategory) -> Self {
        Category::new(v.id, v.reference)
    }
}

impl From<Category> for GqlCategory {
    fn from(v: Category) -> Self {
        Self {
            id: v.id,
            reference: v.reference,
        }
    }
}

impl From<GqlSubCategory> for SubCategory {
    fn from(v: GqlSubCategory) -> Self {
        SubCategory::new(v.id, v.reference, v.category.into())
    }
}

impl From<SubCategory> for GqlSubCategory {
    fn from(v: SubCategory) -> Self {
        Self {
            id: v.id,
            reference: v.reference,
            category: v.category.into(),
        }
    }
}

impl From<GqlMarketRefType> for MarketRefType {
    fn from(v: GqlMarketRefType) -> Self {
        MarketRefType::new(v.market_ref_id, v.market_ref_name)
    }
}

impl From<MarketRefType> for GqlMarketRefType {
    fn from(v: MarketRefType) -> Self {
        Self {
            market_ref_id: v.market_ref_id,
            market_ref_name: v.market_ref_name,
        }
    }
}

impl From<GqlEventInput> for Event {
    fn from(v: GqlEventInput) -> Self {
        Event::new(
            v.id,
            v.name,
            v.sub_category.into(),
            v.market_ref_types.into_iter().map(Into::into).collect(),
            v.completed,
        )
    }
}

impl From<Event> for GqlEvent {
    fn from(v: Event) -> Self {
        Self {
            id: v.id,
            name: v.name,
            sub_category: v.sub_category.into(),
            market_ref_types: v.market_ref_types.into_iter().map(Into::into).collect(),
            completed: v.completed,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn filter_events(
        &self,
        context: &Context<'_>,
        cat: Option<String>,
        subcat: Option<String>,
        market_ref_name: Option<String>,
    ) -> Vec<String> {
        let state = context.data_unchecked::<AppState>();
        let filter = EventFilter::new(
            cat.as_deref(),
            subcat.as_deref(),
            market_ref_name.as_deref(),
        );
        state.queries.filter_event_names(&filter).await
    }

    async fn dump_full_structure(&self, context: &Context<'_>) -> String {
        let state = context.data_unchecked::<AppState>();
        state.queries.dump_full_structure().await
    }

    async fn event(&self, context: &Context<'_>, id: EventId) -> Option<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        state.queries.event(id).await.map(Into::into)
    }
}

/// Mutations mirror the HTTP surface: rejections are logged and the result
/// is always `true`.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_event(&self, context: &Context<'_>, event: GqlEventInput) -> bool {
        let state = context.data_unchecked::<AppState>();
        let _ = state.commands.add_event(Some(event.into())).await;
        true
    }

    async fn complete_event(&self, context: &Context<'_>, id: EventId) -> bool {
        let state = context.data_unchecked::<AppState>();
        let _ = state.commands.complete_event(id).await;
        true
    }

    async fn attach_market_ref_type(
        &self,
        context: &Context<'_>,
        id: EventId,
        market_ref_type: GqlMarketRefType,
    ) -> bool {
        let state = context.data_unchecked::<AppState>();
        let _ = state
            .commands
            .attach_market_ref_type(id, market_ref_type.into())
            .await;
        true
    }

    async fn remove_market_ref_type(
        &self,
        context: &Context<'_>,
        id: EventId,
        market_ref_type: GqlMarketRefType,
    ) -> bool {
        let state = context.data_unchecked::<AppState>();
        let _ = state
            .commands
            .remove_market_ref_type(id, market_ref_type.into())
            .await;
        true
    }
}

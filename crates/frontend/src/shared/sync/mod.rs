//! Client-side data synchronization for entity collections:
//! remote CRUD, the local cache, and the views derived from it.

pub mod aggregation;
pub mod collection_store;
pub mod entity_client;
pub mod filter;
pub mod orchestrator;

pub use aggregation::{
    category_summary, count_by_category, sum_by_category, CategoryAggregate, CategoryCount,
    CategoryTotal, UNCATEGORIZED,
};
pub use collection_store::{LocalCollection, StoreError};
pub use entity_client::{
    EndpointRules, EntityClient, HttpEntityClient, RemoteError, ResponseShape,
};
pub use filter::{filter_by_category, CategoryFilter, ALL_CATEGORIES};
pub use orchestrator::{
    finish_save, CollectionController, CollectionState, LoadPhase, MutationError, StateCell,
    SyncPolicy,
};

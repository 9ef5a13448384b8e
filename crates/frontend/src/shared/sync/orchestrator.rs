//! Mutation Orchestrator
//!
//! Ties [`EntityClient`] calls to [`LocalCollection`] updates for one entity kind.
//!
//! - load / refresh: `Idle -> Loading -> Ready | Failed`; on failure the last
//!   known collection stays on screen
//! - create / update: follow the configured [`SyncPolicy`], the same for both
//! - delete: after an explicit confirmation, removed locally only once the
//!   server reported success
//!
//! State lives in a [`CollectionState`] owned by the view; the orchestrator
//! reaches it through [`StateCell`], which refuses writes once the owner is gone.

use super::collection_store::LocalCollection;
use super::entity_client::{EntityClient, Operation, RemoteError};
use contracts::domain::common::{Entity, EntityDraft, EntityId, ValidationError};
use leptos::prelude::*;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use thiserror::Error;

/// What the local collection does after a successful create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncPolicy {
    /// Re-run `list()` and replace the whole collection.
    #[default]
    Refetch,
    /// Append / replace the single record the server returned.
    Patch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Explicit state container for one entity kind, owned by the view.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub collection: LocalCollection<T>,
    pub phase: LoadPhase,
    /// User-visible, non-blocking message of the last failure.
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            collection: LocalCollection::default(),
            phase: LoadPhase::Idle,
            error: None,
        }
    }
}

impl<T: Entity> CollectionState<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn items(&self) -> &[T] {
        self.collection.items()
    }
}

/// Write access to a [`CollectionState`] that may have been disposed.
pub trait StateCell<T> {
    /// Runs `f` against the state, or returns `None` if the owner is gone.
    fn try_apply<R>(&self, f: impl FnOnce(&mut CollectionState<T>) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<CollectionState<T>> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut CollectionState<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<CollectionState<T>>> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut CollectionState<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T> StateCell<T> for Weak<RefCell<CollectionState<T>>> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut CollectionState<T>) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&mut cell.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("collection view was disposed before the response arrived")]
    Detached,
}

impl MutationError {
    /// Inline message for the form that triggered the mutation.
    pub fn user_message(&self) -> Option<String> {
        match self {
            MutationError::Validation(e) => Some(e.to_string()),
            MutationError::Remote(e) => Some(failure_message(e.operation, e.entity_kind)),
            MutationError::Detached => None,
        }
    }
}

pub fn failure_message(operation: Operation, element: &str) -> String {
    match operation {
        Operation::List => format!("Failed to load {}s. Please refresh the page.", element),
        Operation::Get => format!("Failed to load {}. Please try again.", element),
        Operation::Create => format!("Failed to create {}. Please try again.", element),
        Operation::Update => format!("Failed to update {}. Please try again.", element),
        Operation::Remove => format!("Failed to delete {}. Please try again later.", element),
    }
}

/// Settles a form's save: `on_saved` on success, the inline message otherwise.
///
/// Either target may belong to a view that is already gone; that is a no-op.
pub fn finish_save<T>(
    result: Result<T, MutationError>,
    on_saved: Callback<()>,
    error: RwSignal<Option<String>>,
) {
    match result {
        Ok(_) => {
            if on_saved.try_run(()).is_none() {
                log::debug!("form owner disposed, skipping on_saved");
            }
        }
        Err(e) => {
            if let Some(message) = e.user_message() {
                let _ = error.try_set(Some(message));
            }
        }
    }
}

pub struct CollectionController<C, S> {
    client: Arc<C>,
    state: S,
    policy: SyncPolicy,
}

impl<C, S: Clone> Clone for CollectionController<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: self.state.clone(),
            policy: self.policy,
        }
    }
}

impl<C, S> CollectionController<C, S>
where
    C: EntityClient,
    S: StateCell<C::Entity>,
{
    pub fn new(client: Arc<C>, state: S, policy: SyncPolicy) -> Self {
        Self {
            client,
            state,
            policy,
        }
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    fn apply<R>(&self, f: impl FnOnce(&mut CollectionState<C::Entity>) -> R) -> Result<R, MutationError> {
        self.state.try_apply(f).ok_or_else(|| {
            log::debug!(
                "{}: view disposed, dropping response",
                C::Entity::list_name()
            );
            MutationError::Detached
        })
    }

    /// Surfaces a remote failure inline; the collection itself is not touched.
    fn report(&self, error: &RemoteError) {
        let message = failure_message(error.operation, C::Entity::element_name());
        let _ = self.state.try_apply(|s| s.error = Some(message));
    }

    fn clear_error(&self) {
        let _ = self.state.try_apply(|s| s.error = None);
    }

    pub async fn refresh(&self) -> Result<(), MutationError> {
        self.apply(|s| s.phase = LoadPhase::Loading)?;
        log::debug!("{}: loading", C::Entity::list_name());

        match self.client.list().await {
            Ok(entities) => {
                let count = entities.len();
                self.apply(|s| {
                    s.collection = s.collection.replace_all(entities);
                    s.phase = LoadPhase::Ready;
                    s.error = None;
                })?;
                log::debug!("{}: ready ({} records)", C::Entity::list_name(), count);
                Ok(())
            }
            Err(error) => {
                self.apply(|s| {
                    s.phase = LoadPhase::Failed;
                    s.error = Some(failure_message(Operation::List, C::Entity::element_name()));
                })?;
                Err(error.into())
            }
        }
    }

    /// Full refetch after a mutation that already succeeded remotely.
    ///
    /// A failed refetch only warns; a disposed view is still `Detached`.
    async fn resync(&self) -> Result<(), MutationError> {
        match self.refresh().await {
            Err(MutationError::Detached) => Err(MutationError::Detached),
            Err(error) => {
                log::warn!(
                    "{}: refetch after mutation failed: {}",
                    C::Entity::list_name(),
                    error
                );
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    pub async fn create<D>(&self, draft: &D) -> Result<C::Entity, MutationError>
    where
        D: EntityDraft<Target = C::Entity>,
    {
        let new = draft.validate()?;
        self.clear_error();

        let created = match self.client.create(&new).await {
            Ok(created) => created,
            Err(error) => {
                self.report(&error);
                return Err(error.into());
            }
        };

        match self.policy {
            SyncPolicy::Refetch => self.resync().await?,
            SyncPolicy::Patch => {
                let patched = self.apply(|s| {
                    s.collection
                        .append(created.clone())
                        .map(|next| s.collection = next)
                })?;
                if let Err(error) = patched {
                    log::warn!("{}, falling back to refetch", error);
                    self.resync().await?;
                }
            }
        }
        Ok(created)
    }

    pub async fn update<D>(&self, id: EntityId, draft: &D) -> Result<C::Entity, MutationError>
    where
        D: EntityDraft<Target = C::Entity>,
    {
        let request = C::Entity::with_id(id, draft.validate()?);
        self.clear_error();

        let updated = match self.client.update(&request).await {
            Ok(updated) => updated,
            Err(error) => {
                self.report(&error);
                return Err(error.into());
            }
        };

        match self.policy {
            SyncPolicy::Refetch => self.resync().await?,
            SyncPolicy::Patch => {
                let patched = self.apply(|s| {
                    s.collection
                        .replace_by_id(updated.clone())
                        .map(|next| s.collection = next)
                })?;
                if let Err(error) = patched {
                    log::warn!("{}, falling back to refetch", error);
                    self.resync().await?;
                }
            }
        }
        Ok(updated)
    }

    /// Returns `Ok(false)` when the user declined the confirmation.
    pub async fn remove(
        &self,
        id: EntityId,
        confirm: impl FnOnce() -> bool,
    ) -> Result<bool, MutationError> {
        if !confirm() {
            return Ok(false);
        }
        self.clear_error();

        match self.client.remove(id).await {
            Ok(_) => {
                self.apply(|s| s.collection = s.collection.remove_by_id(id))?;
                Ok(true)
            }
            Err(error) => {
                self.report(&error);
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sync::entity_client::RemoteCause;
    use async_trait::async_trait;
    use contracts::domain::a001_product::{NewProduct, Product, ProductDraft};
    use std::cell::Cell;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct FakeServer {
        rows: Vec<Product>,
        next_id: EntityId,
        calls: Vec<&'static str>,
        failing: Option<Operation>,
        /// Server-side normalization applied on create/update.
        name_suffix: &'static str,
    }

    #[derive(Default)]
    struct FakeClient {
        server: RefCell<FakeServer>,
    }

    impl FakeClient {
        fn with_rows(rows: Vec<Product>) -> Self {
            let next_id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            Self {
                server: RefCell::new(FakeServer {
                    rows,
                    next_id,
                    ..FakeServer::default()
                }),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.server.borrow().calls.clone()
        }

        fn begin(&self, operation: Operation, name: &'static str) -> Result<(), RemoteError> {
            let mut server = self.server.borrow_mut();
            server.calls.push(name);
            if server.failing == Some(operation) {
                return Err(RemoteError {
                    operation,
                    entity_kind: "product",
                    cause: RemoteCause::Status {
                        status: 503,
                        body: String::new(),
                    },
                });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl EntityClient for FakeClient {
        type Entity = Product;

        async fn list(&self) -> Result<Vec<Product>, RemoteError> {
            self.begin(Operation::List, "list")?;
            Ok(self.server.borrow().rows.clone())
        }

        async fn get(&self, id: EntityId) -> Result<Product, RemoteError> {
            self.begin(Operation::Get, "get")?;
            let server = self.server.borrow();
            server.rows.iter().find(|p| p.id == id).cloned().ok_or(RemoteError {
                operation: Operation::Get,
                entity_kind: "product",
                cause: RemoteCause::Status {
                    status: 404,
                    body: String::new(),
                },
            })
        }

        async fn create(&self, new: &NewProduct) -> Result<Product, RemoteError> {
            self.begin(Operation::Create, "create")?;
            let mut server = self.server.borrow_mut();
            let mut created = Product::with_id(server.next_id, new.clone());
            created.name.push_str(server.name_suffix);
            server.next_id += 1;
            server.rows.push(created.clone());
            Ok(created)
        }

        async fn update(&self, entity: &Product) -> Result<Product, RemoteError> {
            self.begin(Operation::Update, "update")?;
            let mut server = self.server.borrow_mut();
            let mut stored = entity.clone();
            stored.name.push_str(server.name_suffix);
            if let Some(row) = server.rows.iter_mut().find(|p| p.id == entity.id) {
                *row = stored.clone();
            }
            Ok(stored)
        }

        async fn remove(&self, id: EntityId) -> Result<Option<Product>, RemoteError> {
            self.begin(Operation::Remove, "remove")?;
            let mut server = self.server.borrow_mut();
            let position = server.rows.iter().position(|p| p.id == id);
            Ok(position.map(|i| server.rows.remove(i)))
        }
    }

    fn product(id: EntityId, category: &str, stock: i64) -> Product {
        Product {
            id,
            name: format!("item-{}", id),
            identifier: id * 100,
            price: 2.5,
            stock,
            category: category.to_string(),
        }
    }

    fn seed() -> Vec<Product> {
        vec![product(1, "toys", 5), product(2, "toys", 3), product(3, "food", 10)]
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Kite".into(),
            identifier: "400".into(),
            price: "12.00".into(),
            stock: "7".into(),
            category: "toys".into(),
        }
    }

    type Shared = Rc<RefCell<CollectionState<Product>>>;

    fn controller(
        client: FakeClient,
        policy: SyncPolicy,
    ) -> (Arc<FakeClient>, Shared, CollectionController<FakeClient, Shared>) {
        let client = Arc::new(client);
        let state: Shared = Rc::new(RefCell::new(CollectionState::default()));
        let controller = CollectionController::new(Arc::clone(&client), state.clone(), policy);
        (client, state, controller)
    }

    fn ids(state: &Shared) -> Vec<EntityId> {
        state.borrow().items().iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_refresh_loads_server_truth() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        assert_eq!(state.borrow().phase, LoadPhase::Idle);

        controller.refresh().await.unwrap();

        assert_eq!(state.borrow().phase, LoadPhase::Ready);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(client.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_collection() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();
        client.server.borrow_mut().failing = Some(Operation::List);
        client.server.borrow_mut().rows.clear();

        let result = controller.refresh().await;

        assert!(matches!(result, Err(MutationError::Remote(_))));
        let state = state.borrow();
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.items().len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load products. Please refresh the page.")
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_client() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        let empty_name = ProductDraft {
            name: String::new(),
            ..draft()
        };

        let result = controller.create(&empty_name).await;

        assert_eq!(
            result,
            Err(MutationError::Validation(ValidationError::MissingField {
                field: "Product Name"
            }))
        );
        assert!(client.calls().is_empty());
        assert_eq!(state.borrow().phase, LoadPhase::Idle);
    }

    #[tokio::test]
    async fn test_create_with_refetch_policy() {
        let mut fake = FakeClient::with_rows(seed());
        fake.server.get_mut().name_suffix = " (new)";
        let (client, state, controller) = controller(fake, SyncPolicy::Refetch);
        controller.refresh().await.unwrap();

        let created = controller.create(&draft()).await.unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(client.calls(), vec!["list", "create", "list"]);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
        assert_eq!(
            state.borrow().collection.get(4).map(|p| p.name.clone()),
            Some("Kite (new)".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_with_patch_policy_appends_locally() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Patch);
        controller.refresh().await.unwrap();

        controller.create(&draft()).await.unwrap();

        assert_eq!(client.calls(), vec!["list", "create"]);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_patch_conflict_falls_back_to_refetch() {
        let fake = FakeClient::with_rows(seed());
        // a stale local row already carries the id the server is about to assign
        fake.server.borrow_mut().next_id = 3;
        fake.server.borrow_mut().rows.truncate(2);
        let (client, state, controller) = controller(fake, SyncPolicy::Patch);
        state.borrow_mut().collection = LocalCollection::from(seed());

        controller.create(&draft()).await.unwrap();

        assert_eq!(client.calls(), vec!["create", "list"]);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.borrow().collection.get(3).map(|p| p.name.clone()), Some("Kite".into()));
    }

    #[tokio::test]
    async fn test_failed_create_leaves_collection_unchanged() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();
        client.server.borrow_mut().failing = Some(Operation::Create);
        let before = state.borrow().collection.clone();

        let result = controller.create(&draft()).await;

        let error = result.unwrap_err();
        assert_eq!(
            error.user_message().as_deref(),
            Some("Failed to create product. Please try again.")
        );
        assert_eq!(state.borrow().collection, before);
        assert_eq!(state.borrow().phase, LoadPhase::Ready);
        assert!(state.borrow().error.is_some());
    }

    #[tokio::test]
    async fn test_update_with_patch_policy_shows_server_version() {
        let mut fake = FakeClient::with_rows(seed());
        fake.server.get_mut().name_suffix = " [saved]";
        let (client, state, controller) = controller(fake, SyncPolicy::Patch);
        controller.refresh().await.unwrap();

        let updated = controller.update(2, &draft()).await.unwrap();

        assert_eq!(updated.name, "Kite [saved]");
        assert_eq!(client.calls(), vec!["list", "update"]);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        let state = state.borrow();
        assert_eq!(state.collection.get(2).map(|p| p.name.as_str()), Some("Kite [saved]"));
        assert_eq!(state.collection.get(1), Some(&product(1, "toys", 5)));
    }

    #[tokio::test]
    async fn test_update_with_refetch_policy() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();

        controller.update(3, &draft()).await.unwrap();

        assert_eq!(client.calls(), vec!["list", "update", "list"]);
        assert_eq!(state.borrow().collection.get(3).map(|p| p.stock), Some(7));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_confirmed_id() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();

        let removed = controller.remove(2, || true).await.unwrap();

        assert!(removed);
        assert_eq!(ids(&state), vec![1, 3]);
        assert_eq!(client.calls(), vec!["list", "remove"]);
    }

    #[tokio::test]
    async fn test_declined_delete_makes_no_call() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();

        let removed = controller.remove(2, || false).await.unwrap();

        assert!(!removed);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(client.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row_and_reports() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();
        client.server.borrow_mut().failing = Some(Operation::Remove);

        assert!(controller.remove(2, || true).await.is_err());

        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(
            state.borrow().error.as_deref(),
            Some("Failed to delete product. Please try again later.")
        );
        // no automatic retry
        assert_eq!(client.calls(), vec!["list", "remove"]);
    }

    /// Alive for the first `remaining` writes, then behaves like a disposed signal.
    #[derive(Clone)]
    struct Unmounting {
        cell: Shared,
        remaining: Rc<Cell<usize>>,
    }

    impl StateCell<Product> for Unmounting {
        fn try_apply<R>(&self, f: impl FnOnce(&mut CollectionState<Product>) -> R) -> Option<R> {
            if self.remaining.get() == 0 {
                return None;
            }
            self.remaining.set(self.remaining.get() - 1);
            Some(f(&mut self.cell.borrow_mut()))
        }
    }

    #[tokio::test]
    async fn test_response_after_unmount_is_dropped() {
        let client = Arc::new(FakeClient::with_rows(seed()));
        let cell: Shared = Rc::new(RefCell::new(CollectionState::default()));
        let state = Unmounting {
            cell: cell.clone(),
            remaining: Rc::new(Cell::new(1)),
        };
        let controller = CollectionController::new(client, state, SyncPolicy::Refetch);

        let result = controller.refresh().await;

        assert_eq!(result, Err(MutationError::Detached));
        assert_eq!(cell.borrow().phase, LoadPhase::Loading);
        assert!(cell.borrow().items().is_empty());
    }

    #[tokio::test]
    async fn test_weak_state_after_drop_is_detached() {
        let client = Arc::new(FakeClient::with_rows(seed()));
        let cell: Shared = Rc::new(RefCell::new(CollectionState::default()));
        let controller =
            CollectionController::new(Arc::clone(&client), Rc::downgrade(&cell), SyncPolicy::Refetch);
        drop(cell);

        assert_eq!(controller.refresh().await, Err(MutationError::Detached));
        assert!(client.calls().is_empty());
    }

    /// Controller whose view goes away while the mutation request is in flight:
    /// only the pre-request `clear_error` write lands.
    fn unmounting_during_request(
        policy: SyncPolicy,
    ) -> (
        Arc<FakeClient>,
        Shared,
        CollectionController<FakeClient, Unmounting>,
    ) {
        let client = Arc::new(FakeClient::with_rows(seed()));
        let cell: Shared = Rc::new(RefCell::new(CollectionState::default()));
        let state = Unmounting {
            cell: cell.clone(),
            remaining: Rc::new(Cell::new(1)),
        };
        let controller = CollectionController::new(Arc::clone(&client), state, policy);
        (client, cell, controller)
    }

    #[tokio::test]
    async fn test_create_after_unmount_is_detached_under_both_policies() {
        for policy in [SyncPolicy::Refetch, SyncPolicy::Patch] {
            let (client, cell, controller) = unmounting_during_request(policy);

            let result = controller.create(&draft()).await;

            assert_eq!(result, Err(MutationError::Detached), "{:?}", policy);
            assert_eq!(client.calls(), vec!["create"], "{:?}", policy);
            assert!(cell.borrow().items().is_empty());
            assert_eq!(cell.borrow().phase, LoadPhase::Idle);
        }
    }

    #[tokio::test]
    async fn test_update_after_unmount_is_detached_under_both_policies() {
        for policy in [SyncPolicy::Refetch, SyncPolicy::Patch] {
            let (client, cell, controller) = unmounting_during_request(policy);

            let result = controller.update(2, &draft()).await;

            assert_eq!(result, Err(MutationError::Detached), "{:?}", policy);
            assert_eq!(client.calls(), vec!["update"], "{:?}", policy);
            assert!(cell.borrow().items().is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_refetch_after_create_still_succeeds() {
        let (client, state, controller) = controller(FakeClient::with_rows(seed()), SyncPolicy::Refetch);
        controller.refresh().await.unwrap();
        client.server.borrow_mut().failing = Some(Operation::List);

        let created = controller.create(&draft()).await;

        assert_eq!(created.map(|p| p.id), Ok(4));
        assert_eq!(client.calls(), vec!["list", "create", "list"]);
        // stale but displayed
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.borrow().phase, LoadPhase::Failed);
    }

    fn remote_failure() -> MutationError {
        MutationError::Remote(RemoteError {
            operation: Operation::Update,
            entity_kind: "product",
            cause: RemoteCause::Transport("offline".into()),
        })
    }

    #[test]
    fn test_finish_save_runs_callback_or_reports() {
        let owner = Owner::new();
        owner.with(|| {
            let saved = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&saved);
            let on_saved = Callback::new(move |_: ()| flag.store(true, Ordering::SeqCst));
            let error = RwSignal::new(None::<String>);

            finish_save(Err::<(), _>(remote_failure()), on_saved, error);
            assert!(!saved.load(Ordering::SeqCst));
            assert_eq!(
                error.get_untracked().as_deref(),
                Some("Failed to update product. Please try again.")
            );

            finish_save(Ok(()), on_saved, error);
            assert!(saved.load(Ordering::SeqCst));
        });
    }

    #[test]
    fn test_finish_save_after_owner_disposed_is_a_no_op() {
        let owner = Owner::new();
        let (on_saved, error) = owner.with(|| {
            (
                Callback::new(|_: ()| ()),
                RwSignal::new(None::<String>),
            )
        });
        drop(owner);

        finish_save(Ok(()), on_saved, error);
        finish_save(Err::<(), _>(remote_failure()), on_saved, error);
        finish_save(Err::<(), _>(MutationError::Detached), on_saved, error);
    }

    #[test]
    fn test_sync_policy_parses_from_config_values() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: SyncPolicy,
        }
        let parsed: Wrapper = toml::from_str(r#"policy = "patch""#).unwrap();
        assert_eq!(parsed.policy, SyncPolicy::Patch);
        assert_eq!(SyncPolicy::default(), SyncPolicy::Refetch);
    }
}

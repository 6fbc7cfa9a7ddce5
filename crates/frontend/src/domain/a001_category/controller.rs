//! Category manager workflows.
//!
//! Each workflow issues one request, applies the result to the state record,
//! raises one notification, and reloads the full list after a successful
//! mutation. The list is never patched locally.

use super::state::{CategoryManagerState, CategoryOperation, LoadOutcome};
use crate::shared::api_error::ApiError;
use crate::shared::notifications::{Notification, NotificationService};
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a001_category::api::CategoryNameDto;
use leptos::prelude::*;

/// Remote category API
#[async_trait(?Send)]
pub trait CategoryApi {
    async fn list(&self) -> Result<Vec<Category>, ApiError>;
    async fn create(&self, body: &CategoryNameDto) -> Result<(), ApiError>;
    async fn update(&self, id: &CategoryId, body: &CategoryNameDto) -> Result<(), ApiError>;
    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError>;
}

/// Owner of the state record.
///
/// Returns `None` once the view is disposed; workflows stop at that point.
pub trait StateStore {
    fn update_state<R>(&self, f: impl FnOnce(&mut CategoryManagerState) -> R) -> Option<R>;
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl StateStore for RwSignal<CategoryManagerState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut CategoryManagerState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl Notifier for NotificationService {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

fn log_failure(op: CategoryOperation, err: &ApiError) {
    log::error!("category {:?} failed: {}", op, err);
}

/// Fetch the full list. Only the newest reload may replace the cached list.
pub async fn load<A, S, N>(api: &A, store: &S, notifier: &N)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
    N: Notifier,
{
    let Some(ticket) = store.update_state(|s| s.begin_load()) else {
        return;
    };
    log::debug!("loading categories (seq {})", ticket.seq());

    let result = api.list().await;
    if let Err(err) = &result {
        log_failure(CategoryOperation::Fetch, err);
    }

    match store.update_state(|s| s.finish_load(ticket, result)) {
        Some(LoadOutcome::Applied) => {}
        Some(LoadOutcome::Failed(notification)) => notifier.notify(notification),
        Some(LoadOutcome::Stale) => {
            log::debug!("dropping stale category list (seq {})", ticket.seq());
        }
        None => {}
    }
}

/// Create a category from the pending create-name. No-op while the name is empty.
pub async fn create<A, S, N>(api: &A, store: &S, notifier: &N)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
    N: Notifier,
{
    let Some(body) = store.update_state(|s| s.create_request()).flatten() else {
        return;
    };
    log::debug!("creating category {:?}", body.name);

    let result = api.create(&body).await;
    if let Err(err) = &result {
        log_failure(CategoryOperation::Create, err);
    }

    let Some(outcome) = store.update_state(|s| s.finish_create(&body.name, result)) else {
        return;
    };
    notifier.notify(outcome.notification);
    if outcome.reload {
        load(api, store, notifier).await;
    }
}

/// Rename the selected category. No-op while the editor is closed.
pub async fn submit_edit<A, S, N>(api: &A, store: &S, notifier: &N)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
    N: Notifier,
{
    let Some((id, body)) = store.update_state(|s| s.update_request()).flatten() else {
        return;
    };
    log::debug!("updating category {} -> {:?}", id, body.name);

    let result = api.update(&id, &body).await;
    if let Err(err) = &result {
        log_failure(CategoryOperation::Update, err);
    }

    let Some(outcome) = store.update_state(|s| s.finish_update(&id, &body.name, result)) else {
        return;
    };
    notifier.notify(outcome.notification);
    if outcome.reload {
        load(api, store, notifier).await;
    }
}

/// Delete by id, without a confirmation prompt.
pub async fn remove<A, S, N>(api: &A, store: &S, notifier: &N, id: CategoryId)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
    N: Notifier,
{
    log::debug!("deleting category {}", id);

    let result = api.delete(&id).await;
    if let Err(err) = &result {
        log_failure(CategoryOperation::Delete, err);
    }

    let Some(outcome) = store.update_state(|s| s.finish_delete(result)) else {
        return;
    };
    notifier.notify(outcome.notification);
    if outcome.reload {
        load(api, store, notifier).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::state::EditorState;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Create(String),
        Update(String, String),
        Delete(String),
    }

    /// In-memory server. Mutations answer from `replies` first, else succeed.
    #[derive(Default)]
    struct FakeApi {
        server: RefCell<Vec<Category>>,
        calls: RefCell<Vec<Call>>,
        replies: RefCell<VecDeque<Result<(), ApiError>>>,
        list_error: RefCell<Option<ApiError>>,
    }

    impl FakeApi {
        fn with(categories: Vec<Category>) -> Self {
            let api = Self::default();
            *api.server.borrow_mut() = categories;
            api
        }

        fn reply(&self, result: Result<(), ApiError>) {
            self.replies.borrow_mut().push_back(result);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }

        fn next_reply(&self) -> Result<(), ApiError> {
            self.replies.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    #[async_trait(?Send)]
    impl CategoryApi for FakeApi {
        async fn list(&self) -> Result<Vec<Category>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            match self.list_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(self.server.borrow().clone()),
            }
        }

        async fn create(&self, body: &CategoryNameDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Create(body.name.clone()));
            let reply = self.next_reply();
            if reply.is_ok() {
                let id = format!("c{}", self.server.borrow().len() + 1);
                self.server
                    .borrow_mut()
                    .push(Category::new(id, body.name.clone()));
            }
            reply
        }

        async fn update(&self, id: &CategoryId, body: &CategoryNameDto) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.value().to_string(), body.name.clone()));
            let reply = self.next_reply();
            if reply.is_ok() {
                for c in self.server.borrow_mut().iter_mut() {
                    if &c.id == id {
                        c.name = body.name.clone();
                    }
                }
            }
            reply
        }

        async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Delete(id.value().to_string()));
            let reply = self.next_reply();
            if reply.is_ok() {
                self.server.borrow_mut().retain(|c| &c.id != id);
            }
            reply
        }
    }

    #[derive(Default)]
    struct TestStore {
        state: RefCell<CategoryManagerState>,
        disposed: Cell<bool>,
    }

    impl StateStore for TestStore {
        fn update_state<R>(&self, f: impl FnOnce(&mut CategoryManagerState) -> R) -> Option<R> {
            if self.disposed.get() {
                return None;
            }
            Some(f(&mut self.state.borrow_mut()))
        }
    }

    impl TestStore {
        fn snapshot(&self) -> CategoryManagerState {
            self.state.borrow().clone()
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    impl Recorder {
        fn all(&self) -> Vec<Notification> {
            self.0.borrow().clone()
        }
    }

    fn books() -> Category {
        Category::new("c1", "Books")
    }

    #[test]
    fn test_mount_with_empty_server() {
        let api = FakeApi::default();
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(load(&api, &store, &notes));

        assert_eq!(api.calls(), vec![Call::List]);
        assert!(store.snapshot().categories.is_empty());
        assert!(store.snapshot().load_finished);
        assert!(notes.all().is_empty());
    }

    #[test]
    fn test_load_failure_notifies_and_keeps_list() {
        let api = FakeApi::with(vec![books()]);
        let store = TestStore::default();
        let notes = Recorder::default();
        block_on(load(&api, &store, &notes));

        *api.list_error.borrow_mut() = Some(ApiError::rejected(None));
        block_on(load(&api, &store, &notes));

        assert_eq!(store.snapshot().categories, vec![books()]);
        assert_eq!(
            notes.all(),
            vec![Notification::error("Failed to fetch categories")]
        );
    }

    #[test]
    fn test_failed_first_load_finishes_with_empty_list() {
        let api = FakeApi::with(vec![books()]);
        *api.list_error.borrow_mut() = Some(ApiError::Network("offline".into()));
        let store = TestStore::default();
        let notes = Recorder::default();
        block_on(load(&api, &store, &notes));

        let state = store.snapshot();
        assert!(state.load_finished);
        assert!(state.categories.is_empty());
        assert_eq!(
            notes.all(),
            vec![Notification::error(
                "Something went wrong while fetching categories"
            )]
        );
    }

    #[test]
    fn test_create_success_reloads_once() {
        let api = FakeApi::default();
        let store = TestStore::default();
        let notes = Recorder::default();
        store.update_state(|s| s.set_create_name("Garden".to_string()));

        block_on(create(&api, &store, &notes));

        assert_eq!(
            api.calls(),
            vec![Call::Create("Garden".to_string()), Call::List]
        );
        let state = store.snapshot();
        assert!(state.create_name.is_empty());
        assert_eq!(state.categories, vec![Category::new("c1", "Garden")]);
        assert_eq!(
            notes.all(),
            vec![Notification::success("Garden created successfully")]
        );
    }

    #[test]
    fn test_create_rejected_keeps_name_and_skips_reload() {
        let api = FakeApi::default();
        api.reply(Err(ApiError::rejected(Some("Name already exists".into()))));
        let store = TestStore::default();
        let notes = Recorder::default();
        store.update_state(|s| s.set_create_name("Books".to_string()));

        block_on(create(&api, &store, &notes));

        assert_eq!(api.calls(), vec![Call::Create("Books".to_string())]);
        assert_eq!(store.snapshot().create_name, "Books");
        let all = notes.all();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_error());
        assert!(all[0].message.contains("Name already exists"));
    }

    #[test]
    fn test_create_with_empty_name_sends_nothing() {
        let api = FakeApi::default();
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(create(&api, &store, &notes));

        assert!(api.calls().is_empty());
        assert!(notes.all().is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let api = FakeApi::with(vec![books()]);
        let store = TestStore::default();
        let notes = Recorder::default();
        block_on(load(&api, &store, &notes));

        let row = store.snapshot().categories[0].clone();
        store.update_state(|s| s.begin_edit(&row));
        let state = store.snapshot();
        assert_eq!(state.editor.name(), Some("Books"));
        assert_eq!(state.editor.selected().map(|c| c.id.value()), Some("c1"));

        store.update_state(|s| s.set_edit_name("Novels".to_string()));
        block_on(submit_edit(&api, &store, &notes));

        assert_eq!(
            api.calls(),
            vec![
                Call::List,
                Call::Update("c1".to_string(), "Novels".to_string()),
                Call::List,
            ]
        );
        let state = store.snapshot();
        assert_eq!(state.editor, EditorState::Closed);
        assert_eq!(state.categories, vec![Category::new("c1", "Novels")]);
        assert_eq!(
            notes.all(),
            vec![Notification::success("Novels updated successfully")]
        );
    }

    #[test]
    fn test_edit_failure_leaves_overlay_open() {
        let api = FakeApi::with(vec![books()]);
        api.reply(Err(ApiError::Status(500)));
        let store = TestStore::default();
        let notes = Recorder::default();
        store.update_state(|s| {
            s.begin_edit(&books());
            s.set_edit_name("Novels".to_string());
        });

        block_on(submit_edit(&api, &store, &notes));

        assert_eq!(api.list_calls(), 0);
        let state = store.snapshot();
        assert_eq!(state.editor.name(), Some("Novels"));
        assert_eq!(state.editor.selected(), Some(&books()));
        assert_eq!(
            notes.all(),
            vec![Notification::error(
                "Something went wrong while updating category"
            )]
        );
    }

    #[test]
    fn test_submit_edit_without_selection_is_noop() {
        let api = FakeApi::default();
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(submit_edit(&api, &store, &notes));

        assert!(api.calls().is_empty());
        assert!(notes.all().is_empty());
    }

    #[test]
    fn test_delete_issues_request_for_row_id() {
        let api = FakeApi::with(vec![books(), Category::new("c2", "Toys")]);
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(remove(&api, &store, &notes, CategoryId::new("c1")));

        assert_eq!(
            api.calls(),
            vec![Call::Delete("c1".to_string()), Call::List]
        );
        assert_eq!(store.snapshot().categories, vec![Category::new("c2", "Toys")]);
        assert_eq!(
            notes.all(),
            vec![Notification::success("Category deleted successfully")]
        );
    }

    #[test]
    fn test_delete_failure_notifies_without_reload() {
        let api = FakeApi::with(vec![books()]);
        api.reply(Err(ApiError::rejected(Some("Category in use".into()))));
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(remove(&api, &store, &notes, CategoryId::new("c1")));

        assert_eq!(api.calls(), vec![Call::Delete("c1".to_string())]);
        assert_eq!(notes.all(), vec![Notification::error("Category in use")]);
    }

    #[test]
    fn test_repeated_load_is_idempotent() {
        let api = FakeApi::with(vec![books(), Category::new("c2", "Toys")]);
        let store = TestStore::default();
        let notes = Recorder::default();

        block_on(load(&api, &store, &notes));
        let first = store.snapshot().categories;
        block_on(load(&api, &store, &notes));
        let second = store.snapshot().categories;

        assert_eq!(first, second);
        assert_eq!(api.list_calls(), 2);
    }

    #[test]
    fn test_disposed_store_stops_workflow() {
        let api = FakeApi::default();
        let store = TestStore::default();
        let notes = Recorder::default();
        store.disposed.set(true);

        block_on(remove(&api, &store, &notes, CategoryId::new("c1")));

        // The request was already in flight; its response is ignored.
        assert_eq!(api.calls(), vec![Call::Delete("c1".to_string())]);
        assert!(notes.all().is_empty());
    }
}

//! State record of the category manager screen and its transitions.
//!
//! Transitions are plain functions over `CategoryManagerState`; they never touch
//! the network. The controller asks for a request, performs it, then feeds the
//! result back through the matching `finish_*` transition.

use crate::shared::api_error::ApiError;
use crate::shared::notifications::Notification;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a001_category::api::CategoryNameDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOperation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl CategoryOperation {
    fn failure_text(self) -> &'static str {
        match self {
            CategoryOperation::Fetch => "Failed to fetch categories",
            CategoryOperation::Create => "Failed to create category",
            CategoryOperation::Update => "Failed to update category",
            CategoryOperation::Delete => "Failed to delete category",
        }
    }

    fn transport_text(self) -> &'static str {
        match self {
            CategoryOperation::Fetch => "Something went wrong while fetching categories",
            CategoryOperation::Create => "Something went wrong while creating category",
            CategoryOperation::Update => "Something went wrong while updating category",
            CategoryOperation::Delete => "Something went wrong while deleting category",
        }
    }

    /// User-facing text for a failed call.
    ///
    /// A rejection shows the server's message when there is one. Transport,
    /// status and decode failures all collapse into one generic text.
    pub fn error_message(self, err: &ApiError) -> String {
        if err.is_transport() {
            return self.transport_text().to_string();
        }
        err.server_message()
            .unwrap_or(self.failure_text())
            .to_string()
    }
}

/// Edit overlay state. The selection and the pending name only exist while open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open { selected: Category, name: String },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open { .. })
    }

    pub fn selected(&self) -> Option<&Category> {
        match self {
            EditorState::Open { selected, .. } => Some(selected),
            EditorState::Closed => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            EditorState::Open { name, .. } => Some(name),
            EditorState::Closed => None,
        }
    }
}

/// Sequence number of one reload request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed(Notification),
    /// A newer reload was issued after this one; the response is dropped.
    Stale,
}

/// Result of a finished create/update/delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub notification: Notification,
    pub reload: bool,
}

impl MutationOutcome {
    fn succeeded(message: String) -> Self {
        Self {
            notification: Notification::success(message),
            reload: true,
        }
    }

    fn failed(op: CategoryOperation, err: &ApiError) -> Self {
        Self {
            notification: Notification::error(op.error_message(err)),
            reload: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryManagerState {
    /// Last list fetched from the server, in server order
    pub categories: Vec<Category>,
    pub create_name: String,
    pub editor: EditorState,
    /// Sequence number of the most recently issued reload
    pub load_seq: u64,
    /// Set once the first reload completes, whether it succeeded or not
    pub load_finished: bool,
}

impl CategoryManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        LoadTicket(self.load_seq)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_seq
    }

    /// Apply a list response. On failure the cached list stays as it was.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Category>, ApiError>,
    ) -> LoadOutcome {
        if !self.is_latest(ticket) {
            return LoadOutcome::Stale;
        }
        self.load_finished = true;
        match result {
            Ok(categories) => {
                self.categories = categories;
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(Notification::error(
                CategoryOperation::Fetch.error_message(&err),
            )),
        }
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    pub fn set_create_name(&mut self, name: String) {
        self.create_name = name;
    }

    /// Body for a create request, or `None` when the name is empty.
    pub fn create_request(&self) -> Option<CategoryNameDto> {
        if self.create_name.is_empty() {
            None
        } else {
            Some(CategoryNameDto::new(self.create_name.clone()))
        }
    }

    pub fn finish_create(&mut self, name: &str, result: Result<(), ApiError>) -> MutationOutcome {
        match result {
            Ok(()) => {
                self.create_name.clear();
                MutationOutcome::succeeded(format!("{} created successfully", name))
            }
            Err(err) => MutationOutcome::failed(CategoryOperation::Create, &err),
        }
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    pub fn begin_edit(&mut self, category: &Category) {
        self.editor = EditorState::Open {
            selected: category.clone(),
            name: category.name.clone(),
        };
    }

    /// Ignored while the editor is closed
    pub fn set_edit_name(&mut self, value: String) {
        if let EditorState::Open { name, .. } = &mut self.editor {
            *name = value;
        }
    }

    /// Target and body for an update request; requires an open editor.
    pub fn update_request(&self) -> Option<(CategoryId, CategoryNameDto)> {
        match &self.editor {
            EditorState::Open { selected, name } => {
                Some((selected.id.clone(), CategoryNameDto::new(name.clone())))
            }
            EditorState::Closed => None,
        }
    }

    /// On failure the editor stays open with its pending name.
    ///
    /// On success the editor closes only if it still targets `id`; a late
    /// response must not close an editor reopened on another category.
    pub fn finish_update(
        &mut self,
        id: &CategoryId,
        name: &str,
        result: Result<(), ApiError>,
    ) -> MutationOutcome {
        match result {
            Ok(()) => {
                if self.editor.selected().map(|c| &c.id) == Some(id) {
                    self.close_editor();
                }
                MutationOutcome::succeeded(format!("{} updated successfully", name))
            }
            Err(err) => MutationOutcome::failed(CategoryOperation::Update, &err),
        }
    }

    /// Single exit from the editor, shared by cancel and successful submit.
    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> MutationOutcome {
        match result {
            Ok(()) => MutationOutcome::succeeded("Category deleted successfully".to_string()),
            Err(err) => MutationOutcome::failed(CategoryOperation::Delete, &err),
        }
    }
}

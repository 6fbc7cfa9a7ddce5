//! Category manager - ViewModel
//!
//! Owns the state record for one mounted screen and runs controller workflows
//! on the UI thread.

use super::controller;
use super::model::HttpCategoryApi;
use super::state::CategoryManagerState;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryManagerVm {
    pub state: RwSignal<CategoryManagerState>,
    notifications: NotificationService,
    api: HttpCategoryApi,
}

impl CategoryManagerVm {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            state: RwSignal::new(CategoryManagerState::new()),
            notifications,
            api: HttpCategoryApi,
        }
    }

    // Reads

    pub fn categories(&self) -> Signal<Vec<Category>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.categories.clone()))
    }

    pub fn create_name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.create_name.clone()))
    }

    pub fn edit_name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.editor.name().unwrap_or_default().to_string()))
    }

    pub fn is_editor_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.editor.is_open()))
    }

    pub fn is_load_finished(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.load_finished))
    }

    // Local transitions

    pub fn set_create_name(&self, value: String) {
        self.state.update(|s| s.set_create_name(value));
    }

    pub fn set_edit_name(&self, value: String) {
        self.state.update(|s| s.set_edit_name(value));
    }

    pub fn begin_edit(&self, category: Category) {
        self.state.update(|s| s.begin_edit(&category));
    }

    pub fn close_editor(&self) {
        self.state.update(|s| s.close_editor());
    }

    // Commands

    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            controller::load(&vm.api, &vm.state, &vm.notifications).await;
        });
    }

    pub fn create(&self) {
        let vm = *self;
        spawn_local(async move {
            controller::create(&vm.api, &vm.state, &vm.notifications).await;
        });
    }

    pub fn submit_edit(&self) {
        let vm = *self;
        spawn_local(async move {
            controller::submit_edit(&vm.api, &vm.state, &vm.notifications).await;
        });
    }

    pub fn remove(&self, id: CategoryId) {
        let vm = *self;
        spawn_local(async move {
            controller::remove(&vm.api, &vm.state, &vm.notifications, id).await;
        });
    }
}

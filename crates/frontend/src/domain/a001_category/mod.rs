//! Category management (MVVM)
//!
//! Structure:
//! - state.rs: state record with pure transitions
//! - controller.rs: API/store/notifier seams and async workflows
//! - model.rs: HTTP implementation of the category API
//! - view_model.rs: CategoryManagerVm bound to Leptos signals
//! - ui/: form, table, edit overlay and the page component

pub mod controller;
pub mod model;
pub mod state;
pub mod ui;
pub mod view_model;

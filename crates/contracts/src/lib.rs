//! Types the frontend exchanges with the category API.

pub mod domain;

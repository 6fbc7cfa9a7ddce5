//! Request and response bodies of the category API (`/api/v1/category`).
//!
//! Every response carries a `success` flag. A missing flag or `false` is a
//! rejection, even with a 2xx status.

use super::aggregate::Category;
use serde::{Deserialize, Serialize};

/// Base path of the category API
pub const CATEGORY_API_PATH: &str = "/api/v1/category";

pub const LIST_PATH: &str = "/get-category";
pub const CREATE_PATH: &str = "/create-category";
pub const UPDATE_PATH: &str = "/update-category";
pub const DELETE_PATH: &str = "/delete-category";

/// Body of create/update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNameDto {
    pub name: String,
}

impl CategoryNameDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response of `GET /get-category`
///
/// `category` may be absent or `null`; both read as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Option<Vec<Category>>,
}

impl CategoryListResponse {
    /// The category list, or the server message on rejection
    pub fn into_result(self) -> Result<Vec<Category>, Option<String>> {
        if self.success {
            Ok(self.category.unwrap_or_default())
        } else {
            Err(non_empty(self.message))
        }
    }
}

/// Response of create/update/delete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryMutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CategoryMutationResponse {
    pub fn into_result(self) -> Result<Option<String>, Option<String>> {
        if self.success {
            Ok(non_empty(self.message))
        } else {
            Err(non_empty(self.message))
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

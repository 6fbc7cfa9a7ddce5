//! Category API over HTTP (gloo-net)

use super::controller::CategoryApi;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_base, category_item_url, category_url};
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a001_category::api::{
    CategoryListResponse, CategoryMutationResponse, CategoryNameDto, CREATE_PATH, DELETE_PATH,
    LIST_PATH, UPDATE_PATH,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCategoryApi;

/// Check the HTTP status and decode the JSON envelope
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn mutation_result(resp: CategoryMutationResponse) -> Result<(), ApiError> {
    resp.into_result().map(|_| ()).map_err(ApiError::rejected)
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let response = Request::get(&category_url(&api_base(), LIST_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_envelope::<CategoryListResponse>(response)
            .await?
            .into_result()
            .map_err(ApiError::rejected)
    }

    async fn create(&self, body: &CategoryNameDto) -> Result<(), ApiError> {
        let response = Request::post(&category_url(&api_base(), CREATE_PATH))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        mutation_result(read_envelope(response).await?)
    }

    async fn update(&self, id: &CategoryId, body: &CategoryNameDto) -> Result<(), ApiError> {
        let url = category_item_url(&api_base(), UPDATE_PATH, id.value());
        let response = Request::put(&url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        mutation_result(read_envelope(response).await?)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
        let url = category_item_url(&api_base(), DELETE_PATH, id.value());
        let response = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        mutation_result(read_envelope(response).await?)
    }
}

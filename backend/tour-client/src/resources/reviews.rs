use crate::api_client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::query::QuerySpec;

use models::{DocumentResponse, ListResponse, Review, ReviewDraft, ReviewUpdate};

pub fn get_all_request(query: &QuerySpec) -> ApiRequest {
    ApiRequest::get("/reviews").with_query(query.clone())
}

pub fn get_by_id_request(id: &str) -> ApiRequest {
    ApiRequest::get(format!("/reviews/{id}"))
}

pub fn create_request(draft: &ReviewDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/reviews").with_json(draft)
}

pub fn update_request(id: &str, update: &ReviewUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch(format!("/reviews/{id}")).with_json(update)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/reviews/{id}"))
}

pub fn reviews_for_tour_request(tour_id: &str, query: &QuerySpec) -> ApiRequest {
    ApiRequest::get(format!("/tours/{tour_id}/reviews")).with_query(query.clone())
}

pub fn create_for_tour_request(tour_id: &str, draft: &ReviewDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("/tours/{tour_id}/reviews")).with_json(draft)
}

pub struct ReviewsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReviewsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &QuerySpec) -> Result<ListResponse<Review>, ApiError> {
        self.client.execute(get_all_request(query)).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Review, ApiError> {
        let response: DocumentResponse<Review> =
            self.client.execute(get_by_id_request(id)).await?;
        Ok(response.into_document())
    }

    pub async fn create(&self, draft: &ReviewDraft) -> Result<Review, ApiError> {
        let response: DocumentResponse<Review> =
            self.client.execute(create_request(draft)?).await?;
        Ok(response.into_document())
    }

    pub async fn update(&self, id: &str, update: &ReviewUpdate) -> Result<Review, ApiError> {
        let response: DocumentResponse<Review> =
            self.client.execute(update_request(id, update)?).await?;
        Ok(response.into_document())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.execute_empty(delete_request(id)).await
    }

    pub async fn get_reviews_for_tour(
        &self,
        tour_id: &str,
        query: &QuerySpec,
    ) -> Result<ListResponse<Review>, ApiError> {
        self.client
            .execute(reviews_for_tour_request(tour_id, query))
            .await
    }

    pub async fn create_review_for_tour(
        &self,
        tour_id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review, ApiError> {
        let response: DocumentResponse<Review> = self
            .client
            .execute(create_for_tour_request(tour_id, draft)?)
            .await?;
        Ok(response.into_document())
    }
}

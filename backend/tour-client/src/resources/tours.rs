use crate::api_client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::query::{QuerySpec, TourFilter};

use models::{
    DistanceUnit, DocumentResponse, ListResponse, MonthlyPlan, PlanResponse, StatsResponse, Tour,
    TourDistance, TourInput, TourStats,
};

pub fn get_all_request(query: &QuerySpec) -> ApiRequest {
    ApiRequest::get("/tours").with_query(query.clone())
}

pub fn get_by_id_request(id: &str) -> ApiRequest {
    ApiRequest::get(format!("/tours/{id}"))
}

pub fn create_request(tour: &TourInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/tours").with_json(tour)
}

pub fn update_request(id: &str, tour: &TourInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch(format!("/tours/{id}")).with_json(tour)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/tours/{id}"))
}

pub fn top_cheap_request() -> ApiRequest {
    ApiRequest::get("/tours/top-5-cheap")
}

pub fn tour_stats_request() -> ApiRequest {
    ApiRequest::get("/tours/tour-stats")
}

pub fn monthly_plan_request(year: i32) -> ApiRequest {
    ApiRequest::get(format!("/tours/monthly-plan/{year}"))
}

/// `latlng` is passed through as `"<lat>,<lng>"`.
pub fn tours_within_request(distance: f64, latlng: &str, unit: DistanceUnit) -> ApiRequest {
    ApiRequest::get(format!(
        "/tours/tours-within/{distance}/center/{latlng}/unit/{unit}"
    ))
}

pub fn distances_request(latlng: &str, unit: DistanceUnit) -> ApiRequest {
    ApiRequest::get(format!("/tours/distances/{latlng}/unit/{unit}"))
}

pub struct ToursApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ToursApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &QuerySpec) -> Result<ListResponse<Tour>, ApiError> {
        self.client.execute(get_all_request(query)).await
    }

    pub async fn get_filtered(&self, filter: &TourFilter) -> Result<ListResponse<Tour>, ApiError> {
        self.get_all(&filter.to_query()).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Tour, ApiError> {
        let response: DocumentResponse<Tour> = self.client.execute(get_by_id_request(id)).await?;
        Ok(response.into_document())
    }

    pub async fn create(&self, tour: &TourInput) -> Result<Tour, ApiError> {
        let response: DocumentResponse<Tour> = self.client.execute(create_request(tour)?).await?;
        Ok(response.into_document())
    }

    pub async fn update(&self, id: &str, tour: &TourInput) -> Result<Tour, ApiError> {
        let response: DocumentResponse<Tour> =
            self.client.execute(update_request(id, tour)?).await?;
        Ok(response.into_document())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.execute_empty(delete_request(id)).await
    }

    pub async fn get_top_cheap(&self) -> Result<ListResponse<Tour>, ApiError> {
        self.client.execute(top_cheap_request()).await
    }

    pub async fn get_tour_stats(&self) -> Result<Vec<TourStats>, ApiError> {
        let response: StatsResponse = self.client.execute(tour_stats_request()).await?;
        Ok(response.data.stats)
    }

    pub async fn get_monthly_plan(&self, year: i32) -> Result<Vec<MonthlyPlan>, ApiError> {
        let response: PlanResponse = self.client.execute(monthly_plan_request(year)).await?;
        Ok(response.data.plan)
    }

    pub async fn get_tours_within(
        &self,
        distance: f64,
        latlng: &str,
        unit: DistanceUnit,
    ) -> Result<ListResponse<Tour>, ApiError> {
        self.client
            .execute(tours_within_request(distance, latlng, unit))
            .await
    }

    pub async fn get_distances(
        &self,
        latlng: &str,
        unit: DistanceUnit,
    ) -> Result<Vec<TourDistance>, ApiError> {
        let response: DocumentResponse<Vec<TourDistance>> =
            self.client.execute(distances_request(latlng, unit)).await?;
        Ok(response.into_document())
    }
}

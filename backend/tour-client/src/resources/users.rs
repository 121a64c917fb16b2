use crate::api_client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::query::QuerySpec;

use models::{
    AuthResponse, DocumentResponse, ListResponse, NewUser, PasswordChange, Role, User,
    UserResponse, UserUpdate,
};

pub fn get_all_request(role: Option<Role>) -> ApiRequest {
    ApiRequest::get("/users").with_query(QuerySpec::new().with("role", role))
}

pub fn get_me_request() -> ApiRequest {
    ApiRequest::get("/users/me")
}

pub fn get_by_id_request(id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{id}"))
}

pub fn update_request(id: &str, update: &UserUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch(format!("/users/{id}")).with_json(update)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/users/{id}"))
}

pub fn update_me_request(update: &UserUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch("/users/updateMe").with_json(update)
}

pub fn delete_me_request() -> ApiRequest {
    ApiRequest::delete("/users/deleteMe")
}

pub fn update_my_password_request(change: &PasswordChange) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch("/users/updateMyPassword").with_json(change)
}

pub fn create_user_request(user: &NewUser) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/users").with_json(user)
}

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, role: Option<Role>) -> Result<ListResponse<User>, ApiError> {
        self.client.execute(get_all_request(role)).await
    }

    pub async fn get_me(&self) -> Result<User, ApiError> {
        let response: DocumentResponse<User> = self.client.execute(get_me_request()).await?;
        Ok(response.into_document())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User, ApiError> {
        let response: DocumentResponse<User> = self.client.execute(get_by_id_request(id)).await?;
        Ok(response.into_document())
    }

    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        let response: DocumentResponse<User> =
            self.client.execute(update_request(id, update)?).await?;
        Ok(response.into_document())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.execute_empty(delete_request(id)).await
    }

    /// Update the signed-in user's profile and refresh the cached session user.
    pub async fn update_me(&self, update: &UserUpdate) -> Result<User, ApiError> {
        let response: UserResponse = self.client.execute(update_me_request(update)?).await?;
        let user = response.data.user;
        self.client.refresh_session_user(&user)?;
        Ok(user)
    }

    pub async fn delete_me(&self) -> Result<(), ApiError> {
        self.client.execute_empty(delete_me_request()).await
    }

    /// Change the password. The backend issues a new token, which replaces the stored one.
    pub async fn update_my_password(
        &self,
        change: &PasswordChange,
    ) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .client
            .execute(update_my_password_request(change)?)
            .await?;
        self.client.establish_session(&response)?;
        Ok(response)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let response: DocumentResponse<User> =
            self.client.execute(create_user_request(user)?).await?;
        Ok(response.into_document())
    }
}

use crate::api_client::{ApiClient, ApiRequest};
use crate::error::ApiError;

use models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest,
    SignupRequest,
};

pub fn login_request(email: &str, password: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/users/login").with_json(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn signup_request(
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/users/signup").with_json(&SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        password_confirm: password_confirm.to_string(),
    })
}

pub fn verify_email_request(token: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/verifyEmail/{token}"))
}

pub fn forgot_password_request(email: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/users/forgotPassword").with_json(&ForgotPasswordRequest {
        email: email.to_string(),
    })
}

pub fn reset_password_request(
    token: &str,
    password: &str,
    password_confirm: &str,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::patch(format!("/users/resetPassword/{token}")).with_json(&ResetPasswordRequest {
        password: password.to_string(),
        password_confirm: password_confirm.to_string(),
    })
}

/// Login, signup and account recovery.
///
/// Responses that carry both a token and a user open a session in the store.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .client
            .execute(login_request(email, password)?)
            .await?;
        self.client.establish_session(&response)?;
        Ok(response)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = signup_request(name, email, password, password_confirm)?;
        let response: AuthResponse = self.client.execute(request).await?;
        self.client.establish_session(&response)?;
        Ok(response)
    }

    pub async fn verify_email(&self, token: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.client.execute(verify_email_request(token)).await?;
        self.client.establish_session(&response)?;
        Ok(response)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.client.execute(forgot_password_request(email)?).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = reset_password_request(token, password, password_confirm)?;
        let response: AuthResponse = self.client.execute(request).await?;
        self.client.establish_session(&response)?;
        Ok(response)
    }

    /// Forget the local session. Nothing is sent to the backend.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.client.end_session()
    }
}

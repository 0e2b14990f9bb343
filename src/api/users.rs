//! Account endpoints; these return bare DTOs rather than envelopes.

use reqwest::Method;
use serde_json::json;

use super::{types::*, ApiClient};
use crate::auth::ApiError;

impl ApiClient {
    /// Register a new account.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let body = serde_json::to_value(request)?;
        self.raw_send(Method::POST, "/users/signup", &[], Some(body))
            .await
    }

    /// Authenticate; the refresh token arrives as a cookie on the response.
    ///
    /// The returned access token is stored on the shared session so the
    /// remaining calls of this process are authenticated.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(request)?;
        let response: LoginResponse = self
            .raw_send(Method::POST, "/users/login", &[], Some(body))
            .await?;
        self.session().set_token(response.access_token.clone());
        Ok(response)
    }

    /// Invalidate the session server-side and drop local credentials.
    pub async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        let response: LogoutResponse = self
            .raw_send(Method::POST, "/users/logout", &[], Some(json!({})))
            .await?;
        self.session().clear_token();
        Ok(response)
    }

    /// Profile of the authenticated user.
    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.raw_send(Method::GET, "/users/userinfo", &[], None).await
    }

    /// Update profile fields; unset fields stay as they are.
    pub async fn update_user(
        &self,
        request: &UserUpdateRequest,
    ) -> Result<UserUpdateResponse, ApiError> {
        let body = serde_json::to_value(request)?;
        self.raw_send(Method::PUT, "/users/update", &[], Some(body))
            .await
    }

    /// Delete the authenticated account.
    pub async fn delete_user(&self) -> Result<UserDeleteResponse, ApiError> {
        self.raw_send(Method::DELETE, "/users/delete", &[], None).await
    }

    /// Recover a masked username by email.
    pub async fn find_id(&self, email: &str) -> Result<FindIdResponse, ApiError> {
        let body = json!({ "email": email });
        self.raw_send(Method::POST, "/users/find/id", &[], Some(body))
            .await
    }

    /// Send a password-reset mail.
    pub async fn send_reset_mail(
        &self,
        username: &str,
        email: &str,
    ) -> Result<SendMailResponse, ApiError> {
        let body = json!({ "username": username, "email": email });
        self.raw_send(Method::POST, "/users/find/sendMail", &[], Some(body))
            .await
    }

    /// Validate a password-reset token from the mail link.
    pub async fn check_reset_token(&self, token: &str) -> Result<CheckTokenResponse, ApiError> {
        let query = [("token", token.to_string())];
        self.raw_send(Method::GET, "/users/find/checkToken", &query, None)
            .await
    }

    /// Set a new password using a valid reset token.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<FindPasswordResponse, ApiError> {
        let body = json!({ "token": token, "newPassword": new_password });
        self.raw_send(Method::POST, "/users/find/password", &[], Some(body))
            .await
    }

    /// Re-verify the current password before sensitive operations.
    pub async fn check_password(&self, password: &str) -> Result<CheckPasswordResponse, ApiError> {
        let body = json!({ "password": password });
        self.raw_send(Method::POST, "/users/check/password", &[], Some(body))
            .await
    }
}

//! Payment, withdrawal, and point endpoints on the payment service.

use reqwest::Method;

use super::{types::*, ApiClient};
use crate::auth::ApiError;

impl ApiClient {
    /// Confirm a checkout after the hosted widget redirects back.
    pub async fn confirm_payment(
        &self,
        request: &PaymentConfirmRequest,
    ) -> Result<Payment, ApiError> {
        self.payment_send(Method::POST, "/payments/pay", request).await
    }

    /// One payment, owner-checked server-side.
    pub async fn payment_detail(&self, payment_id: i64) -> Result<Payment, ApiError> {
        self.payment_get(&format!("/payments/pay/{payment_id}")).await
    }

    /// The caller's payment history.
    pub async fn payment_history(&self) -> Result<Vec<Payment>, ApiError> {
        self.payment_get("/payments/pay/user").await
    }

    /// Request a cash withdrawal against the point balance.
    pub async fn request_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, ApiError> {
        self.payment_send(Method::POST, "/payments/withdrawal", request)
            .await
    }

    /// One withdrawal, owner-checked server-side.
    pub async fn withdrawal_detail(&self, withdrawal_id: i64) -> Result<Withdrawal, ApiError> {
        self.payment_get(&format!("/payments/withdrawal/{withdrawal_id}"))
            .await
    }

    /// The caller's withdrawal history.
    pub async fn withdrawal_history(&self) -> Result<Vec<Withdrawal>, ApiError> {
        self.payment_get("/payments/withdrawal/user").await
    }

    /// Point ledger of the caller.
    pub async fn point_history(&self) -> Result<Vec<PointHistory>, ApiError> {
        self.payment_get("/points/history").await
    }

    /// Current point balance.
    pub async fn point_balance(&self) -> Result<i64, ApiError> {
        self.payment_get("/points/balance").await
    }
}

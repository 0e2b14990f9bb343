//! Survey browsing, creation, and participation endpoints.

use reqwest::Method;

use super::{types::*, ApiClient};
use crate::auth::ApiError;

/// Home rail variants exposed by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HomeRail {
    /// Ten surveys closest to their deadline.
    Deadline,
    /// Ten surveys with the highest reward.
    Point,
    /// Ten surveys with the most responses.
    Responses,
    /// Picks matched to the caller's interests.
    Recommend,
}

impl HomeRail {
    fn path(&self) -> &'static str {
        match self {
            Self::Deadline => "/surveys/home/deadline",
            Self::Point => "/surveys/home/point",
            Self::Responses => "/surveys/home/responseCnt",
            Self::Recommend => "/surveys/recommend",
        }
    }
}

impl ApiClient {
    /// Search the survey board with filters and pagination.
    pub async fn search_surveys(&self, filter: &SurveySearch) -> Result<Page<SurveyItem>, ApiError> {
        self.api_get("/surveys", &filter.to_query()).await
    }

    /// One of the curated home rails.
    pub async fn home_rail(&self, rail: HomeRail) -> Result<SurveyHome, ApiError> {
        self.api_get(rail.path(), &[]).await
    }

    /// Survey detail without its questions.
    pub async fn survey_detail(&self, survey_id: i64) -> Result<SurveyDetail, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}"), &[]).await
    }

    /// Question list for participation.
    pub async fn survey_questions(&self, survey_id: i64) -> Result<Vec<Question>, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}/questions"), &[])
            .await
    }

    /// Whether the caller already participated in a survey.
    pub async fn has_participated(&self, survey_id: i64) -> Result<bool, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}/participate"), &[])
            .await
    }

    /// Surveys commissioned by the caller.
    pub async fn my_surveys(&self) -> Result<SurveyHome, ApiError> {
        self.api_get("/surveys/my", &[]).await
    }

    /// Surveys the caller participated in, paged.
    pub async fn participated_surveys(
        &self,
        page: i64,
        size: i64,
    ) -> Result<Page<SurveyItem>, ApiError> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.api_get("/surveys/participate", &query).await
    }

    /// Commission a new survey.
    pub async fn create_survey(&self, request: &CreateSurveyRequest) -> Result<Survey, ApiError> {
        self.api_send(Method::POST, "/surveys", request).await
    }

    /// Close a running survey early.
    pub async fn close_survey(&self, survey_id: i64) -> Result<(), ApiError> {
        self.api_send_empty::<()>(Method::PATCH, &format!("/surveys/{survey_id}"), None)
            .await
    }

    /// Submit answers for a survey.
    pub async fn participate(
        &self,
        survey_id: i64,
        request: &ParticipateRequest,
    ) -> Result<(), ApiError> {
        self.api_send_empty(
            Method::POST,
            &format!("/surveys/participate/{survey_id}"),
            Some(request),
        )
        .await
    }

    /// Refund breakdown previewed before closing a survey.
    pub async fn refund_preview(&self, survey_id: i64) -> Result<RefundPreview, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}/refund-preview"), &[])
            .await
    }

    /// All selectable interest categories.
    pub async fn interests(&self) -> Result<Vec<Interest>, ApiError> {
        self.api_get("/interests", &[]).await
    }

    /// The caller's top interest categories.
    pub async fn my_interests(&self) -> Result<serde_json::Value, ApiError> {
        // The server answers with either a list or a plain notice string.
        self.api_get("/interests/my", &[]).await
    }
}

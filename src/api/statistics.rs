//! Survey statistics endpoints.

use super::{types::*, ApiClient};
use crate::auth::ApiError;

impl ApiClient {
    /// Current participation snapshot for a survey.
    ///
    /// The same payload is pushed over the broker topic while a statistics
    /// view is open; this endpoint seeds the initial state.
    pub async fn participant_statistics(
        &self,
        survey_id: i64,
    ) -> Result<ParticipantStatistics, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}/statistics/participants"), &[])
            .await
    }

    /// Per-question answer statistics.
    pub async fn answer_statistics(&self, survey_id: i64) -> Result<AnswerStatistics, ApiError> {
        self.api_get(&format!("/surveys/{survey_id}/statistics/answers"), &[])
            .await
    }

    /// Demographics of the respondents who picked one choice.
    pub async fn choice_participants(
        &self,
        survey_id: i64,
        question_number: i64,
        choice_number: i64,
    ) -> Result<ParticipantStatistics, ApiError> {
        let path = format!(
            "/surveys/{survey_id}/questions/{question_number}/choices/{choice_number}/statistics"
        );
        self.api_get(&path, &[]).await
    }

    /// Subjective answers for one question, filtered and paged.
    pub async fn subjective_answers(
        &self,
        survey_id: i64,
        question_number: i64,
        filter: &SubjectiveFilter,
    ) -> Result<Page<String>, ApiError> {
        let path = format!("/surveys/{survey_id}/questions/{question_number}/statistics");
        self.api_get(&path, &filter.to_query()).await
    }
}

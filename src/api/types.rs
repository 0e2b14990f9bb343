//! DTOs mirroring the remote REST contract.
//!
//! Nullable fields stay `Option`: callers distinguish null from zero in
//! several places (e.g. `platformFee` on point logs), so nothing is
//! default-filled.

use serde::{Deserialize, Serialize};

// ===== shared enumerations =====

/// Survey lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyState {
    InProcess,
    Done,
    Canceled,
}

/// Question answer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    Subjective,
}

/// Board sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortType {
    Latest,
    Popular,
    DeadlineNear,
    RewardHigh,
}

impl SortType {
    /// Wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "LATEST",
            Self::Popular => "POPULAR",
            Self::DeadlineNear => "DEADLINE_NEAR",
            Self::RewardHigh => "REWARD_HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    Teen,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    SixtyPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkType {
    It,
    Office,
    Manufacturing,
    Service,
    Education,
    Medical,
    Creative,
    Student,
    SelfEmployed,
    Etc,
}

/// Direction of a point ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointType {
    Get,
    Use,
}

/// What a point ledger entry references.
///
/// Union of the values both services emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceType {
    Payment,
    Withdrawal,
    Survey,
    SurveyParticipate,
    SurveyCreate,
    Refund,
    Admin,
}

/// Payment/withdrawal processing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Confirmed,
    Completed,
    Failed,
}

// ===== pagination =====

/// Spring `Page` envelope.
///
/// The two services trim this shape differently, so the non-essential
/// fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: i64,
    pub total_elements: i64,
    pub first: bool,
    pub last: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageable: Option<PageCursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_elements: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub page_number: i64,
    pub page_size: i64,
}

// ===== surveys =====

/// Survey card as shown on the board and home rails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyItem {
    pub survey_id: i64,
    pub title: String,
    pub response_cnt: i64,
    pub max_response: i64,
    pub reward: i64,
    pub created_at: String,
    pub deadline: String,
    pub state: SurveyState,
}

/// Home rail payload: a plain list of survey cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyHome {
    pub survey_items: Vec<SurveyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub number: i64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: i64,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub choices: Vec<Choice>,
}

/// Payload for commissioning a new survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    pub title: String,
    pub description: String,
    pub max_response: i64,
    pub reward: i64,
    pub deadline: String,
    pub interest_id: i64,
    pub questions: Vec<Question>,
}

/// Survey as echoed back by the creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub title: String,
    pub description: String,
    pub max_response: i64,
    pub reward: i64,
    pub deadline: String,
    pub state: SurveyState,
    pub response_cnt: i64,
    pub questions: Vec<Question>,
}

/// Survey detail without its questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDetail {
    pub title: String,
    pub description: String,
    pub max_response: i64,
    pub reward: i64,
    pub deadline: String,
    pub state: SurveyState,
    pub response_cnt: i64,
    pub question_cnt: i64,
    pub interest: Interest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub interest_id: i64,
    pub content: String,
}

/// One answered question inside a participation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub number: i64,
    pub question_type: QuestionType,
    pub content: String,
    pub answer_choices: Vec<i64>,
}

/// Participation payload for one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipateRequest {
    pub answers: Vec<Answer>,
}

/// Board search filters; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct SurveySearch {
    pub title: Option<String>,
    pub interest_id: Option<i64>,
    pub sort_type: Option<SortType>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SurveySearch {
    /// Query pairs in the order the board screen sends them.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(title) = &self.title {
            query.push(("title", title.clone()));
        }
        if let Some(interest_id) = self.interest_id {
            query.push(("interestId", interest_id.to_string()));
        }
        if let Some(sort_type) = self.sort_type {
            query.push(("sortType", sort_type.as_str().to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        query
    }
}

/// Refund breakdown shown before closing a running survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPreview {
    pub survey_id: i64,
    pub total_paid: i64,
    pub platform_fee: i64,
    pub participant_count: i64,
    pub total_reward_paid: i64,
    pub refund_amount: i64,
}

// ===== statistics =====

/// One bar of a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionItem<T = String> {
    pub label: T,
    pub count: i64,
}

/// Live participation snapshot, replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStatistics {
    pub response_cnt: i64,
    pub max_response: i64,
    pub gender_distribution: Vec<DistributionItem<Gender>>,
    pub age_distribution: Vec<DistributionItem<AgeGroup>>,
    pub work_distribution: Vec<DistributionItem<WorkType>>,
}

/// Per-question answer statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerStatistics {
    pub question_statistics: Vec<QuestionStatistic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStatistic {
    pub number: i64,
    pub content: String,
    /// Present for choice questions, null for subjective ones.
    pub choice_statistics: Option<Vec<ChoiceStatistic>>,
    /// Present for subjective questions, null for choice ones.
    pub subject_statistics: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceStatistic {
    pub number: i64,
    pub content: String,
    pub count: i64,
}

/// Demographic filters for browsing subjective answers.
#[derive(Debug, Clone, Default)]
pub struct SubjectiveFilter {
    pub work_type: Option<String>,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SubjectiveFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(work_type) = &self.work_type {
            query.push(("workType", work_type.clone()));
        }
        if let Some(gender) = &self.gender {
            query.push(("gender", gender.clone()));
        }
        if let Some(age_group) = &self.age_group {
            query.push(("ageGroup", age_group.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        query
    }
}

// ===== users =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i64,
    pub gender: Gender,
    pub point: i64,
    pub work_type: WorkType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: Gender,
    pub work_type: WorkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: Gender,
    pub account: Option<String>,
    pub point: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub work_type: WorkType,
}

/// Profile update; unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateResponse {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: Gender,
    pub account: Option<String>,
    pub point: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDeleteResponse {
    pub id: i64,
    pub username: String,
    pub is_deleted: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIdResponse {
    pub masked_username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailResponse {
    pub true_or_false: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTokenResponse {
    pub valid: bool,
    pub user_id: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindPasswordResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPasswordResponse {
    pub true_or_false: bool,
    pub message: String,
}

// ===== payments, withdrawals, points =====

/// Checkout redirect contract: the hosted widget hands these back on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmRequest {
    pub order_id: String,
    pub order_name: String,
    pub amount: i64,
    pub payment_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i64,
    pub user_id: i64,
    pub order_id: String,
    pub order_name: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_key: Option<String>,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub amount: i64,
    pub bank_code: String,
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub withdrawal_id: i64,
    pub amount: i64,
    pub bank_code: String,
    /// Masked server-side, e.g. `1234****90`.
    pub masked_account: String,
    pub status: TransactionStatus,
    pub requested_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistory {
    pub point_record_id: i64,
    pub user_id: i64,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: PointType,
    pub content: String,
    pub remain_point: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<i64>,
    pub created_at: String,
}

// ===== admin statistics =====

/// One day of platform-wide aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatistics {
    pub stat_date: String,
    pub total_users: i64,
    pub new_users: i64,
    pub active_users: i64,
    pub total_surveys: i64,
    pub active_surveys: i64,
    pub total_responses: i64,
    pub daily_responses: i64,
    pub total_points_issued: i64,
    pub daily_points_issued: i64,
    pub total_points_used: i64,
    pub daily_points_used: i64,
    pub current_circulating_points: i64,
    pub total_withdrawal_amount: i64,
    pub daily_withdrawal_amount: i64,
    pub daily_withdrawal_count: i64,
    pub pending_withdrawal_count: i64,
    pub failed_withdrawal_count: i64,
    pub total_revenue: i64,
    pub daily_revenue: i64,
    pub total_payment_count: i64,
    pub daily_payment_count: i64,
}

/// Point ledger entry as seen by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLog {
    pub id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub email: String,
    pub point_type: PointType,
    pub reference_type: ReferenceType,
    pub reference_id: Option<i64>,
    pub amount: i64,
    pub remain_point: i64,
    pub platform_fee: Option<i64>,
    pub created_at: String,
}

/// Aggregated time series for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointGraph {
    pub interval: String,
    pub labels: Vec<String>,
    pub new_users_series: Vec<i64>,
    pub active_users_series: Vec<i64>,
    pub points_issued_series: Vec<i64>,
    pub points_used_series: Vec<i64>,
    pub revenue_series: Vec<i64>,
}

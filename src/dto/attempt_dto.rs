use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trim_optional_string;
use crate::models::answer::Answer;
use crate::models::test::TestType;
use crate::models::test_completed::AttemptStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    pub session_id: Uuid,
    pub student_id: Uuid,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub writing_response: Option<String>,
    pub metadata: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GradeWritingRequest {
    #[validate(length(min = 1, message = "Level cannot be empty"))]
    pub level: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub feedback: Option<String>,
    pub graded_by: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub id: Uuid,
    pub test_title: String,
    pub test_type: TestType,
    pub student_name: String,
    pub status: AttemptStatus,
    pub completed_at: DateTime<Utc>,
    pub score: i32,
    pub level: String,
}

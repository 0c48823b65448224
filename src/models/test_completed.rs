use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::answer::Answer;
use crate::models::exam_session::ExamSession;
use crate::models::student::Student;
use crate::models::test::Test;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCompleted {
    pub id: Uuid,
    pub test: Test,
    pub exam_session: ExamSession,
    pub student: Student,
    pub answers: Vec<Answer>,
    pub writing_response: Option<String>,
    pub completed_at: DateTime<Utc>,
    pub status: AttemptStatus,
    pub assigned_level: Option<String>,
    pub feedback: Option<String>,
    pub graded_by: Option<Uuid>,
    pub graded_at: Option<DateTime<Utc>>,
    pub metadata: Option<JsonValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Completed,
    NeedsReview,
    Graded,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleSessionPayload {
    pub test_id: Uuid,
    #[validate(length(min = 1, message = "An exam session needs at least one student"))]
    pub student_ids: Vec<Uuid>,
    pub date: DateTime<Utc>,
}

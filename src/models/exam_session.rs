use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::student::Student;
use crate::models::test::Test;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSession {
    pub id: Uuid,
    pub test: Test,
    pub students: Vec<Student>,
    pub date: DateTime<Utc>,
}

impl ExamSession {
    pub fn is_enrolled(&self, student_id: Uuid) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }
}

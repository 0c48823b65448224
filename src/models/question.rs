use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl Question {
    // First option flagged correct; none flagged means the question can
    // never award points.
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }
}

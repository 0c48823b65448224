use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::trim_optional_string;
use crate::models::test::TestType;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOption {
    #[validate(length(min = 1, message = "Option text cannot be empty"))]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "Question text cannot be empty"))]
    pub text: String,
    #[validate(nested)]
    pub options: Vec<CreateOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTestPayload {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub test_type: TestType,
    pub questions: Option<Vec<CreateQuestion>>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub writing_prompt: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub audio_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTestPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub description: Option<String>,

    pub test_type: Option<TestType>,

    pub questions: Option<Vec<CreateQuestion>>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub writing_prompt: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub audio_file: Option<String>,
}

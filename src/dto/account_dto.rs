use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::trim_optional_string;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 5, max = 20, message = "Official ID must be 5-20 characters"))]
    pub official_id: String,
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStudentPayload {
    #[validate(nested)]
    pub user: CreateUserPayload,
    #[validate(length(min = 7, max = 15, message = "Phone number must be 7-15 digits"))]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub faculty: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudentPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 7, max = 15, message = "Phone number must be 7-15 digits"))]
    pub phone_number: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub faculty: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub group: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeacherPayload {
    #[validate(nested)]
    pub user: CreateUserPayload,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminPayload {
    #[validate(nested)]
    pub user: CreateUserPayload,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub user: User,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub faculty: Option<String>,
    pub group: Option<String>,
    pub collocation_level: Option<String>,
    pub comprehension_level: Option<String>,
    pub writing_level: Option<String>,
    pub listening_level: Option<String>,
    pub speaking_level: Option<String>,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: Uuid,
    pub selected_option_id: Uuid,
}

pub mod admin;
pub mod answer;
pub mod exam_session;
pub mod level;
pub mod question;
pub mod student;
pub mod teacher;
pub mod test_completed;
pub mod user;

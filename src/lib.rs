pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use std::sync::Arc;

use crate::models::admin::Admin;
use crate::models::exam_session::ExamSession;
use crate::models::student::Student;
use crate::models::teacher::Teacher;
use crate::models::test::Test;
use crate::models::test_completed::TestCompleted;
use crate::repository::{InMemoryRepository, Repository};
use crate::services::{
    account_service::AccountService, attempt_service::AttemptService,
    session_service::SessionService, test_service::TestService,
};

#[derive(Clone)]
pub struct AppState {
    pub test_service: TestService,
    pub session_service: SessionService,
    pub attempt_service: AttemptService,
    pub account_service: AccountService,
}

impl AppState {
    pub fn new() -> Self {
        let tests: Arc<dyn Repository<Test>> = Arc::new(InMemoryRepository::new());
        let sessions: Arc<dyn Repository<ExamSession>> = Arc::new(InMemoryRepository::new());
        let attempts: Arc<dyn Repository<TestCompleted>> = Arc::new(InMemoryRepository::new());
        let students: Arc<dyn Repository<Student>> = Arc::new(InMemoryRepository::new());
        let teachers: Arc<dyn Repository<Teacher>> = Arc::new(InMemoryRepository::new());
        let admins: Arc<dyn Repository<Admin>> = Arc::new(InMemoryRepository::new());

        let test_service = TestService::new(tests.clone());
        let session_service = SessionService::new(sessions.clone(), tests, students.clone());
        let attempt_service = AttemptService::new(attempts, sessions, students.clone());
        let account_service = AccountService::new(students, teachers, admins);

        Self {
            test_service,
            session_service,
            attempt_service,
            account_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

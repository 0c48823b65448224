use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::config::get_config;
use crate::dto::session_dto::ScheduleSessionPayload;
use crate::error::{Error, Result};
use crate::models::exam_session::ExamSession;
use crate::models::student::Student;
use crate::models::test::Test;
use crate::repository::Repository;

#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn Repository<ExamSession>>,
    tests: Arc<dyn Repository<Test>>,
    students: Arc<dyn Repository<Student>>,
}

impl SessionService {
    pub fn new(
        sessions: Arc<dyn Repository<ExamSession>>,
        tests: Arc<dyn Repository<Test>>,
        students: Arc<dyn Repository<Student>>,
    ) -> Self {
        Self {
            sessions,
            tests,
            students,
        }
    }

    pub fn schedule_session(&self, payload: ScheduleSessionPayload) -> Result<ExamSession> {
        payload.validate()?;

        if payload.date <= Utc::now() {
            return Err(Error::BadRequest(
                "Exam session date must be in the future".to_string(),
            ));
        }

        let test = self
            .tests
            .get(payload.test_id)
            .ok_or_else(|| Error::NotFound(format!("Test {} not found", payload.test_id)))?;

        // Duplicate ids in the payload collapse; the roster is a set.
        let mut roster: Vec<Student> = Vec::new();
        for student_id in payload.student_ids {
            if roster.iter().any(|s| s.id == student_id) {
                continue;
            }
            let student = self
                .students
                .get(student_id)
                .ok_or_else(|| Error::NotFound(format!("Student {} not found", student_id)))?;
            roster.push(student);
        }

        let capacity = get_config().max_students_per_session;
        if roster.len() > capacity {
            return Err(Error::BadRequest(format!(
                "Exam sessions are limited to {} students",
                capacity
            )));
        }

        let session = ExamSession {
            id: Uuid::new_v4(),
            test,
            students: roster,
            date: payload.date,
        };

        info!(
            session_id = %session.id,
            test_id = %session.test.id,
            students = session.students.len(),
            "exam session scheduled"
        );
        Ok(self.sessions.upsert(session))
    }

    pub fn get_session_by_id(&self, session_id: Uuid) -> Result<ExamSession> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| Error::NotFound(format!("Exam session {} not found", session_id)))
    }

    pub fn list_sessions(&self) -> Vec<ExamSession> {
        let mut sessions = self.sessions.list();
        sessions.sort_by_key(|s| s.date);
        sessions
    }

    pub fn upcoming_sessions_for_student(&self, student_id: Uuid) -> Vec<ExamSession> {
        let now = Utc::now();
        let mut sessions: Vec<ExamSession> = self
            .sessions
            .list()
            .into_iter()
            .filter(|s| s.date >= now && s.is_enrolled(student_id))
            .collect();
        sessions.sort_by_key(|s| s.date);
        sessions
    }

    pub fn reschedule_session(
        &self,
        session_id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<ExamSession> {
        if date <= Utc::now() {
            return Err(Error::BadRequest(
                "Exam session date must be in the future".to_string(),
            ));
        }
        let mut session = self.get_session_by_id(session_id)?;
        session.date = date;
        Ok(self.sessions.upsert(session))
    }

    pub fn enroll_student(&self, session_id: Uuid, student_id: Uuid) -> Result<ExamSession> {
        let mut session = self.get_session_by_id(session_id)?;
        if session.is_enrolled(student_id) {
            return Err(Error::BadRequest(
                "Student is already enrolled in this exam session".to_string(),
            ));
        }
        let capacity = get_config().max_students_per_session;
        if session.students.len() >= capacity {
            return Err(Error::BadRequest(format!(
                "Exam sessions are limited to {} students",
                capacity
            )));
        }
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| Error::NotFound(format!("Student {} not found", student_id)))?;
        session.students.push(student);
        Ok(self.sessions.upsert(session))
    }

    pub fn withdraw_student(&self, session_id: Uuid, student_id: Uuid) -> Result<ExamSession> {
        let mut session = self.get_session_by_id(session_id)?;
        if !session.is_enrolled(student_id) {
            return Err(Error::BadRequest(
                "Student is not enrolled in this exam session".to_string(),
            ));
        }
        session.students.retain(|s| s.id != student_id);
        Ok(self.sessions.upsert(session))
    }

    pub fn delete_session(&self, session_id: Uuid) -> Result<bool> {
        let deleted = self.sessions.delete(session_id);
        if deleted {
            info!(session_id = %session_id, "exam session deleted");
        }
        Ok(deleted)
    }
}

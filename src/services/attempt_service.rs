use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::get_config;
use crate::dto::attempt_dto::{AttemptSummary, GradeWritingRequest, SubmitAttemptRequest};
use crate::error::{Error, Result};
use crate::models::exam_session::ExamSession;
use crate::models::level::is_assignable_level;
use crate::models::student::Student;
use crate::models::test::TestType;
use crate::models::test_completed::{AttemptStatus, TestCompleted};
use crate::repository::Repository;
use crate::services::grading_service::{GradingService, ScoreResult};

#[derive(Clone)]
pub struct AttemptService {
    attempts: Arc<dyn Repository<TestCompleted>>,
    sessions: Arc<dyn Repository<ExamSession>>,
    students: Arc<dyn Repository<Student>>,
}

impl AttemptService {
    pub fn new(
        attempts: Arc<dyn Repository<TestCompleted>>,
        sessions: Arc<dyn Repository<ExamSession>>,
        students: Arc<dyn Repository<Student>>,
    ) -> Self {
        Self {
            attempts,
            sessions,
            students,
        }
    }

    pub fn submit_attempt(
        &self,
        req: SubmitAttemptRequest,
    ) -> Result<(TestCompleted, ScoreResult)> {
        req.validate()?;

        let session = self
            .sessions
            .get(req.session_id)
            .ok_or_else(|| Error::NotFound(format!("Exam session {} not found", req.session_id)))?;
        let student = self
            .students
            .get(req.student_id)
            .ok_or_else(|| Error::NotFound(format!("Student {} not found", req.student_id)))?;

        if !session.is_enrolled(student.id) {
            return Err(Error::BadRequest(
                "Student is not enrolled in this exam session".to_string(),
            ));
        }
        if self
            .attempts
            .list()
            .iter()
            .any(|a| a.exam_session.id == session.id && a.student.id == student.id)
        {
            return Err(Error::BadRequest(
                "Student has already submitted this exam session".to_string(),
            ));
        }

        let test = session.test.clone();
        let status = if test.test_type == TestType::Writing {
            let response = req.writing_response.as_deref().unwrap_or("");
            if response.is_empty() {
                return Err(Error::BadRequest(
                    "Writing tests require a written response".to_string(),
                ));
            }
            let max_chars = get_config().max_writing_response_chars;
            if response.chars().count() > max_chars {
                return Err(Error::BadRequest(format!(
                    "Writing responses are limited to {} characters",
                    max_chars
                )));
            }
            AttemptStatus::NeedsReview
        } else {
            let mut seen = HashSet::new();
            for answer in &req.answers {
                if !seen.insert(answer.question_id) {
                    return Err(Error::BadRequest(
                        "Multiple answers submitted for the same question".to_string(),
                    ));
                }
            }
            AttemptStatus::Completed
        };

        let attempt = TestCompleted {
            id: Uuid::new_v4(),
            test,
            exam_session: session,
            student: student.clone(),
            answers: req.answers,
            writing_response: req.writing_response,
            completed_at: Utc::now(),
            status,
            assigned_level: None,
            feedback: None,
            graded_by: None,
            graded_at: None,
            metadata: req.metadata,
        };

        let result = GradingService::grade_attempt(&attempt);
        if attempt.test.test_type.is_objective() && attempt.test.questions.is_empty() {
            warn!(attempt_id = %attempt.id, test_id = %attempt.test.id, "attempt against a test with no questions");
        }

        // Objective results land on the student's matching skill slot right
        // away; writing levels arrive through manual grading.
        if !attempt.test.questions.is_empty() {
            let mut student = student;
            match attempt.test.test_type {
                TestType::Comprehension => student.comprehension_level = Some(result.level.clone()),
                TestType::Listening => student.listening_level = Some(result.level.clone()),
                TestType::Writing => {}
            }
            self.students.upsert(student);
        }

        info!(
            attempt_id = %attempt.id,
            score = result.score,
            level = %result.level,
            "attempt submitted"
        );
        Ok((self.attempts.upsert(attempt), result))
    }

    // Recomputable at any time from the stored attempt; no state changes.
    pub fn score_attempt(&self, attempt_id: Uuid) -> Result<ScoreResult> {
        let attempt = self.get_attempt_by_id(attempt_id)?;
        Ok(GradingService::grade_attempt(&attempt))
    }

    pub fn get_attempt_by_id(&self, attempt_id: Uuid) -> Result<TestCompleted> {
        self.attempts
            .get(attempt_id)
            .ok_or_else(|| Error::NotFound(format!("Attempt {} not found", attempt_id)))
    }

    pub fn list_attempts_for_session(&self, session_id: Uuid) -> Vec<TestCompleted> {
        let mut attempts: Vec<TestCompleted> = self
            .attempts
            .list()
            .into_iter()
            .filter(|a| a.exam_session.id == session_id)
            .collect();
        attempts.sort_by_key(|a| a.completed_at);
        attempts
    }

    pub fn list_pending_review(&self) -> Vec<TestCompleted> {
        let mut attempts: Vec<TestCompleted> = self
            .attempts
            .list()
            .into_iter()
            .filter(|a| a.status == AttemptStatus::NeedsReview)
            .collect();
        attempts.sort_by_key(|a| a.completed_at);
        attempts
    }

    pub fn grade_writing_attempt(
        &self,
        attempt_id: Uuid,
        req: GradeWritingRequest,
    ) -> Result<TestCompleted> {
        req.validate()?;

        let mut attempt = self.get_attempt_by_id(attempt_id)?;
        if attempt.test.test_type != TestType::Writing {
            return Err(Error::BadRequest(
                "Only writing attempts are graded manually".to_string(),
            ));
        }
        if attempt.status == AttemptStatus::Graded {
            return Err(Error::BadRequest(
                "Attempt has already been graded".to_string(),
            ));
        }
        if !is_assignable_level(&req.level) {
            return Err(Error::BadRequest(format!(
                "Unknown proficiency level '{}'",
                req.level
            )));
        }

        attempt.assigned_level = Some(req.level.clone());
        attempt.feedback = req.feedback;
        attempt.graded_by = Some(req.graded_by);
        attempt.graded_at = Some(Utc::now());
        attempt.status = AttemptStatus::Graded;

        if let Some(mut student) = self.students.get(attempt.student.id) {
            student.writing_level = Some(req.level.clone());
            self.students.upsert(student);
        }

        info!(
            attempt_id = %attempt.id,
            level = %req.level,
            graded_by = %req.graded_by,
            "writing attempt graded"
        );
        Ok(self.attempts.upsert(attempt))
    }

    pub fn summarize(&self, attempt: &TestCompleted) -> AttemptSummary {
        let result = GradingService::grade_attempt(attempt);
        // A teacher-assigned level supersedes the pending sentinel.
        let level = attempt
            .assigned_level
            .clone()
            .unwrap_or_else(|| result.level.clone());
        AttemptSummary {
            id: attempt.id,
            test_title: attempt.test.title.clone(),
            test_type: attempt.test.test_type,
            student_name: attempt.student.user.full_name(),
            status: attempt.status,
            completed_at: attempt.completed_at,
            score: result.score,
            level,
        }
    }
}

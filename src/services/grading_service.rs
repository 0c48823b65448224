use serde::Serialize;

use crate::models::level::{determine_language_level, FULL_SCALE_POINTS};
use crate::models::test::TestType;
use crate::models::test_completed::TestCompleted;

pub const PENDING_EVALUATION: &str = "Pending teacher evaluation";
pub const NO_QUESTIONS: &str = "No questions";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: i32,
    pub level: String,
    pub correct_answers: usize,
    pub total_questions: usize,
}

pub struct GradingService;

impl GradingService {
    pub fn grade_attempt(attempt: &TestCompleted) -> ScoreResult {
        if attempt.test.test_type == TestType::Writing {
            return ScoreResult {
                score: 0,
                level: PENDING_EVALUATION.to_string(),
                correct_answers: 0,
                total_questions: 0,
            };
        }

        let total_questions = attempt.test.questions.len();
        if total_questions == 0 {
            return ScoreResult {
                score: 0,
                level: NO_QUESTIONS.to_string(),
                correct_answers: 0,
                total_questions: 0,
            };
        }

        let points_per_question = FULL_SCALE_POINTS / total_questions as f64;
        let mut total_score = 0.0;
        let mut correct_answers = 0;

        // Walk the test's question list, not the answer list, so unanswered
        // questions count as wrong.
        for question in &attempt.test.questions {
            let student_answer = attempt
                .answers
                .iter()
                .find(|a| a.question_id == question.id);

            if let (Some(answer), Some(correct)) = (student_answer, question.correct_option()) {
                if answer.selected_option_id == correct.id {
                    total_score += points_per_question;
                    correct_answers += 1;
                }
            }
        }

        // Rounding applies once to the reported score; the level reads the
        // unrounded running total.
        ScoreResult {
            score: total_score.round() as i32,
            level: determine_language_level(total_score).to_string(),
            correct_answers,
            total_questions,
        }
    }
}

use chrono::Utc;
use uuid::Uuid;

use certification_core::models::answer::Answer;
use certification_core::models::exam_session::ExamSession;
use certification_core::models::question::{Question, QuestionOption};
use certification_core::models::student::Student;
use certification_core::models::test::{Test, TestType};
use certification_core::models::test_completed::{AttemptStatus, TestCompleted};
use certification_core::models::user::{Role, User};
use certification_core::services::grading_service::{
    GradingService, ScoreResult, NO_QUESTIONS, PENDING_EVALUATION,
};

fn sample_student(email: &str) -> Student {
    let now = Utc::now();
    Student {
        id: Uuid::new_v4(),
        user: User {
            id: Uuid::new_v4(),
            official_id: "900123".to_string(),
            first_name: "Maya".to_string(),
            last_name: "Quispe".to_string(),
            email: email.to_string(),
            role: Role::Student,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        phone_number: None,
        address: None,
        faculty: None,
        group: None,
        collocation_level: None,
        comprehension_level: None,
        writing_level: None,
        listening_level: None,
        speaking_level: None,
    }
}

fn objective_test(test_type: TestType, total_questions: usize) -> Test {
    let now = Utc::now();
    Test {
        id: Uuid::new_v4(),
        title: "Certification mock".to_string(),
        description: Some("Auto-graded section".to_string()),
        test_type,
        questions: (0..total_questions)
            .map(|i| Question {
                id: Uuid::new_v4(),
                text: format!("Question {}", i + 1),
                options: (0..4)
                    .map(|j| QuestionOption {
                        id: Uuid::new_v4(),
                        text: format!("Option {}", j + 1),
                        is_correct: j == 0,
                    })
                    .collect(),
            })
            .collect(),
        writing_prompt: None,
        audio_file: (test_type == TestType::Listening).then(|| "audio/mock.mp3".to_string()),
        created_by: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
    }
}

fn writing_test() -> Test {
    let now = Utc::now();
    Test {
        id: Uuid::new_v4(),
        title: "Opinion essay".to_string(),
        description: None,
        test_type: TestType::Writing,
        questions: vec![],
        writing_prompt: Some("Does technology improve education?".to_string()),
        audio_file: None,
        created_by: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
    }
}

fn attempt(test: Test, answers: Vec<Answer>, writing_response: Option<String>) -> TestCompleted {
    let student = sample_student("maya@example.com");
    let session = ExamSession {
        id: Uuid::new_v4(),
        test: test.clone(),
        students: vec![student.clone()],
        date: Utc::now(),
    };
    let status = if test.test_type == TestType::Writing {
        AttemptStatus::NeedsReview
    } else {
        AttemptStatus::Completed
    };
    TestCompleted {
        id: Uuid::new_v4(),
        test,
        exam_session: session,
        student,
        answers,
        writing_response,
        completed_at: Utc::now(),
        status,
        assigned_level: None,
        feedback: None,
        graded_by: None,
        graded_at: None,
        metadata: None,
    }
}

fn answer_correct(test: &Test, index: usize) -> Answer {
    let question = &test.questions[index];
    Answer {
        question_id: question.id,
        selected_option_id: question.correct_option().unwrap().id,
    }
}

fn answer_wrong(test: &Test, index: usize) -> Answer {
    let question = &test.questions[index];
    let wrong = question.options.iter().find(|o| !o.is_correct).unwrap();
    Answer {
        question_id: question.id,
        selected_option_id: wrong.id,
    }
}

#[test]
fn full_credit_round_trip() {
    let test = objective_test(TestType::Comprehension, 10);
    let answers = (0..10).map(|i| answer_correct(&test, i)).collect();
    let result = GradingService::grade_attempt(&attempt(test, answers, None));

    assert_eq!(result.score, 140);
    assert_eq!(result.level, "C2");
    assert_eq!(result.correct_answers, 10);
    assert_eq!(result.total_questions, 10);
}

#[test]
fn zero_credit_when_all_wrong_or_missing() {
    let test = objective_test(TestType::Comprehension, 5);
    let answers = vec![answer_wrong(&test, 0), answer_wrong(&test, 1)];
    let result = GradingService::grade_attempt(&attempt(test, answers, None));

    assert_eq!(result.score, 0);
    assert_eq!(result.level, "Below A1");
    assert_eq!(result.correct_answers, 0);
    assert_eq!(result.total_questions, 5);
}

#[test]
fn threshold_boundary_five_question_test() {
    // 28 points per question: 4/5 stays below the B2 line, 5/5 is exact C2.
    let test = objective_test(TestType::Comprehension, 5);
    let four_right = vec![
        answer_correct(&test, 0),
        answer_correct(&test, 1),
        answer_correct(&test, 2),
        answer_correct(&test, 3),
        answer_wrong(&test, 4),
    ];
    let result = GradingService::grade_attempt(&attempt(test.clone(), four_right, None));
    assert_eq!(result.score, 112);
    assert_eq!(result.level, "B1");

    let five_right = (0..5).map(|i| answer_correct(&test, i)).collect();
    let result = GradingService::grade_attempt(&attempt(test, five_right, None));
    assert_eq!(result.score, 140);
    assert_eq!(result.level, "C2");
}

#[test]
fn partial_credit_seven_question_test() {
    let test = objective_test(TestType::Listening, 7);
    let answers = vec![
        answer_correct(&test, 0),
        answer_correct(&test, 3),
        answer_correct(&test, 6),
    ];
    let result = GradingService::grade_attempt(&attempt(test, answers, None));

    assert_eq!(result.score, 60);
    assert_eq!(result.level, "A1");
    assert_eq!(result.correct_answers, 3);
}

#[test]
fn answers_to_unknown_questions_are_ignored() {
    let test = objective_test(TestType::Comprehension, 5);
    let mut answers = vec![answer_correct(&test, 0)];
    answers.push(Answer {
        question_id: Uuid::new_v4(),
        selected_option_id: Uuid::new_v4(),
    });
    let result = GradingService::grade_attempt(&attempt(test, answers, None));

    assert_eq!(result.correct_answers, 1);
    assert_eq!(result.score, 28);
    assert_eq!(result.total_questions, 5);
}

#[test]
fn writing_sentinel_regardless_of_response() {
    for response in [None, Some("A long essay about vacations.".to_string())] {
        let result = GradingService::grade_attempt(&attempt(writing_test(), vec![], response));
        assert_eq!(
            result,
            ScoreResult {
                score: 0,
                level: PENDING_EVALUATION.to_string(),
                correct_answers: 0,
                total_questions: 0,
            }
        );
    }
}

#[test]
fn zero_question_edge_case_does_not_divide() {
    let test = objective_test(TestType::Comprehension, 0);
    let result = GradingService::grade_attempt(&attempt(test, vec![], None));

    assert_eq!(result.score, 0);
    assert_eq!(result.level, NO_QUESTIONS);
    assert_eq!(result.correct_answers, 0);
    assert_eq!(result.total_questions, 0);
}

#[test]
fn grading_same_attempt_twice_is_identical() {
    let test = objective_test(TestType::Comprehension, 7);
    let answers = (0..4).map(|i| answer_correct(&test, i)).collect();
    let attempt = attempt(test, answers, None);

    assert_eq!(
        GradingService::grade_attempt(&attempt),
        GradingService::grade_attempt(&attempt)
    );
}

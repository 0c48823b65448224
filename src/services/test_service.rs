use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::config::get_config;
use crate::dto::test_dto::{CreateQuestion, CreateTestPayload, UpdateTestPayload};
use crate::error::{Error, Result};
use crate::models::question::{Question, QuestionOption};
use crate::models::test::{Test, TestType};
use crate::repository::Repository;

#[derive(Debug, serde::Serialize)]
pub struct PaginatedTests {
    #[serde(rename = "items")]
    pub tests: Vec<Test>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Default)]
pub struct TestFilter {
    pub test_type: Option<TestType>,
    pub created_by: Option<Uuid>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct TestService {
    tests: Arc<dyn Repository<Test>>,
}

impl TestService {
    pub fn new(tests: Arc<dyn Repository<Test>>) -> Self {
        Self { tests }
    }

    pub fn create_test(&self, payload: CreateTestPayload, created_by: Uuid) -> Result<Test> {
        payload.validate()?;

        let question_payloads = payload.questions.unwrap_or_default();
        for question in &question_payloads {
            question.validate()?;
        }
        let questions = materialize_questions(question_payloads);
        check_test_shape(
            payload.test_type,
            &questions,
            payload.writing_prompt.as_deref(),
            payload.audio_file.as_deref(),
        )?;

        let now = Utc::now();
        let test = Test {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            test_type: payload.test_type,
            questions,
            writing_prompt: payload.writing_prompt,
            audio_file: payload.audio_file,
            created_by,
            created_at: now,
            updated_at: now,
        };

        info!(test_id = %test.id, test_type = ?test.test_type, "test created");
        Ok(self.tests.upsert(test))
    }

    pub fn get_test_by_id(&self, test_id: Uuid) -> Result<Test> {
        self.tests
            .get(test_id)
            .ok_or_else(|| Error::NotFound(format!("Test {} not found", test_id)))
    }

    pub fn update_test(&self, test_id: Uuid, payload: UpdateTestPayload) -> Result<Test> {
        payload.validate()?;

        let mut test = self.get_test_by_id(test_id)?;
        if let Some(title) = payload.title {
            test.title = title;
        }
        if let Some(description) = payload.description {
            test.description = Some(description);
        }
        if let Some(test_type) = payload.test_type {
            test.test_type = test_type;
        }
        if let Some(questions) = payload.questions {
            for question in &questions {
                question.validate()?;
            }
            test.questions = materialize_questions(questions);
        }
        if let Some(prompt) = payload.writing_prompt {
            test.writing_prompt = Some(prompt);
        }
        if let Some(audio) = payload.audio_file {
            test.audio_file = Some(audio);
        }

        check_test_shape(
            test.test_type,
            &test.questions,
            test.writing_prompt.as_deref(),
            test.audio_file.as_deref(),
        )?;

        test.updated_at = Utc::now();
        Ok(self.tests.upsert(test))
    }

    pub fn list_tests(
        &self,
        page: usize,
        per_page: usize,
        filter: Option<TestFilter>,
    ) -> Result<PaginatedTests> {
        if page == 0 || per_page == 0 {
            return Err(Error::BadRequest(
                "Page and per_page must be at least 1".to_string(),
            ));
        }

        let filter = filter.unwrap_or_default();
        let mut tests: Vec<Test> = self
            .tests
            .list()
            .into_iter()
            .filter(|t| filter.test_type.map_or(true, |tt| t.test_type == tt))
            .filter(|t| filter.created_by.map_or(true, |by| t.created_by == by))
            .filter(|t| {
                filter.search.as_deref().map_or(true, |needle| {
                    let needle = needle.to_lowercase();
                    t.title.to_lowercase().contains(&needle)
                        || t.description
                            .as_deref()
                            .map_or(false, |d| d.to_lowercase().contains(&needle))
                })
            })
            .collect();
        tests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = tests.len();
        let total_pages = total.div_ceil(per_page).max(1);
        let tests = tests
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(PaginatedTests {
            tests,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub fn delete_test(&self, test_id: Uuid) -> Result<bool> {
        let deleted = self.tests.delete(test_id);
        if deleted {
            info!(test_id = %test_id, "test deleted");
        }
        Ok(deleted)
    }
}

fn materialize_questions(questions: Vec<CreateQuestion>) -> Vec<Question> {
    questions
        .into_iter()
        .map(|q| Question {
            id: Uuid::new_v4(),
            text: q.text,
            options: q
                .options
                .into_iter()
                .map(|o| QuestionOption {
                    id: Uuid::new_v4(),
                    text: o.text,
                    is_correct: o.is_correct,
                })
                .collect(),
        })
        .collect()
}

fn check_test_shape(
    test_type: TestType,
    questions: &[Question],
    writing_prompt: Option<&str>,
    audio_file: Option<&str>,
) -> Result<()> {
    match test_type {
        TestType::Writing => {
            if !questions.is_empty() {
                return Err(Error::BadRequest(
                    "Writing tests cannot carry questions".to_string(),
                ));
            }
            if writing_prompt.map_or(true, |p| p.trim().is_empty()) {
                return Err(Error::BadRequest(
                    "Writing tests require a writing prompt".to_string(),
                ));
            }
        }
        TestType::Comprehension | TestType::Listening => {
            if questions.is_empty() {
                return Err(Error::BadRequest(
                    "Objective tests require at least one question".to_string(),
                ));
            }
            let max_questions = get_config().max_questions_per_test;
            if questions.len() > max_questions {
                return Err(Error::BadRequest(format!(
                    "Tests are limited to {} questions",
                    max_questions
                )));
            }
            if test_type == TestType::Listening && audio_file.map_or(true, |a| a.is_empty()) {
                return Err(Error::BadRequest(
                    "Listening tests require an audio file reference".to_string(),
                ));
            }
            for question in questions {
                if question.options.len() < 2 {
                    return Err(Error::BadRequest(format!(
                        "Question '{}' needs at least two options",
                        question.text
                    )));
                }
                let correct = question.options.iter().filter(|o| o.is_correct).count();
                if correct != 1 {
                    return Err(Error::BadRequest(format!(
                        "Question '{}' must have exactly one correct option",
                        question.text
                    )));
                }
            }
        }
    }
    Ok(())
}

//! Quiz flow state machine: loading -> answering -> submitted.
//!
//! Submission is rejected locally, with no backend call, while any
//! question is unanswered. Grading is the backend's job; the flow only
//! holds the returned score and pass/fail banner data.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{QuizResult, QuizSheet};
use crate::errors::{AppError, AppResult};
use crate::services::LearningService;

/// Quiz flow state
#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    Loading,
    Answering {
        sheet: QuizSheet,
        /// question id -> chosen choice index
        answers: HashMap<Uuid, usize>,
    },
    Submitted(QuizResult),
}

/// The quiz page's state machine
pub struct QuizFlow {
    service: Arc<dyn LearningService>,
    token: String,
    state: QuizState,
}

impl QuizFlow {
    pub fn new(service: Arc<dyn LearningService>, token: String) -> Self {
        Self {
            service,
            token,
            state: QuizState::Loading,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Fetch the course quiz and move to `Answering`
    pub async fn load(&mut self, course_id: Uuid) -> AppResult<()> {
        let sheet = self.service.quiz(&self.token, course_id).await?;
        self.state = QuizState::Answering {
            sheet,
            answers: HashMap::new(),
        };
        Ok(())
    }

    /// Record the chosen choice for a question
    pub fn select(&mut self, question_id: Uuid, choice: usize) -> AppResult<()> {
        let QuizState::Answering { sheet, answers } = &mut self.state else {
            return Err(AppError::bad_request("The quiz is not open for answers"));
        };

        let question = sheet
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(AppError::NotFound)?;
        if choice >= question.choices.len() {
            return Err(AppError::bad_request("No such choice"));
        }

        answers.insert(question_id, choice);
        Ok(())
    }

    /// Number of questions still unanswered
    pub fn unanswered(&self) -> usize {
        match &self.state {
            QuizState::Answering { sheet, answers } => {
                sheet.questions.len() - answers.len()
            }
            _ => 0,
        }
    }

    /// Submit the answers for grading.
    ///
    /// While any question is unanswered this fails with a local warning
    /// and the flow stays in `Answering`; no submission call is made.
    pub async fn submit(&mut self) -> AppResult<QuizResult> {
        let QuizState::Answering { sheet, answers } = &self.state else {
            return Err(AppError::bad_request("The quiz is not open for submission"));
        };

        let unanswered = sheet.questions.len() - answers.len();
        if unanswered > 0 {
            return Err(AppError::validation(format!(
                "Please answer all questions before submitting ({} left)",
                unanswered
            )));
        }

        let result = self
            .service
            .submit_quiz(&self.token, sheet.id, answers)
            .await?;
        self.state = QuizState::Submitted(result.clone());
        Ok(result)
    }
}

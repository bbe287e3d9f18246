use std::collections::HashMap;

use thiserror::Error;

use crate::score::{QuizResult, score};
use crate::types::Question;

/// Submission refused by the completion gate. Recoverable: the user keeps
/// answering and tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please answer all questions. You have answered {answered} out of {total} questions.")]
    IncompleteSubmission { answered: usize, total: usize },
}

/// One quiz-taking attempt: the fixed question set, the answer ledger, and
/// the result once the session has been locked by a successful submission.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: HashMap<usize, String>,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            result: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Count of distinct questions with a recorded answer.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The recorded answer for a question, if any.
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn is_locked(&self) -> bool {
        self.result.is_some()
    }

    /// The scored outcome, present once the session is locked.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Record the user's selection for one question, overwriting any earlier
    /// selection for the same question. Silently ignored when the session is
    /// locked, the index is out of range, or the key is not one of that
    /// question's options; the UI should never produce those.
    pub fn record_answer(&mut self, index: usize, key: &str) {
        if self.is_locked() {
            return;
        }
        let Some(question) = self.questions.get(index) else {
            return;
        };
        if !question.has_option(key) {
            return;
        }
        self.answers.insert(index, key.to_string());
    }

    /// Whether the completion gate would pass: every question answered.
    pub fn can_submit(&self) -> bool {
        self.answered_count() == self.question_count()
    }

    /// Run the completion gate, score the attempt, and lock the session.
    ///
    /// A second call on a locked session returns the result computed at the
    /// first lock; nothing is re-scored. An incomplete attempt fails with
    /// `IncompleteSubmission` and leaves the ledger and lock untouched.
    pub fn submit(&mut self) -> Result<&QuizResult, SubmitError> {
        if self.result.is_none() && !self.can_submit() {
            return Err(SubmitError::IncompleteSubmission {
                answered: self.answered_count(),
                total: self.question_count(),
            });
        }

        let Self {
            questions,
            answers,
            result,
        } = self;
        Ok(result.get_or_insert_with(|| score(questions, answers)))
    }
}

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No quiz loaded.
    Empty,
    /// Questions present, answers being collected.
    Loaded,
    /// Submitted and scored; terminal for this session.
    Locked,
}

/// Owns the current session (if any) and drives it through
/// load → answer → submit → locked, then reset.
#[derive(Debug, Default)]
pub struct QuizController {
    session: Option<QuizSession>,
}

impl QuizController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match &self.session {
            None => SessionState::Empty,
            Some(s) if s.is_locked() => SessionState::Locked,
            Some(_) => SessionState::Loaded,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Start a fresh session from new quiz content, discarding any prior
    /// session in full.
    pub fn load(&mut self, questions: Vec<Question>) {
        self.session = Some(QuizSession::new(questions));
    }

    /// Forward an answer selection to the current session. No-op when no
    /// quiz is loaded or the session is locked.
    pub fn record_answer(&mut self, index: usize, key: &str) {
        if let Some(session) = &mut self.session {
            session.record_answer(index, key);
        }
    }

    /// Submit the current session. `None` when no quiz is loaded; a post-lock
    /// call returns the frozen result.
    pub fn submit(&mut self) -> Option<Result<&QuizResult, SubmitError>> {
        self.session.as_mut().map(QuizSession::submit)
    }

    /// Drop the session entirely.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

use crate::error::{Result, VidquizError};

/// One answer choice of a question. `key` is the single-letter label shown
/// to the user; vector order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub key: String,
    pub text: String,
}

/// A multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<QuizOption>,
    correct_key: String,
}

impl Question {
    /// Build a question, checking the structural contract the service is
    /// supposed to uphold: at least one option, unique keys, and the correct
    /// key present among the question's own options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<QuizOption>,
        correct_key: impl Into<String>,
    ) -> Result<Self> {
        let prompt = prompt.into();
        let correct_key = correct_key.into();

        if options.is_empty() {
            return Err(VidquizError::MalformedPackage {
                reason: format!("question {:?} has no options", prompt),
            });
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.key == option.key) {
                return Err(VidquizError::MalformedPackage {
                    reason: format!("question {:?} repeats option key {:?}", prompt, option.key),
                });
            }
        }
        if !options.iter().any(|o| o.key == correct_key) {
            return Err(VidquizError::MalformedPackage {
                reason: format!(
                    "question {:?} names correct answer {:?} which is not among its options",
                    prompt, correct_key
                ),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_key,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    /// Whether `key` names one of this question's options.
    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key == key)
    }
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct KeyPoints {
    pub points: Vec<String>,
}

/// The validated success payload from the processing service.
#[derive(Debug, Clone)]
pub struct LearningPackage {
    pub video_id: String,
    pub summary: Summary,
    pub key_points: KeyPoints,
    pub questions: Vec<Question>,
}

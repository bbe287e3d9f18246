//! Vidquiz Core Library
//!
//! Client-side core for the video learning service: submits a video
//! reference, validates the returned learning package, and drives the
//! interactive self-check quiz through its session state machine.

pub mod client;
pub mod error;
pub mod feedback;
pub mod render;
pub mod score;
pub mod session;
pub mod types;
pub mod video;

// Re-export commonly used items at crate root
pub use client::ServiceClient;
pub use error::{Result, VidquizError};
pub use feedback::{ScoreFeedback, Tier, feedback};
pub use render::{OptionReview, QuestionReview, QuizReviewPlan, format_package_readable, review_plan};
pub use score::{OptionMark, QuizResult, score};
pub use session::{QuizController, QuizSession, SessionState, SubmitError};
pub use types::{KeyPoints, LearningPackage, Question, QuizOption, Summary};
pub use video::{extract_video_id, parse_video_id};

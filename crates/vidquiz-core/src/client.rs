use serde::{Deserialize, Serialize};

use crate::error::{Result, VidquizError};
use crate::types::{KeyPoints, LearningPackage, Question, QuizOption, Summary};

/// Client for the remote processing service. One request in, one structured
/// learning package out; retry policy and content generation live on the
/// other side of this boundary.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    youtube_url: &'a str,
}

#[derive(Deserialize)]
struct ProcessResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    stage: Option<String>,
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    summary: Option<WireSummary>,
    #[serde(default)]
    key_points: Option<WireKeyPoints>,
    #[serde(default)]
    quiz: Option<WireQuiz>,
}

#[derive(Deserialize)]
struct WireSummary {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct WireKeyPoints {
    #[serde(default)]
    points: Vec<String>,
}

#[derive(Deserialize)]
struct WireQuiz {
    #[serde(default)]
    questions: Vec<WireQuestion>,
}

#[derive(Deserialize)]
struct WireQuestion {
    question: String,
    // serde_json's preserve_order keeps the service's option order here.
    options: serde_json::Map<String, serde_json::Value>,
    correct_answer: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the service answers its health endpoint.
    pub async fn health(&self) -> bool {
        match self.http.get(format!("{}/", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Submit a video reference and return the validated learning package.
    pub async fn process_video(&self, video_reference: &str) -> Result<LearningPackage> {
        let response = self
            .http
            .post(format!("{}/api/process", self.base_url))
            .json(&ProcessRequest {
                youtube_url: video_reference,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        package_from_reply(status, &body)
    }
}

/// Map one completed HTTP exchange onto the package or an error. A non-2xx
/// reply is a `ServiceError`: the service's own structured error body when it
/// sent one, otherwise the bare status (a proxy's HTML error page lands
/// here). A success payload under a failure status is never accepted.
fn package_from_reply(status: reqwest::StatusCode, body: &str) -> Result<LearningPackage> {
    if !status.is_success() {
        return match serde_json::from_str::<ProcessResponse>(body) {
            Ok(response) if !response.success => package_from_response(response),
            _ => Err(VidquizError::ServiceError {
                stage: "unknown".to_string(),
                message: format!("service returned HTTP {status}"),
            }),
        };
    }

    package_from_response(serde_json::from_str(body)?)
}

/// Turn the raw wire payload into a validated `LearningPackage`, or the
/// service's own error into `ServiceError`. A structurally broken success
/// payload is a contract breach and fails with `MalformedPackage`.
fn package_from_response(response: ProcessResponse) -> Result<LearningPackage> {
    if !response.success {
        return Err(VidquizError::ServiceError {
            stage: response.stage.unwrap_or_else(|| "unknown".to_string()),
            message: response
                .error
                .unwrap_or_else(|| "Failed to process video".to_string()),
        });
    }

    let quiz = response.quiz.unwrap_or(WireQuiz { questions: vec![] });
    if quiz.questions.is_empty() {
        return Err(VidquizError::MalformedPackage {
            reason: "quiz has no questions".to_string(),
        });
    }

    let mut questions = Vec::with_capacity(quiz.questions.len());
    for wire in quiz.questions {
        let mut options = Vec::with_capacity(wire.options.len());
        for (key, value) in wire.options {
            let Some(text) = value.as_str() else {
                return Err(VidquizError::MalformedPackage {
                    reason: format!("option {:?} of question {:?} is not text", key, wire.question),
                });
            };
            options.push(QuizOption {
                key,
                text: text.to_string(),
            });
        }
        questions.push(Question::new(wire.question, options, wire.correct_answer)?);
    }

    Ok(LearningPackage {
        video_id: response.video_id.unwrap_or_default(),
        summary: Summary {
            text: response
                .summary
                .map(|s| s.text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Summary not available".to_string()),
        },
        key_points: KeyPoints {
            points: response.key_points.map(|k| k.points).unwrap_or_default(),
        },
        questions,
    })
}

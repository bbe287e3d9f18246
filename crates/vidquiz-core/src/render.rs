use crate::score::OptionMark;
use crate::session::QuizSession;
use crate::types::LearningPackage;

/// Render instruction for one option of a reviewed question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionReview {
    pub key: String,
    pub text: String,
    pub mark: OptionMark,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    /// 1-based display number.
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionReview>,
}

/// Everything a host needs to draw the post-submission review, independent
/// of the rendering technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReviewPlan {
    pub questions: Vec<QuestionReview>,
}

/// Build the review plan for a locked session. `None` before lock: there is
/// nothing to review until the attempt has been scored.
pub fn review_plan(session: &QuizSession) -> Option<QuizReviewPlan> {
    let result = session.result()?;

    let questions = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = session.answer(index);
            let options = question
                .options()
                .iter()
                .zip(&result.marks[index])
                .map(|(option, mark)| OptionReview {
                    key: option.key.clone(),
                    text: option.text.clone(),
                    mark: *mark,
                    selected: selected == Some(option.key.as_str()),
                })
                .collect();

            QuestionReview {
                number: index + 1,
                prompt: question.prompt().to_string(),
                options,
            }
        })
        .collect();

    Some(QuizReviewPlan { questions })
}

/// Format the learning package as human-readable text.
pub fn format_package_readable(package: &LearningPackage) -> String {
    let mut output = String::new();

    output.push_str("## Summary\n\n");
    output.push_str(&package.summary.text);
    output.push_str("\n\n");

    output.push_str("## Key Points\n\n");
    for (i, point) in package.key_points.points.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, point));
    }
    output.push('\n');

    output.push_str(&format!(
        "## Quiz\n\n{} questions ready.\n",
        package.questions.len()
    ));

    output
}

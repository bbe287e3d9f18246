use std::collections::HashMap;

use crate::types::Question;

/// How one option of one question should be marked after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// This option is the correct answer. Always applied, whether or not the
    /// user picked it.
    CorrectKey,
    /// The user picked this option and it is not the correct answer.
    IncorrectSelected,
    /// Neither the correct answer nor a wrong pick.
    Neutral,
}

/// Outcome of scoring one attempt. `marks` is parallel to the question list,
/// and each inner vector parallel to that question's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
    pub marks: Vec<Vec<OptionMark>>,
}

/// Compare recorded answers against the correct keys. Case-sensitive exact
/// match. Pure: reads the ledger, never mutates it, and the same inputs
/// always produce the same result.
pub fn score(questions: &[Question], answers: &HashMap<usize, String>) -> QuizResult {
    let mut correct_count = 0;
    let mut marks = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let selected = answers.get(&index).map(String::as_str);

        if selected == Some(question.correct_key()) {
            correct_count += 1;
        }

        let question_marks = question
            .options()
            .iter()
            .map(|option| {
                if option.key == question.correct_key() {
                    OptionMark::CorrectKey
                } else if selected == Some(option.key.as_str()) {
                    OptionMark::IncorrectSelected
                } else {
                    OptionMark::Neutral
                }
            })
            .collect();
        marks.push(question_marks);
    }

    QuizResult {
        correct_count,
        total: questions.len(),
        marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuizOption;

    fn question(correct: &str) -> Question {
        let options = ["A", "B", "C", "D"]
            .iter()
            .map(|k| QuizOption {
                key: k.to_string(),
                text: format!("option {k}"),
            })
            .collect();
        Question::new("q", options, correct).unwrap()
    }

    fn answers(pairs: &[(usize, &str)]) -> HashMap<usize, String> {
        pairs
            .iter()
            .map(|(i, k)| (*i, k.to_string()))
            .collect()
    }

    #[test]
    fn correct_pick_marks_only_the_correct_key() {
        let questions = vec![question("B")];
        let result = score(&questions, &answers(&[(0, "B")]));

        assert_eq!(result.correct_count, 1);
        assert_eq!(
            result.marks[0],
            [
                OptionMark::Neutral,
                OptionMark::CorrectKey,
                OptionMark::Neutral,
                OptionMark::Neutral
            ]
        );
    }

    #[test]
    fn wrong_pick_flags_selection_and_still_highlights_correct_key() {
        let questions = vec![question("B")];
        let result = score(&questions, &answers(&[(0, "D")]));

        assert_eq!(result.correct_count, 0);
        assert_eq!(
            result.marks[0],
            [
                OptionMark::Neutral,
                OptionMark::CorrectKey,
                OptionMark::Neutral,
                OptionMark::IncorrectSelected
            ]
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let options = vec![
            QuizOption {
                key: "a".to_string(),
                text: "lower".to_string(),
            },
            QuizOption {
                key: "A".to_string(),
                text: "upper".to_string(),
            },
        ];
        let questions = vec![Question::new("q", options, "A").unwrap()];
        let result = score(&questions, &answers(&[(0, "a")]));

        assert_eq!(result.correct_count, 0);
        assert_eq!(
            result.marks[0],
            [OptionMark::IncorrectSelected, OptionMark::CorrectKey]
        );
    }

    #[test]
    fn every_question_has_one_correct_key_and_at_most_one_incorrect_selected() {
        let questions = vec![question("A"), question("C"), question("D")];
        let result = score(&questions, &answers(&[(0, "A"), (1, "B"), (2, "C")]));

        for question_marks in &result.marks {
            let correct = question_marks
                .iter()
                .filter(|m| **m == OptionMark::CorrectKey)
                .count();
            let incorrect = question_marks
                .iter()
                .filter(|m| **m == OptionMark::IncorrectSelected)
                .count();
            assert_eq!(correct, 1);
            assert!(incorrect <= 1);
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let questions = vec![question("A"), question("B")];
        let recorded = answers(&[(0, "A"), (1, "D")]);

        let first = score(&questions, &recorded);
        let second = score(&questions, &recorded);
        assert_eq!(first, second);
    }
}

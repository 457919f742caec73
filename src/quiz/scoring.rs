use crate::quiz::model::{AnswerValue, Question};
use std::collections::HashSet;

/// Single-select: correct iff `chosen` is the question's correct value.
pub fn is_correct_single(question: &Question, chosen: AnswerValue) -> bool {
    question
        .answers
        .iter()
        .find(|a| a.correct)
        .is_some_and(|a| a.value == chosen)
}

/// Multi-select: correct iff the chosen set equals the correct set. No partial credit.
pub fn is_correct_multiple(question: &Question, chosen: &[AnswerValue]) -> bool {
    let chosen: HashSet<AnswerValue> = chosen.iter().copied().collect();
    let correct: HashSet<AnswerValue> = question.correct_values().collect();
    chosen == correct
}

pub fn is_correct(question: &Question, chosen: &[AnswerValue]) -> bool {
    if question.multiple {
        is_correct_multiple(question, chosen)
    } else {
        matches!(chosen, [single] if is_correct_single(question, *single))
    }
}

/// Rounded percentage of `score` over `total`; 0 when nothing was asked.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::Answer;

    fn question(multiple: bool, correct: &[AnswerValue]) -> Question {
        Question {
            id: 1,
            rank: 1,
            prompt: "Q".into(),
            image: None,
            multiple,
            favorite: false,
            explanation: String::new(),
            answers: (1..=4)
                .map(|v| Answer {
                    value: v,
                    title: format!("answer {}", v),
                    correct: correct.contains(&v),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_select() {
        let q = question(false, &[3]);
        assert!(is_correct_single(&q, 3));
        for other in [1, 2, 4, 99] {
            assert!(!is_correct_single(&q, other));
        }
        assert!(is_correct(&q, &[3]));
        assert!(!is_correct(&q, &[]));
        assert!(!is_correct(&q, &[3, 1]));
    }

    #[test]
    fn test_multi_select_is_set_equality() {
        let q = question(true, &[1, 2]);
        assert!(is_correct_multiple(&q, &[1, 2]));
        assert!(is_correct_multiple(&q, &[2, 1]));
        assert!(!is_correct_multiple(&q, &[1]));
        assert!(!is_correct_multiple(&q, &[1, 2, 3]));
        assert!(!is_correct_multiple(&q, &[]));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }
}

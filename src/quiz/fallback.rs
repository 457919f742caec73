//! Built-in question set used when the configured source cannot be loaded.

use crate::quiz::model::{Answer, Question};

fn answer(value: i64, title: &str, correct: bool) -> Answer {
    Answer {
        value,
        title: title.to_string(),
        correct,
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: 274,
            rank: 1,
            prompt: "Average items in the Product Backlog are usually…".into(),
            image: None,
            multiple: false,
            favorite: false,
            explanation: "Items of different sizes are added to the Product Backlog. Larger items \
                          are typically broken down into smaller, more manageable pieces during \
                          Sprint Planning, making Product Backlog items generally larger than \
                          Sprint Backlog items."
                .into(),
            answers: vec![
                answer(788, "The same size as the items in the Sprint Backlog", false),
                answer(787, "Smaller than items in the Sprint Backlog", false),
                answer(786, "Larger than items in the Sprint Backlog", true),
            ],
        },
        Question {
            id: 275,
            rank: 2,
            prompt: "What is the main purpose of a Sprint Review?".into(),
            image: None,
            multiple: false,
            favorite: false,
            explanation: "The Sprint Review is held at the end of the Sprint to inspect the \
                          Increment and adapt the Product Backlog if needed. It's an opportunity \
                          to demonstrate what was accomplished and gather feedback from \
                          stakeholders."
                .into(),
            answers: vec![
                answer(789, "To plan the next Sprint", false),
                answer(790, "To inspect the Increment and adapt the Product Backlog", true),
                answer(791, "To review team performance", false),
            ],
        },
        Question {
            id: 276,
            rank: 3,
            prompt: "Who is responsible for managing the Product Backlog?".into(),
            image: None,
            multiple: false,
            favorite: false,
            explanation: "The Product Owner is solely responsible for managing the Product \
                          Backlog. This includes ordering items, ensuring clarity of items, and \
                          ensuring the Development Team understands items to the level needed."
                .into(),
            answers: vec![
                answer(792, "Scrum Master", false),
                answer(793, "Product Owner", true),
                answer(794, "Development Team", false),
            ],
        },
        Question {
            id: 277,
            rank: 4,
            prompt: "Which of the following are Scrum artifacts?".into(),
            image: None,
            multiple: true,
            favorite: false,
            explanation: "Scrum defines three artifacts: the Product Backlog, the Sprint Backlog \
                          and the Increment. The burndown chart is a common practice, not an \
                          artifact."
                .into(),
            answers: vec![
                answer(795, "Product Backlog", true),
                answer(796, "Sprint Backlog", true),
                answer(797, "Increment", true),
                answer(798, "Burndown chart", false),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_is_valid() {
        let questions = questions();
        assert!(!questions.is_empty());
        let prompts: HashSet<_> = questions.iter().map(|q| q.normalized_prompt()).collect();
        assert_eq!(prompts.len(), questions.len());
        for q in &questions {
            let correct = q.correct_values().count();
            assert!(correct >= 1);
            if !q.multiple {
                assert_eq!(correct, 1);
            }
        }
    }
}

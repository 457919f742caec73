//! Random question subset selection.

use crate::quiz::model::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Drops questions whose normalized prompt was already seen, keeping the
/// first occurrence.
pub fn dedup_by_prompt(pool: &[Question]) -> Vec<Question> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|q| seen.insert(q.normalized_prompt()))
        .cloned()
        .collect()
}

/// Draws up to `count` distinct questions in shuffled presentation order.
pub fn draw<R: Rng + ?Sized>(pool: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let mut questions = dedup_by_prompt(pool);
    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn q(id: i64, prompt: &str) -> Question {
        Question {
            id,
            rank: id,
            prompt: prompt.into(),
            image: None,
            multiple: false,
            favorite: false,
            explanation: String::new(),
            answers: vec![Answer {
                value: 1,
                title: "a".into(),
                correct: true,
            }],
        }
    }

    #[test]
    fn test_dedup_normalizes_prompts() {
        let pool = vec![
            q(1, "What is Scrum?"),
            q(2, "  what is scrum?"),
            q(3, "WHAT IS SCRUM?  "),
            q(4, "Who owns the backlog?"),
        ];
        let ids: Vec<i64> = dedup_by_prompt(&pool).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_draw_respects_size_and_uniqueness() {
        let mut pool: Vec<Question> = (0..20).map(|i| q(i, &format!("prompt {}", i))).collect();
        pool.push(q(100, "PROMPT 3"));
        pool.push(q(101, "prompt 7 "));
        let mut rng = StdRng::seed_from_u64(7);

        for requested in [0, 1, 5, 20, 22, 50] {
            let drawn = draw(&pool, requested, &mut rng);
            assert_eq!(drawn.len(), requested.min(20));
            let prompts: HashSet<String> = drawn.iter().map(|q| q.normalized_prompt()).collect();
            assert_eq!(prompts.len(), drawn.len());
        }
    }

    #[test]
    fn test_draw_varies_presentation_order() {
        let pool: Vec<Question> = (0..4).map(|i| q(i, &format!("prompt {}", i))).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut first_seen = HashSet::new();
        for _ in 0..200 {
            let drawn = draw(&pool, 4, &mut rng);
            let mut ids: Vec<i64> = drawn.iter().map(|q| q.id).collect();
            first_seen.insert(ids[0]);
            ids.sort_unstable();
            assert_eq!(ids, vec![0, 1, 2, 3]);
        }
        assert_eq!(first_seen.len(), 4);
    }
}

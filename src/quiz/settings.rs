//! Session settings and the bounds derived from the pool size.

/// Caps applied on top of the pool size. Configurable via `[quiz]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLimits {
    pub default_question_count: usize,
    pub max_question_count: usize,
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self {
            default_question_count: 10,
            max_question_count: 50,
        }
    }
}

const MIN_SUGGESTED_MINUTES: u32 = 5;
const MAX_SUGGESTED_MINUTES: u32 = 180;
pub const MINUTE_STEP: u32 = 5;

/// Operator-chosen parameters for the next session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub question_count: usize,
    /// `None` disables the countdown.
    pub time_limit_secs: Option<u32>,
}

impl SessionSettings {
    /// Defaults for a pool of `pool_size` questions.
    pub fn for_pool(pool_size: usize, limits: QuizLimits, timed: bool) -> Self {
        let question_count = default_count(pool_size, limits);
        Self {
            question_count,
            time_limit_secs: timed.then(|| default_minutes(question_count) * 60),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.time_limit_secs.is_some()
    }
}

fn round_up_to_step(minutes: f64) -> u32 {
    ((minutes / MINUTE_STEP as f64).ceil() as u32) * MINUTE_STEP
}

pub fn default_count(pool_size: usize, limits: QuizLimits) -> usize {
    limits.default_question_count.min(pool_size).max(1)
}

pub fn max_count(pool_size: usize, limits: QuizLimits) -> usize {
    limits.max_question_count.min(pool_size).max(1)
}

/// Suggested time range in minutes for `count` questions, both ends in
/// `[5, 180]`.
pub fn suggested_minutes(count: usize) -> (u32, u32) {
    let min = round_up_to_step(count as f64 * 0.5)
        .clamp(MIN_SUGGESTED_MINUTES, MAX_SUGGESTED_MINUTES);
    let max = round_up_to_step(count as f64 * 3.0)
        .clamp(MIN_SUGGESTED_MINUTES, MAX_SUGGESTED_MINUTES);
    (min, max)
}

/// One minute per question rounded up to the step, kept inside the suggested range.
pub fn default_minutes(count: usize) -> u32 {
    let (min, max) = suggested_minutes(count);
    round_up_to_step(count as f64).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_bounded_by_pool() {
        let limits = QuizLimits::default();
        assert_eq!(default_count(3, limits), 3);
        assert_eq!(default_count(200, limits), 10);
        assert_eq!(max_count(3, limits), 3);
        assert_eq!(max_count(200, limits), 50);
        assert_eq!(max_count(0, limits), 1);
    }

    #[test]
    fn test_suggested_range() {
        assert_eq!(suggested_minutes(1), (5, 5));
        assert_eq!(suggested_minutes(10), (5, 30));
        assert_eq!(suggested_minutes(11), (10, 35));
        assert_eq!(suggested_minutes(50), (25, 150));
        assert_eq!(suggested_minutes(80), (40, 180));
    }

    #[test]
    fn test_default_minutes_inside_range() {
        for count in 1..=60 {
            let (min, max) = suggested_minutes(count);
            let minutes = default_minutes(count);
            assert!(min <= minutes && minutes <= max, "count {}", count);
            assert_eq!(minutes % MINUTE_STEP, 0);
        }
        assert_eq!(default_minutes(10), 10);
        assert_eq!(default_minutes(12), 15);
    }

    #[test]
    fn test_for_pool() {
        let s = SessionSettings::for_pool(3, QuizLimits::default(), true);
        assert_eq!(s.question_count, 3);
        assert_eq!(s.time_limit_secs, Some(5 * 60));

        let s = SessionSettings::for_pool(100, QuizLimits::default(), false);
        assert_eq!(s.question_count, 10);
        assert!(!s.is_timed());
    }
}

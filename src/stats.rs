use crate::models::UserProgress;

/// Home-screen counters derived from the progress ledger. Read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub answered_count: usize,
    pub correct_count: usize,
    pub wrong_count: usize,
    /// Rounded percent of the gradable bank attempted at least once.
    pub percentage: u32,
}

pub fn completion_stats(progress: &UserProgress, total_questions: usize) -> CompletionStats {
    let answered_count = progress.answered.len();
    let correct_count = progress.correct.values().filter(|v| **v).count();
    let wrong_count = progress.wrong_ids.len();

    // Guard the empty bank: never let a division produce NaN for display.
    let percentage = if total_questions == 0 {
        0
    } else {
        (100.0 * answered_count as f64 / total_questions as f64).round() as u32
    };

    CompletionStats {
        answered_count,
        correct_count,
        wrong_count,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progress() {
        let stats = completion_stats(&UserProgress::default(), 10);
        assert_eq!(stats.answered_count, 0);
        assert_eq!(stats.correct_count, 0);
        assert_eq!(stats.wrong_count, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_percentage_rounds() {
        let mut progress = UserProgress::default();
        for id in ["q1", "q2", "q3"] {
            progress.answered.insert(id.to_string(), true);
        }
        assert_eq!(completion_stats(&progress, 10).percentage, 30);
        // 3/7 = 42.857... rounds to 43
        assert_eq!(completion_stats(&progress, 7).percentage, 43);
    }

    #[test]
    fn test_zero_total_yields_zero_percentage() {
        let mut progress = UserProgress::default();
        progress.answered.insert("q1".to_string(), true);
        assert_eq!(completion_stats(&progress, 0).percentage, 0);
    }

    #[test]
    fn test_correct_count_only_counts_true_entries() {
        let mut progress = UserProgress::default();
        progress.answered.insert("q1".to_string(), true);
        progress.answered.insert("q2".to_string(), true);
        progress.correct.insert("q1".to_string(), true);
        progress.correct.insert("q2".to_string(), false);
        progress.wrong_ids.push("q2".to_string());

        let stats = completion_stats(&progress, 4);
        assert_eq!(stats.answered_count, 2);
        assert_eq!(stats.correct_count, 1);
        assert_eq!(stats.wrong_count, 1);
        assert_eq!(stats.percentage, 50);
    }
}

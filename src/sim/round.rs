//! Round selection: which questions a session plays, and in what order

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::questions::QuestionRecord;
use crate::settings::OrderMode;

/// Pick the session's questions.
///
/// `limit == 0` plays everything. Shuffling is a proper Fisher-Yates pass,
/// so every ordering is equally likely. A sequential round starts at `start`
/// (clamped to the pool), so a long file can be played batch by batch.
pub fn select_round<R: Rng + ?Sized>(
    questions: &[Arc<QuestionRecord>],
    limit: usize,
    order: OrderMode,
    start: usize,
    rng: &mut R,
) -> Vec<Arc<QuestionRecord>> {
    let mut round = match order {
        OrderMode::Shuffle => {
            let mut round = questions.to_vec();
            round.shuffle(rng);
            round
        }
        OrderMode::Sequential => questions[start.min(questions.len())..].to_vec(),
    };
    if limit > 0 {
        round.truncate(limit);
    }
    round
}

/// Wrap parsed records for sharing between rounds
pub fn share(questions: Vec<QuestionRecord>) -> Vec<Arc<QuestionRecord>> {
    questions.into_iter().map(Arc::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn numbered(n: usize) -> Vec<Arc<QuestionRecord>> {
        share(
            (0..n)
                .map(|i| QuestionRecord::new(format!("Q{i}"), "yes", ["yes", "no"]))
                .collect(),
        )
    }

    #[test]
    fn test_limit_zero_takes_all() {
        let questions = numbered(20);
        let mut rng = Pcg32::seed_from_u64(7);
        let round = select_round(&questions, 0, OrderMode::Shuffle, 0, &mut rng);
        assert_eq!(round.len(), 20);

        let mut names: Vec<_> = round.iter().map(|q| q.question.clone()).collect();
        names.sort();
        let mut expected: Vec<_> = questions.iter().map(|q| q.question.clone()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_limit_caps_length() {
        let questions = numbered(20);
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(select_round(&questions, 5, OrderMode::Shuffle, 0, &mut rng).len(), 5);
        assert_eq!(select_round(&questions, 50, OrderMode::Shuffle, 0, &mut rng).len(), 20);
        assert!(select_round(&[], 5, OrderMode::Shuffle, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_round_shares_records() {
        let questions = numbered(3);
        let mut rng = Pcg32::seed_from_u64(1);
        let round = select_round(&questions, 0, OrderMode::Sequential, 0, &mut rng);
        assert!(round.iter().zip(&questions).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_sequential_batches() {
        let questions = numbered(25);
        let mut rng = Pcg32::seed_from_u64(1);
        let names = |round: Vec<Arc<QuestionRecord>>| -> Vec<String> {
            round.iter().map(|q| q.question.clone()).collect()
        };

        let second = select_round(&questions, 10, OrderMode::Sequential, 10, &mut rng);
        assert_eq!(second.len(), 10);
        assert_eq!(names(second)[0], "Q10");

        // The last batch is short
        let last = select_round(&questions, 10, OrderMode::Sequential, 20, &mut rng);
        assert_eq!(names(last), vec!["Q20", "Q21", "Q22", "Q23", "Q24"]);

        // Past the end gives an empty round instead of panicking
        assert!(select_round(&questions, 10, OrderMode::Sequential, 99, &mut rng).is_empty());

        // No limit plays from the offset to the end
        assert_eq!(select_round(&questions, 0, OrderMode::Sequential, 5, &mut rng).len(), 20);
    }

    #[test]
    fn test_start_ignored_when_shuffling() {
        let questions = numbered(12);
        let mut rng = Pcg32::seed_from_u64(4);
        assert_eq!(select_round(&questions, 0, OrderMode::Shuffle, 8, &mut rng).len(), 12);
    }

    #[test]
    fn test_shuffle_changes_order_for_some_seed() {
        let questions = numbered(20);
        let shuffled = (0..10u64).any(|seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let round = select_round(&questions, 0, OrderMode::Shuffle, 0, &mut rng);
            round.iter().zip(&questions).any(|(a, b)| !Arc::ptr_eq(a, b))
        });
        assert!(shuffled);
    }
}

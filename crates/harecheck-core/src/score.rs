use crate::model::{AnswerTally, Diagnosis};

/// Weighted sum of category counts: B counts once, C twice. A and
/// unrecognized answers contribute nothing.
pub fn compute_score(tally: &AnswerTally) -> u32 {
    tally.count_b() + tally.count_c() * 2
}

/// Maps a trial score to its label. Thresholds are half-open and checked in
/// ascending order, first match wins.
pub fn diagnose(score: u32) -> Diagnosis {
    if score < 10 {
        Diagnosis::Normal
    } else if score < 20 {
        Diagnosis::AboveNormal
    } else if score < 30 {
        Diagnosis::IncreasedRisk
    } else {
        Diagnosis::Psychopath
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn tally(a: u32, b: u32, c: u32, unrecognized: u32) -> AnswerTally {
        let mut t = AnswerTally::new();
        for _ in 0..a {
            t.record(Category::A);
        }
        for _ in 0..b {
            t.record(Category::B);
        }
        for _ in 0..c {
            t.record(Category::C);
        }
        for _ in 0..unrecognized {
            t.record(Category::Unrecognized("X".into()));
        }
        t
    }

    #[test]
    fn zero_tally_scores_zero_and_reads_normal() {
        let t = AnswerTally::new();
        assert_eq!(compute_score(&t), 0);
        assert_eq!(diagnose(compute_score(&t)), Diagnosis::Normal);
    }

    #[test]
    fn only_b_and_c_are_weighted() {
        assert_eq!(compute_score(&tally(20, 0, 0, 0)), 0);
        assert_eq!(compute_score(&tally(0, 0, 0, 20)), 0);
        assert_eq!(compute_score(&tally(0, 5, 0, 0)), 5);
        assert_eq!(compute_score(&tally(0, 0, 5, 0)), 10);
        assert_eq!(compute_score(&tally(7, 7, 6, 0)), 19);
    }

    #[test]
    fn score_is_monotonic_in_b_and_c_counts() {
        for n in 0..20 {
            assert!(compute_score(&tally(0, n + 1, 3, 0)) >= compute_score(&tally(0, n, 3, 0)));
            assert!(compute_score(&tally(0, 3, n + 1, 0)) >= compute_score(&tally(0, 3, n, 0)));
        }
    }

    #[test]
    fn diagnosis_boundaries_are_half_open() {
        assert_eq!(diagnose(0), Diagnosis::Normal);
        assert_eq!(diagnose(9), Diagnosis::Normal);
        assert_eq!(diagnose(10), Diagnosis::AboveNormal);
        assert_eq!(diagnose(19), Diagnosis::AboveNormal);
        assert_eq!(diagnose(20), Diagnosis::IncreasedRisk);
        assert_eq!(diagnose(29), Diagnosis::IncreasedRisk);
        assert_eq!(diagnose(30), Diagnosis::Psychopath);
        assert_eq!(diagnose(40), Diagnosis::Psychopath);
        assert_eq!(diagnose(u32::MAX), Diagnosis::Psychopath);
    }

    #[test]
    fn every_score_maps_to_exactly_one_label() {
        for score in 0..=40 {
            // total function: no panics, and each score hits one arm
            let _ = diagnose(score);
        }
    }
}

//! Scoring Engine: turns positional quiz responses into normalized category scores.
//!
//! Both functions are pure. A category with nothing to count scores 0.0; every
//! division is guarded so no input produces NaN.

use tracing::debug;

use crate::assessment::models::{
    AptitudeCategory, AptitudeQuestion, AptitudeScores, InterestCategory, InterestQuestion,
    InterestScores,
};
use crate::assessment::question_bank::{MAX_RATING, MIN_RATING};
use crate::assessment::AssessmentError;

/// Scores aptitude answers: correct / total per category.
///
/// `answers[i]` is the selected option for `questions[i]`, or `None` when skipped.
/// A skipped question still counts toward its category's total.
pub fn score_aptitude(
    questions: &[AptitudeQuestion],
    answers: &[Option<usize>],
) -> Result<AptitudeScores, AssessmentError> {
    ensure_parallel("aptitude", questions.len(), answers.len())?;

    let mut correct = [0u32; AptitudeCategory::ALL.len()];
    let mut total = [0u32; AptitudeCategory::ALL.len()];

    for (question, answer) in questions.iter().zip(answers) {
        let slot = question.category.index();
        total[slot] += 1;

        let Some(selected) = *answer else { continue };
        if selected >= question.options.len() {
            return Err(AssessmentError::OptionOutOfRange {
                question_id: question.id,
                selected,
                options: question.options.len(),
            });
        }
        if selected == question.correct_answer {
            correct[slot] += 1;
        }
    }

    let mut scores = AptitudeScores::default();
    for category in AptitudeCategory::ALL {
        let slot = category.index();
        scores.set(category, ratio(f64::from(correct[slot]), total[slot]));
    }

    debug!(?scores, "aptitude scored");
    Ok(scores)
}

/// Scores interest ratings: mean rating / 5 per category.
///
/// Skipped statements are excluded from both the sum and the count, so they
/// never drag a category's average toward zero.
pub fn score_interest(
    questions: &[InterestQuestion],
    ratings: &[Option<u8>],
) -> Result<InterestScores, AssessmentError> {
    ensure_parallel("interest", questions.len(), ratings.len())?;

    let mut sum = [0u32; InterestCategory::ALL.len()];
    let mut answered = [0u32; InterestCategory::ALL.len()];

    for (question, rating) in questions.iter().zip(ratings) {
        let Some(rating) = *rating else { continue };
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AssessmentError::InvalidRating {
                question_id: question.id,
                rating,
            });
        }
        let slot = question.category.index();
        sum[slot] += u32::from(rating);
        answered[slot] += 1;
    }

    let mut scores = InterestScores::default();
    for category in InterestCategory::ALL {
        let slot = category.index();
        let mean = ratio(f64::from(sum[slot]), answered[slot]);
        scores.set(category, mean / f64::from(MAX_RATING));
    }

    debug!(?scores, "interest scored");
    Ok(scores)
}

fn ensure_parallel(
    section: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AssessmentError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AssessmentError::LengthMismatch {
            section,
            expected,
            actual,
        })
    }
}

fn ratio(numerator: f64, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / f64::from(denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::question_bank::{APTITUDE_QUESTIONS, INTEREST_QUESTIONS};
    use proptest::prelude::*;

    fn all_correct() -> Vec<Option<usize>> {
        APTITUDE_QUESTIONS.iter().map(|q| Some(q.correct_answer)).collect()
    }

    fn all_wrong() -> Vec<Option<usize>> {
        APTITUDE_QUESTIONS
            .iter()
            .map(|q| Some((q.correct_answer + 1) % q.options.len()))
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_all_correct_scores_one_everywhere() {
        let scores = score_aptitude(APTITUDE_QUESTIONS, &all_correct()).unwrap();
        for c in AptitudeCategory::ALL {
            assert_eq!(scores.get(c), 1.0, "{c:?}");
        }
    }

    #[test]
    fn test_all_wrong_scores_zero_everywhere() {
        let scores = score_aptitude(APTITUDE_QUESTIONS, &all_wrong()).unwrap();
        assert_eq!(scores, AptitudeScores::default());
    }

    #[test]
    fn test_all_unanswered_aptitude_is_zero_not_error() {
        let answers = vec![None; APTITUDE_QUESTIONS.len()];
        let scores = score_aptitude(APTITUDE_QUESTIONS, &answers).unwrap();
        assert_eq!(scores, AptitudeScores::default());
    }

    #[test]
    fn test_skipped_aptitude_question_counts_toward_total() {
        // Verbal is questions 0..6: three right, one skipped, two wrong → 3/6.
        let mut answers = all_wrong();
        for (i, answer) in answers.iter_mut().take(3).enumerate() {
            *answer = Some(APTITUDE_QUESTIONS[i].correct_answer);
        }
        answers[3] = None;

        let scores = score_aptitude(APTITUDE_QUESTIONS, &answers).unwrap();
        assert_close(scores.verbal, 0.5);
        assert_eq!(scores.logical, 0.0);
    }

    #[test]
    fn test_category_without_questions_scores_zero() {
        let only_verbal: Vec<_> = APTITUDE_QUESTIONS
            .iter()
            .filter(|q| q.category == AptitudeCategory::Verbal)
            .cloned()
            .collect();
        let answers: Vec<_> = only_verbal.iter().map(|q| Some(q.correct_answer)).collect();

        let scores = score_aptitude(&only_verbal, &answers).unwrap();
        assert_eq!(scores.verbal, 1.0);
        assert_eq!(scores.spatial, 0.0);
        assert!(!scores.numerical.is_nan());
    }

    #[test]
    fn test_aptitude_length_mismatch_fails_fast() {
        let err = score_aptitude(APTITUDE_QUESTIONS, &[Some(1)]).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::LengthMismatch {
                section: "aptitude",
                expected: 24,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_option_out_of_range_rejected() {
        let mut answers = all_correct();
        answers[6] = Some(9);
        let err = score_aptitude(APTITUDE_QUESTIONS, &answers).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::OptionOutOfRange {
                question_id: 7,
                selected: 9,
                options: 4
            }
        ));
    }

    #[test]
    fn test_all_max_ratings_score_one() {
        let ratings = vec![Some(5); INTEREST_QUESTIONS.len()];
        let scores = score_interest(INTEREST_QUESTIONS, &ratings).unwrap();
        for c in InterestCategory::ALL {
            assert_close(scores.get(c), 1.0);
        }
    }

    #[test]
    fn test_all_min_ratings_score_one_fifth() {
        let ratings = vec![Some(1); INTEREST_QUESTIONS.len()];
        let scores = score_interest(INTEREST_QUESTIONS, &ratings).unwrap();
        for c in InterestCategory::ALL {
            assert_close(scores.get(c), 0.2);
        }
    }

    #[test]
    fn test_all_unanswered_interest_is_zero() {
        let ratings = vec![None; INTEREST_QUESTIONS.len()];
        let scores = score_interest(INTEREST_QUESTIONS, &ratings).unwrap();
        assert_eq!(scores, InterestScores::default());
    }

    #[test]
    fn test_unanswered_rating_excluded_from_mean() {
        // Realistic is statements 0..4. Ratings 4, skip, skip, 2 → mean 3 → 0.6.
        let mut ratings = vec![None; INTEREST_QUESTIONS.len()];
        ratings[0] = Some(4);
        ratings[3] = Some(2);

        let scores = score_interest(INTEREST_QUESTIONS, &ratings).unwrap();
        assert_close(scores.realistic, 0.6);
        assert_eq!(scores.investigative, 0.0);
    }

    #[test]
    fn test_rating_outside_scale_rejected() {
        let mut ratings = vec![Some(3); INTEREST_QUESTIONS.len()];
        ratings[10] = Some(0);
        let err = score_interest(INTEREST_QUESTIONS, &ratings).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidRating {
                question_id: 11,
                rating: 0
            }
        ));

        ratings[10] = Some(6);
        assert!(score_interest(INTEREST_QUESTIONS, &ratings).is_err());
    }

    #[test]
    fn test_interest_length_mismatch_fails_fast() {
        let ratings = vec![Some(3); INTEREST_QUESTIONS.len() + 1];
        assert!(matches!(
            score_interest(INTEREST_QUESTIONS, &ratings),
            Err(AssessmentError::LengthMismatch { section: "interest", .. })
        ));
    }

    proptest! {
        #[test]
        fn aptitude_scores_stay_in_unit_interval(
            answers in proptest::collection::vec(
                proptest::option::of(0usize..4),
                APTITUDE_QUESTIONS.len(),
            )
        ) {
            let scores = score_aptitude(APTITUDE_QUESTIONS, &answers).unwrap();
            for c in AptitudeCategory::ALL {
                let v = scores.get(c);
                prop_assert!((0.0..=1.0).contains(&v), "{:?} = {}", c, v);
            }
        }

        #[test]
        fn interest_scores_stay_in_unit_interval(
            ratings in proptest::collection::vec(
                proptest::option::of(1u8..=5),
                INTEREST_QUESTIONS.len(),
            )
        ) {
            let scores = score_interest(INTEREST_QUESTIONS, &ratings).unwrap();
            for c in InterestCategory::ALL {
                let v = scores.get(c);
                prop_assert!((0.0..=1.0).contains(&v), "{:?} = {}", c, v);
            }
        }
    }
}

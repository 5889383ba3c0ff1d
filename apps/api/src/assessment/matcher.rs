//! Matcher: nearest-neighbour ranking of the career catalog.
//!
//! The user and every career are projected onto the same ten slots in
//! `PROFILE_DIMENSIONS` order. Euclidean distance is order-sensitive, so that
//! constant is the only place the slot layout is defined.

use tracing::debug;

use crate::assessment::models::{
    AptitudeCategory, AptitudeScores, CareerMatch, CareerProfile, InterestCategory,
    InterestScores,
};
use crate::assessment::AssessmentError;

/// Number of matches returned when the caller does not ask for a specific K.
pub const DEFAULT_TOP_K: usize = 3;

/// One slot of the combined profile vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Aptitude(AptitudeCategory),
    Interest(InterestCategory),
}

/// The fixed ten-slot layout: aptitudes first, then RIASEC interests.
pub const PROFILE_DIMENSIONS: [Dimension; 10] = [
    Dimension::Aptitude(AptitudeCategory::Verbal),
    Dimension::Aptitude(AptitudeCategory::Logical),
    Dimension::Aptitude(AptitudeCategory::Spatial),
    Dimension::Aptitude(AptitudeCategory::Numerical),
    Dimension::Interest(InterestCategory::Realistic),
    Dimension::Interest(InterestCategory::Investigative),
    Dimension::Interest(InterestCategory::Artistic),
    Dimension::Interest(InterestCategory::Social),
    Dimension::Interest(InterestCategory::Enterprising),
    Dimension::Interest(InterestCategory::Conventional),
];

pub type ProfileVector = [f64; PROFILE_DIMENSIONS.len()];

pub fn user_vector(aptitude: &AptitudeScores, interest: &InterestScores) -> ProfileVector {
    PROFILE_DIMENSIONS.map(|dimension| match dimension {
        Dimension::Aptitude(c) => aptitude.get(c),
        Dimension::Interest(c) => interest.get(c),
    })
}

/// Zero-fills every category the profile leaves undeclared.
pub fn career_vector(profile: &CareerProfile) -> ProfileVector {
    PROFILE_DIMENSIONS.map(|dimension| match dimension {
        Dimension::Aptitude(c) => profile.aptitude.weight(c),
        Dimension::Interest(c) => profile.interest.weight(c),
    })
}

/// Euclidean distance. Vectors of unequal length are rejected, not truncated.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, AssessmentError> {
    if a.len() != b.len() {
        return Err(AssessmentError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    Ok(sum.sqrt())
}

/// Ranks `catalog` by ascending distance from the user's profile and keeps the
/// closest `k`. Ties keep catalog order.
pub fn match_careers(
    aptitude: &AptitudeScores,
    interest: &InterestScores,
    catalog: &[CareerProfile],
    k: usize,
) -> Result<Vec<CareerMatch>, AssessmentError> {
    let user = user_vector(aptitude, interest);

    let mut scored = catalog
        .iter()
        .map(|profile| Ok((profile, euclidean_distance(&user, &career_vector(profile))?)))
        .collect::<Result<Vec<_>, AssessmentError>>()?;

    // sort_by is stable, which is what gives ties their catalog order.
    scored.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    debug!(
        candidates = catalog.len(),
        k,
        closest = scored.first().map(|(p, _)| p.career.as_str()),
        "careers ranked"
    );

    Ok(scored
        .into_iter()
        .take(k)
        .map(|(profile, distance)| CareerMatch {
            profile: profile.clone(),
            distance,
        })
        .collect())
}

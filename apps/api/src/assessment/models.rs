use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentError;

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

/// The four measured skill domains, scored by multiple-choice correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AptitudeCategory {
    Verbal,
    Logical,
    Spatial,
    Numerical,
}

impl AptitudeCategory {
    /// Canonical order. Scoring tallies and the profile vector both follow it.
    pub const ALL: [AptitudeCategory; 4] = [
        AptitudeCategory::Verbal,
        AptitudeCategory::Logical,
        AptitudeCategory::Spatial,
        AptitudeCategory::Numerical,
    ];

    pub fn index(self) -> usize {
        match self {
            AptitudeCategory::Verbal => 0,
            AptitudeCategory::Logical => 1,
            AptitudeCategory::Spatial => 2,
            AptitudeCategory::Numerical => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AptitudeCategory::Verbal => "verbal",
            AptitudeCategory::Logical => "logical",
            AptitudeCategory::Spatial => "spatial",
            AptitudeCategory::Numerical => "numerical",
        }
    }
}

/// Holland's RIASEC interest taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl InterestCategory {
    /// Canonical RIASEC order.
    pub const ALL: [InterestCategory; 6] = [
        InterestCategory::Realistic,
        InterestCategory::Investigative,
        InterestCategory::Artistic,
        InterestCategory::Social,
        InterestCategory::Enterprising,
        InterestCategory::Conventional,
    ];

    pub fn index(self) -> usize {
        match self {
            InterestCategory::Realistic => 0,
            InterestCategory::Investigative => 1,
            InterestCategory::Artistic => 2,
            InterestCategory::Social => 3,
            InterestCategory::Enterprising => 4,
            InterestCategory::Conventional => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterestCategory::Realistic => "realistic",
            InterestCategory::Investigative => "investigative",
            InterestCategory::Artistic => "artistic",
            InterestCategory::Social => "social",
            InterestCategory::Enterprising => "enterprising",
            InterestCategory::Conventional => "conventional",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Question bank entries
// ────────────────────────────────────────────────────────────────────────────

/// A multiple-choice aptitude item. Only ever constructed as static data.
#[derive(Debug, Clone, Serialize)]
pub struct AptitudeQuestion {
    pub id: u32,
    pub category: AptitudeCategory,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Never sent to clients; answers are checked server-side.
    #[serde(skip_serializing)]
    pub correct_answer: usize,
}

/// A self-assessment statement rated on a 1–5 agreement scale.
#[derive(Debug, Clone, Serialize)]
pub struct InterestQuestion {
    pub id: u32,
    pub category: InterestCategory,
    pub question: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

/// Fraction of each aptitude category answered correctly, 0.0 – 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    pub verbal: f64,
    pub logical: f64,
    pub spatial: f64,
    pub numerical: f64,
}

impl AptitudeScores {
    pub fn get(&self, category: AptitudeCategory) -> f64 {
        match category {
            AptitudeCategory::Verbal => self.verbal,
            AptitudeCategory::Logical => self.logical,
            AptitudeCategory::Spatial => self.spatial,
            AptitudeCategory::Numerical => self.numerical,
        }
    }

    pub fn set(&mut self, category: AptitudeCategory, value: f64) {
        match category {
            AptitudeCategory::Verbal => self.verbal = value,
            AptitudeCategory::Logical => self.logical = value,
            AptitudeCategory::Spatial => self.spatial = value,
            AptitudeCategory::Numerical => self.numerical = value,
        }
    }

    /// Rejects client-supplied scores outside [0, 1].
    pub fn validate(&self) -> Result<(), AssessmentError> {
        AptitudeCategory::ALL
            .iter()
            .try_for_each(|&c| check_unit_interval(c.as_str(), self.get(c)))
    }
}

/// Mean agreement per RIASEC category divided by the scale maximum, 0.0 – 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestScores {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

impl InterestScores {
    pub fn get(&self, category: InterestCategory) -> f64 {
        match category {
            InterestCategory::Realistic => self.realistic,
            InterestCategory::Investigative => self.investigative,
            InterestCategory::Artistic => self.artistic,
            InterestCategory::Social => self.social,
            InterestCategory::Enterprising => self.enterprising,
            InterestCategory::Conventional => self.conventional,
        }
    }

    pub fn set(&mut self, category: InterestCategory, value: f64) {
        match category {
            InterestCategory::Realistic => self.realistic = value,
            InterestCategory::Investigative => self.investigative = value,
            InterestCategory::Artistic => self.artistic = value,
            InterestCategory::Social => self.social = value,
            InterestCategory::Enterprising => self.enterprising = value,
            InterestCategory::Conventional => self.conventional = value,
        }
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        InterestCategory::ALL
            .iter()
            .try_for_each(|&c| check_unit_interval(c.as_str(), self.get(c)))
    }
}

fn check_unit_interval(dimension: &'static str, value: f64) -> Result<(), AssessmentError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AssessmentError::ScoreOutOfRange { dimension, value })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career profiles
// ────────────────────────────────────────────────────────────────────────────

/// Partial aptitude weights. A category left out weighs 0.0; an unknown key is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AptitudeWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerical: Option<f64>,
}

impl AptitudeWeights {
    pub fn from_pairs(pairs: &[(AptitudeCategory, f64)]) -> Self {
        let mut weights = Self::default();
        for &(category, weight) in pairs {
            *weights.slot_mut(category) = Some(weight);
        }
        weights
    }

    pub fn declared(&self, category: AptitudeCategory) -> Option<f64> {
        match category {
            AptitudeCategory::Verbal => self.verbal,
            AptitudeCategory::Logical => self.logical,
            AptitudeCategory::Spatial => self.spatial,
            AptitudeCategory::Numerical => self.numerical,
        }
    }

    pub fn weight(&self, category: AptitudeCategory) -> f64 {
        self.declared(category).unwrap_or(0.0)
    }

    fn slot_mut(&mut self, category: AptitudeCategory) -> &mut Option<f64> {
        match category {
            AptitudeCategory::Verbal => &mut self.verbal,
            AptitudeCategory::Logical => &mut self.logical,
            AptitudeCategory::Spatial => &mut self.spatial,
            AptitudeCategory::Numerical => &mut self.numerical,
        }
    }
}

/// Partial RIASEC weights. A category left out weighs 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterestWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realistic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigative: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artistic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprising: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventional: Option<f64>,
}

impl InterestWeights {
    pub fn from_pairs(pairs: &[(InterestCategory, f64)]) -> Self {
        let mut weights = Self::default();
        for &(category, weight) in pairs {
            *weights.slot_mut(category) = Some(weight);
        }
        weights
    }

    pub fn declared(&self, category: InterestCategory) -> Option<f64> {
        match category {
            InterestCategory::Realistic => self.realistic,
            InterestCategory::Investigative => self.investigative,
            InterestCategory::Artistic => self.artistic,
            InterestCategory::Social => self.social,
            InterestCategory::Enterprising => self.enterprising,
            InterestCategory::Conventional => self.conventional,
        }
    }

    pub fn weight(&self, category: InterestCategory) -> f64 {
        self.declared(category).unwrap_or(0.0)
    }

    fn slot_mut(&mut self, category: InterestCategory) -> &mut Option<f64> {
        match category {
            InterestCategory::Realistic => &mut self.realistic,
            InterestCategory::Investigative => &mut self.investigative,
            InterestCategory::Artistic => &mut self.artistic,
            InterestCategory::Social => &mut self.social,
            InterestCategory::Enterprising => &mut self.enterprising,
            InterestCategory::Conventional => &mut self.conventional,
        }
    }
}

/// A career archetype with partial weight vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub career: String,
    pub description: String,
    #[serde(default)]
    pub aptitude: AptitudeWeights,
    #[serde(default)]
    pub interest: InterestWeights,
}

/// A catalog entry ranked against one user profile. Lower distance = closer fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    #[serde(flatten)]
    pub profile: CareerProfile,
    pub distance: f64,
}

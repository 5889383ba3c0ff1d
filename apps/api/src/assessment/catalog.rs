//! Career Catalog: the read-only set of archetypes the matcher ranks against.
//!
//! Loaded once at startup, either from the built-in list or from a JSON file
//! (`CAREER_CATALOG_PATH`), and shared behind an `Arc` afterwards.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::assessment::models::{
    AptitudeCategory::{self, *},
    AptitudeWeights, CareerProfile,
    InterestCategory::{self, *},
    InterestWeights,
};
use crate::assessment::AssessmentError;

#[derive(Debug, Clone)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
}

impl CareerCatalog {
    /// The built-in fifteen archetypes.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Validates every profile: non-empty name, every declared weight finite and in [0, 1].
    pub fn from_profiles(profiles: Vec<CareerProfile>) -> Result<Self, AssessmentError> {
        if profiles.is_empty() {
            return Err(AssessmentError::EmptyCatalog);
        }

        for (position, profile) in profiles.iter().enumerate() {
            if profile.career.trim().is_empty() {
                return Err(AssessmentError::InvalidCatalog(format!(
                    "entry {position} has an empty career name"
                )));
            }

            let aptitude = AptitudeCategory::ALL
                .iter()
                .filter_map(|&c| profile.aptitude.declared(c).map(|w| (c.as_str(), w)));
            let interest = InterestCategory::ALL
                .iter()
                .filter_map(|&c| profile.interest.declared(c).map(|w| (c.as_str(), w)));

            for (dimension, weight) in aptitude.chain(interest) {
                if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                    return Err(AssessmentError::InvalidCatalog(format!(
                        "'{}' has {dimension} weight {weight}, expected 0.0 – 1.0",
                        profile.career
                    )));
                }
            }
        }

        Ok(Self { profiles })
    }

    pub fn from_json_str(json: &str) -> Result<Self, AssessmentError> {
        let profiles: Vec<CareerProfile> = serde_json::from_str(json)
            .map_err(|e| AssessmentError::InvalidCatalog(format!("malformed JSON: {e}")))?;
        Self::from_profiles(profiles)
    }

    /// Reads a catalog file at startup.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read career catalog at {}", path.display()))?;
        let catalog = Self::from_json_str(&raw)
            .with_context(|| format!("Career catalog at {} is invalid", path.display()))?;
        info!(
            "Loaded {} career profiles from {}",
            catalog.profiles().len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }
}

fn career(
    name: &str,
    description: &str,
    aptitude: &[(AptitudeCategory, f64)],
    interest: &[(InterestCategory, f64)],
) -> CareerProfile {
    CareerProfile {
        career: name.to_string(),
        description: description.to_string(),
        aptitude: AptitudeWeights::from_pairs(aptitude),
        interest: InterestWeights::from_pairs(interest),
    }
}

fn builtin_profiles() -> Vec<CareerProfile> {
    vec![
        career(
            "Software Engineer",
            "Designs, develops, and maintains software applications.",
            &[(Logical, 0.9), (Numerical, 0.7), (Spatial, 0.6), (Verbal, 0.5)],
            &[(Investigative, 0.8), (Realistic, 0.6), (Conventional, 0.5)],
        ),
        career(
            "UX/UI Designer",
            "Creates user-friendly and visually appealing digital interfaces.",
            &[(Spatial, 0.9), (Verbal, 0.7), (Logical, 0.6)],
            &[(Artistic, 0.9), (Social, 0.6), (Investigative, 0.5)],
        ),
        career(
            "Data Scientist",
            "Analyzes complex data to extract meaningful insights and predict trends.",
            &[(Numerical, 0.9), (Logical, 0.9), (Verbal, 0.6)],
            &[(Investigative, 0.9), (Conventional, 0.6)],
        ),
        career(
            "Marketing Manager",
            "Develops and executes strategies to promote products or services.",
            &[(Verbal, 0.8), (Logical, 0.7), (Numerical, 0.6)],
            &[(Enterprising, 0.9), (Social, 0.7), (Artistic, 0.5)],
        ),
        career(
            "Graphic Designer",
            "Creates visual concepts to communicate ideas that inspire, inform, or captivate consumers.",
            &[(Spatial, 0.9), (Verbal, 0.5)],
            &[(Artistic, 0.9), (Enterprising, 0.4)],
        ),
        career(
            "Financial Analyst",
            "Provides guidance to businesses and individuals making investment decisions.",
            &[(Numerical, 0.9), (Logical, 0.8), (Verbal, 0.7)],
            &[(Conventional, 0.8), (Investigative, 0.7), (Enterprising, 0.6)],
        ),
        career(
            "Doctor (Physician)",
            "Diagnoses and treats human diseases, ailments, and injuries.",
            &[(Verbal, 0.8), (Numerical, 0.7), (Logical, 0.9)],
            &[(Investigative, 0.9), (Social, 0.8), (Realistic, 0.5)],
        ),
        career(
            "Physical Therapist",
            "Helps injured or ill people improve their movement and manage their pain.",
            &[(Spatial, 0.7), (Verbal, 0.7), (Numerical, 0.6)],
            &[(Social, 0.9), (Realistic, 0.8), (Investigative, 0.6)],
        ),
        career(
            "Accountant",
            "Prepares and examines financial records, ensuring they are accurate and that taxes are paid.",
            &[(Numerical, 0.9), (Logical, 0.7), (Verbal, 0.6)],
            &[(Conventional, 0.9), (Enterprising, 0.6), (Investigative, 0.5)],
        ),
        career(
            "Architect",
            "Plans and designs buildings and other structures.",
            &[(Spatial, 0.9), (Numerical, 0.7), (Logical, 0.7)],
            &[(Artistic, 0.8), (Realistic, 0.7), (Investigative, 0.6)],
        ),
        career(
            "Teacher",
            "Educates students at various levels and in different subjects.",
            &[(Verbal, 0.9), (Logical, 0.6)],
            &[(Social, 0.9), (Artistic, 0.5)],
        ),
        career(
            "Electrician",
            "Installs, maintains, and repairs electrical power, communications, lighting, and control systems.",
            &[(Numerical, 0.7), (Spatial, 0.8), (Logical, 0.6)],
            &[(Realistic, 0.9), (Conventional, 0.6)],
        ),
        career(
            "Journalist",
            "Researches and reports on news and current events.",
            &[(Verbal, 0.9), (Logical, 0.7)],
            &[(Investigative, 0.8), (Enterprising, 0.6), (Artistic, 0.5)],
        ),
        career(
            "Lawyer",
            "Advises and represents clients in legal matters.",
            &[(Verbal, 0.9), (Logical, 0.9)],
            &[(Enterprising, 0.8), (Investigative, 0.7), (Conventional, 0.6)],
        ),
        career(
            "Paralegal",
            "Assists lawyers by investigating facts, preparing legal documents, and researching legal precedent.",
            &[(Verbal, 0.8), (Logical, 0.7)],
            &[(Conventional, 0.8), (Investigative, 0.7), (Social, 0.5)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let builtin = CareerCatalog::builtin();
        assert_eq!(builtin.profiles().len(), 15);
        let revalidated = CareerCatalog::from_profiles(builtin.profiles().to_vec()).unwrap();
        assert_eq!(revalidated.profiles().len(), 15);
    }

    #[test]
    fn test_builtin_career_names_are_unique() {
        let catalog = CareerCatalog::builtin();
        let names: HashSet<_> = catalog.profiles().iter().map(|p| &p.career).collect();
        assert_eq!(names.len(), catalog.profiles().len());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = CareerCatalog::from_json_str("[]").unwrap_err();
        assert!(matches!(err, AssessmentError::EmptyCatalog));
    }

    #[test]
    fn test_weight_above_one_rejected() {
        let json = r#"[{"career": "Pilot", "description": "Flies.", "aptitude": {"spatial": 1.4}}]"#;
        let err = CareerCatalog::from_json_str(json).unwrap_err();
        match err {
            AssessmentError::InvalidCatalog(msg) => {
                assert!(msg.contains("Pilot"));
                assert!(msg.contains("spatial"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_interest_weight_rejected() {
        let json = r#"[{"career": "Chef", "description": "Cooks.", "interest": {"artistic": -0.1}}]"#;
        assert!(CareerCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_misspelled_category_rejected() {
        for weights in [
            r#""aptitude": {"Verbal": 0.9}"#,
            r#""aptitude": {"verbel": 0.8}"#,
            r#""interest": {"artsy": 0.9}"#,
        ] {
            let json = format!(r#"[{{"career": "Writer", "description": "Writes.", {weights}}}]"#);
            match CareerCatalog::from_json_str(&json) {
                Err(AssessmentError::InvalidCatalog(msg)) => {
                    assert!(msg.contains("unknown field"), "{msg}")
                }
                other => panic!("{weights} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let json = r#"[{"career": "  ", "description": "Nameless."}]"#;
        assert!(matches!(
            CareerCatalog::from_json_str(json),
            Err(AssessmentError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            CareerCatalog::from_json_str("{not json"),
            Err(AssessmentError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_load_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"career": "Nurse", "description": "Cares for patients.", "interest": {{"social": 0.9}}}}]"#
        )
        .unwrap();

        let catalog = CareerCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.profiles().len(), 1);
        assert_eq!(catalog.profiles()[0].career, "Nurse");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CareerCatalog::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read career catalog"));
    }
}

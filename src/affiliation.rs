//! Affiliation heuristic.
//!
//! Classifies free-text author affiliations by case-insensitive substring match.

/// Substrings that mark an affiliation as academic
const ACADEMIC_MARKERS: &[&str] = &["university", "lab"];

/// Substrings that mark a non-academic affiliation as a pharma/biotech company
const COMPANY_MARKERS: &[&str] = &["pharmaceutical", "biotech"];

/// Outcome of classifying one affiliation string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationClass {
    /// University or lab. The author is left out of the report.
    Academic,
    /// Non-academic, no company marker
    Industry,
    /// Non-academic and the affiliation names a pharmaceutical/biotech company
    IndustryWithCompanyTag,
}

/// Classify an affiliation string.
///
/// Academic markers win over company markers, so "Biotech Lab" is academic.
/// An empty affiliation is non-academic.
pub fn classify_affiliation(text: &str) -> AffiliationClass {
    let lower = text.to_lowercase();

    if ACADEMIC_MARKERS.iter().any(|m| lower.contains(m)) {
        AffiliationClass::Academic
    } else if COMPANY_MARKERS.iter().any(|m| lower.contains(m)) {
        AffiliationClass::IndustryWithCompanyTag
    } else {
        AffiliationClass::Industry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic() {
        for text in [
            "Some University",
            "UNIVERSITY OF TOKYO",
            "Lawrence Berkeley National Laboratory",
            "Cold Spring Harbor Lab",
            "Biotech Lab, Boston",
            "Department of Pharmaceutical Sciences, University of Utah",
        ] {
            assert_eq!(classify_affiliation(text), AffiliationClass::Academic, "{}", text);
        }
    }

    #[test]
    fn test_company_tag() {
        for text in ["XYZ Biotech", "Acme Pharmaceuticals Inc.", "BIOTECHNE GmbH"] {
            assert_eq!(
                classify_affiliation(text),
                AffiliationClass::IndustryWithCompanyTag,
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_plain_industry() {
        assert_eq!(classify_affiliation("Google DeepMind"), AffiliationClass::Industry);
        assert_eq!(classify_affiliation(""), AffiliationClass::Industry);
        assert_eq!(classify_affiliation("Mayo Clinic"), AffiliationClass::Industry);
    }

    #[test]
    fn test_lab_matches_as_substring() {
        // "Collaborative" contains "lab"
        assert_eq!(
            classify_affiliation("Collaborative Oncology Group"),
            AffiliationClass::Academic
        );
    }
}

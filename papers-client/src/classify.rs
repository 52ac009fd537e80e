//! Keyword-based classification of author affiliations
//!
//! An affiliation counts as non-academic only when it is clearly industrial:
//! it must contain a company marker and no academic marker. Empty and
//! unrecognized affiliations are treated as academic and excluded.

/// Substrings that mark an affiliation as academic (matched case-insensitively)
pub const ACADEMIC_MARKERS: &[&str] = &[
    "university",
    "institute",
    "college",
    "school of",
    "hospital",
    "dept",
    "department",
];

/// Substrings that mark an affiliation as a company (matched case-insensitively)
pub const NON_ACADEMIC_MARKERS: &[&str] = &["inc", "ltd", "llc", "pharma", "corp", "gmbh", "biotech"];

/// Decides whether an affiliation string belongs to a non-academic organisation
///
/// # Example
///
/// ```
/// use papers_client::AffiliationClassifier;
///
/// let classifier = AffiliationClassifier::default();
/// assert!(classifier.is_non_academic("Genentech Inc, South San Francisco"));
/// assert!(!classifier.is_non_academic("Stanford University"));
/// // Academic markers win
/// assert!(!classifier.is_non_academic("University Spinoff Inc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationClassifier {
    academic_markers: Vec<String>,
    non_academic_markers: Vec<String>,
}

impl AffiliationClassifier {
    /// Classifier with explicit marker lists
    pub fn new<A, N>(academic_markers: A, non_academic_markers: N) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            academic_markers: normalize_markers(academic_markers),
            non_academic_markers: normalize_markers(non_academic_markers),
        }
    }

    /// Add markers on top of the current academic set
    pub fn with_academic_markers<I>(mut self, markers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.academic_markers.extend(normalize_markers(markers));
        self
    }

    /// Add markers on top of the current non-academic set
    pub fn with_non_academic_markers<I>(mut self, markers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.non_academic_markers.extend(normalize_markers(markers));
        self
    }

    pub fn academic_markers(&self) -> &[String] {
        &self.academic_markers
    }

    pub fn non_academic_markers(&self) -> &[String] {
        &self.non_academic_markers
    }

    /// Rules, first match wins:
    /// 1. empty affiliation → false
    /// 2. any academic marker → false
    /// 3. any non-academic marker → true
    /// 4. otherwise → false
    pub fn is_non_academic(&self, affiliation: &str) -> bool {
        let affiliation = affiliation.trim();
        if affiliation.is_empty() {
            return false;
        }

        let lower = affiliation.to_lowercase();
        if self.academic_markers.iter().any(|m| lower.contains(m.as_str())) {
            return false;
        }

        self.non_academic_markers
            .iter()
            .any(|m| lower.contains(m.as_str()))
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(ACADEMIC_MARKERS, NON_ACADEMIC_MARKERS)
    }
}

fn normalize_markers<I>(markers: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    markers
        .into_iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

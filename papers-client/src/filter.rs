use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::AffiliationClassifier;
use crate::pubmed::models::PaperRecord;

/// Separator between names (and between the parallel affiliations) in a row
pub const LIST_SEPARATOR: &str = "; ";

/// A paper reduced to the fields reported for its non-academic authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "PubMedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "PublicationDate")]
    pub publication_date: String,
    #[serde(rename = "NonAcademicAuthors")]
    pub non_academic_authors: String,
    #[serde(rename = "Affiliations")]
    pub affiliations: String,
    #[serde(rename = "CorrespondingEmail")]
    pub corresponding_email: Option<String>,
}

impl OutputRow {
    /// Column names, in output order
    pub const HEADERS: [&'static str; 6] = [
        "PubMedID",
        "Title",
        "PublicationDate",
        "NonAcademicAuthors",
        "Affiliations",
        "CorrespondingEmail",
    ];

    /// Field values in [`OutputRow::HEADERS`] order; a missing email is empty
    pub fn fields(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.affiliations.as_str(),
            self.corresponding_email.as_deref().unwrap_or(""),
        ]
    }
}

/// Project a record onto its non-academic authors
///
/// Returns `None` when no author classifies as non-academic.
pub fn project(record: &PaperRecord, classifier: &AffiliationClassifier) -> Option<OutputRow> {
    let (names, affiliations): (Vec<&str>, Vec<&str>) = record
        .authors
        .iter()
        .filter(|author| classifier.is_non_academic(&author.affiliation))
        .map(|author| (author.name.as_str(), author.affiliation.as_str()))
        .unzip();

    if names.is_empty() {
        return None;
    }

    Some(OutputRow {
        pubmed_id: record.pmid.clone(),
        title: record.title.clone(),
        publication_date: record.pub_date.clone(),
        non_academic_authors: names.join(LIST_SEPARATOR),
        affiliations: affiliations.join(LIST_SEPARATOR),
        corresponding_email: record.corresponding_email.clone(),
    })
}

/// Keep papers with at least one non-academic author, preserving order
pub fn filter_records(records: &[PaperRecord], classifier: &AffiliationClassifier) -> Vec<OutputRow> {
    let rows: Vec<OutputRow> = records
        .iter()
        .filter_map(|record| project(record, classifier))
        .collect();

    debug!(
        records = records.len(),
        kept = rows.len(),
        "Filtered papers by author affiliation"
    );
    rows
}

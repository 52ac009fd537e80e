use serde::{Deserialize, Serialize};

/// One paper as parsed from an EFetch response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title, empty when the record has none
    pub title: String,
    /// Publication date at whatever granularity PubMed provides ("2023 Mar 15", "2023")
    pub pub_date: String,
    /// Authors in listed order
    pub authors: Vec<AuthorRecord>,
    /// Contact email for the paper, taken from the first author affiliation carrying one
    pub corresponding_email: Option<String>,
}

/// An author together with the affiliation text used for classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    /// All affiliations joined with "; ", empty when none are listed
    pub affiliation: String,
    pub email: Option<String>,
}

impl AuthorRecord {
    pub fn new<N: Into<String>, A: Into<String>>(name: N, affiliation: A) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.into(),
            email: None,
        }
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }
}

//! Serde mirror of the parts of the EFetch schema this crate reads

use std::fmt;

use serde::Deserialize;

use super::extractors::{extract_email_from_text, format_author_name};
use crate::pubmed::models::{AuthorRecord, PaperRecord};

#[derive(Debug, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitation,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<Article>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PmidXml {
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(rename = "ArticleTitle")]
    article_title: Option<String>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
    #[serde(rename = "ArticleDate", default)]
    article_dates: Vec<DateParts>,
}

#[derive(Debug, Deserialize)]
struct Journal {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<DateParts>,
}

/// `PubDate` and `ArticleDate` share the Year/Month/Day layout;
/// only `PubDate` may carry a free-form `MedlineDate`.
#[derive(Debug, Deserialize)]
struct DateParts {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
    #[serde(rename = "Season")]
    season: Option<String>,
    #[serde(rename = "MedlineDate")]
    medline_date: Option<String>,
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(medline_date) = &self.medline_date {
            return write!(f, "{}", medline_date.trim());
        }

        // Season stands in for Month on quarterly issues
        let month = self.month.as_ref().or(self.season.as_ref());
        let parts: Vec<&str> = [self.year.as_ref(), month, self.day.as_ref()]
            .into_iter()
            .filter_map(|part| part.map(|p| p.trim()))
            .filter(|part| !part.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[derive(Debug, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "Initials")]
    initials: Option<String>,
    #[serde(rename = "CollectiveName")]
    collective_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Deserialize)]
struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    affiliation: Option<String>,
}

impl AuthorXml {
    fn into_author(self) -> Option<AuthorRecord> {
        let name = format_author_name(
            self.last_name.as_deref(),
            self.fore_name.as_deref(),
            self.initials.as_deref(),
            self.collective_name.as_deref(),
        )?;

        let affiliations: Vec<String> = self
            .affiliation_info
            .into_iter()
            .filter_map(|info| info.affiliation)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        let email = affiliations
            .iter()
            .find_map(|text| extract_email_from_text(text));

        Some(AuthorRecord {
            name,
            affiliation: affiliations.join("; "),
            email,
        })
    }
}

impl PubmedArticleXml {
    pub(super) fn into_record(self, pmid: String) -> PaperRecord {
        let Some(article) = self.medline_citation.article else {
            return PaperRecord {
                pmid,
                title: String::new(),
                pub_date: String::new(),
                authors: Vec::new(),
                corresponding_email: None,
            };
        };

        let title = article
            .article_title
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let pub_date = article
            .journal
            .and_then(|j| j.journal_issue)
            .and_then(|ji| ji.pub_date)
            .map(|pd| pd.to_string())
            .filter(|d| !d.is_empty())
            .or_else(|| {
                article
                    .article_dates
                    .first()
                    .map(|d| d.to_string())
                    .filter(|d| !d.is_empty())
            })
            .unwrap_or_default();

        let authors: Vec<AuthorRecord> = article
            .author_list
            .map(|list| {
                list.authors
                    .into_iter()
                    .filter_map(AuthorXml::into_author)
                    .collect()
            })
            .unwrap_or_default();

        let corresponding_email = authors.iter().find_map(|a| a.email.clone());

        PaperRecord {
            pmid,
            title,
            pub_date,
            authors,
            corresponding_email,
        }
    }
}

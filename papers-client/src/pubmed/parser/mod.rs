//! PubMed EFetch XML parser
//!
//! Turns an EFetch response into flat [`PaperRecord`]s: id, title, date and
//! the author list with affiliation text and any embedded e-mail address.
//!
//! # Module Organization
//!
//! - `preprocessing` - strips inline formatting tags before deserialization
//! - `xml_types` - serde types for the EFetch schema and conversion to records
//! - `extractors` - e-mail and author-name helpers

mod extractors;
mod preprocessing;
mod xml_types;

use quick_xml::de::from_str;
use tracing::{debug, instrument, warn};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::PaperRecord;
use preprocessing::strip_inline_html_tags;
use xml_types::PubmedArticleSet;

/// Parse every `<PubmedArticle>` in an EFetch XML document
///
/// Missing titles and dates become empty strings. Articles without a PMID
/// are skipped. Records come back in document order, which is not
/// necessarily the order the ids were requested in.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document is not well-formed or
/// does not match the EFetch schema.
///
/// # Example
///
/// ```
/// use papers_client::pubmed::parse_records;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let records = parse_records(xml)?;
/// assert_eq!(records[0].title, "Example Article");
/// # Ok::<(), papers_client::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_records(xml: &str) -> Result<Vec<PaperRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let records: Vec<PaperRecord> = article_set
        .articles
        .into_iter()
        .filter_map(|article_xml| {
            let pmid = article_xml
                .medline_citation
                .pmid
                .as_ref()
                .map(|p| p.value.trim().to_string())
                .filter(|p| !p.is_empty());

            match pmid {
                Some(pmid) => Some(article_xml.into_record(pmid)),
                None => {
                    warn!("PubmedArticle without PMID, skipping");
                    None
                }
            }
        })
        .collect();

    debug!(records = records.len(), "Parsed EFetch document");
    Ok(records)
}

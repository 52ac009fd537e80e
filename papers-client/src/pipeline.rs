//! Search → fetch → parse → classify → project, in a single sequential pass

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::classify::AffiliationClassifier;
use crate::error::{PubMedError, Result};
use crate::filter::{OutputRow, filter_records};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::parser::parse_records;
use crate::source::PaperSource;

/// NCBI recommends at most 200 ids per EFetch request
pub const FETCH_BATCH_SIZE: usize = 200;

/// Default number of search results to process
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Search and fetch, returning records in search order
///
/// Ids the fetch step did not return produce no record.
#[instrument(skip(source), fields(query = %query))]
pub async fn collect_records<S>(
    source: &S,
    query: &str,
    max_results: usize,
) -> Result<Vec<PaperRecord>>
where
    S: PaperSource + ?Sized,
{
    if query.trim().is_empty() {
        return Err(PubMedError::InvalidQuery(
            "search query must not be empty".to_string(),
        ));
    }

    let ids = source.search(query, max_results).await?;
    if ids.is_empty() {
        info!("No results found for query");
        return Ok(Vec::new());
    }
    debug!(ids = ids.len(), "Found paper IDs");

    let mut by_id: HashMap<String, PaperRecord> = HashMap::with_capacity(ids.len());

    for batch in ids.chunks(FETCH_BATCH_SIZE) {
        let xml = source.fetch(batch).await.map_err(|e| e.in_batch(batch))?;
        if xml.trim().is_empty() {
            warn!(batch_size = batch.len(), "Empty EFetch response, no records in batch");
            continue;
        }

        let records = parse_records(&xml).map_err(|e| match e {
            PubMedError::XmlError(message) => {
                PubMedError::XmlError(format!("{} (ids: {})", message, batch.join(",")))
            }
            other => other,
        })?;

        debug!(
            requested = batch.len(),
            parsed = records.len(),
            "Batch fetched and parsed"
        );

        for record in records {
            by_id.entry(record.pmid.clone()).or_insert(record);
        }
    }

    let records: Vec<PaperRecord> = ids.iter().filter_map(|id| by_id.remove(id)).collect();

    if records.len() < ids.len() {
        debug!(
            missing = ids.len() - records.len(),
            "Some ids returned no record"
        );
    }

    Ok(records)
}

/// Run the whole pipeline and return the rows to emit
///
/// # Example
///
/// ```no_run
/// use papers_client::{AffiliationClassifier, ClientConfig, PubMedClient, collect_papers};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::with_config(ClientConfig::new())?;
///     let classifier = AffiliationClassifier::default();
///     let rows = collect_papers(&client, &classifier, "cancer immunotherapy", 50).await?;
///     for row in rows {
///         println!("{}: {}", row.pubmed_id, row.non_academic_authors);
///     }
///     Ok(())
/// }
/// ```
pub async fn collect_papers<S>(
    source: &S,
    classifier: &AffiliationClassifier,
    query: &str,
    max_results: usize,
) -> Result<Vec<OutputRow>>
where
    S: PaperSource + ?Sized,
{
    let records = collect_records(source, query, max_results).await?;
    let rows = filter_records(&records, classifier);
    info!(
        papers = records.len(),
        matching = rows.len(),
        "Found papers with non-academic authors"
    );
    Ok(rows)
}

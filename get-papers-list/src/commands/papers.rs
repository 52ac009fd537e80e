use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use papers_client::{AffiliationClassifier, ConsoleFormat, Sink, collect_papers};
use tracing::{debug, error};

use super::create_pubmed_client;

#[derive(Args, Debug)]
pub struct Papers {
    /// PubMed search query (full PubMed syntax supported)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Save results to a CSV file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Maximum number of search results to process
    #[arg(short = 'n', long, default_value = "100")]
    pub max_results: usize,

    /// Console output format when no file is given
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        default_value = "30",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Extra substring marking an affiliation as academic (repeatable)
    #[arg(long = "academic-marker", value_name = "TEXT")]
    pub academic_markers: Vec<String>,

    /// Extra substring marking an affiliation as a company (repeatable)
    #[arg(long = "company-marker", value_name = "TEXT")]
    pub company_markers: Vec<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl From<OutputFormat> for ConsoleFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ConsoleFormat::Table,
            OutputFormat::Csv => ConsoleFormat::Csv,
        }
    }
}

impl Papers {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
    ) -> Result<()> {
        let client = create_pubmed_client(
            api_key,
            email,
            tool,
            Duration::from_secs(self.timeout),
        )?;

        let classifier = self.classifier();
        debug!(
            academic = classifier.academic_markers().len(),
            company = classifier.non_academic_markers().len(),
            "Affiliation markers loaded"
        );

        let rows = collect_papers(&client, &classifier, &self.query, self.max_results)
            .await
            .inspect_err(|e| error!(category = e.category(), "Run failed"))
            .with_context(|| format!("failed to collect papers for query '{}'", self.query))?;

        let sink = self.sink();
        sink.write(&rows)
            .inspect_err(|e| error!(category = e.category(), "Writing results failed"))
            .with_context(|| match &self.file {
                Some(path) => format!("failed to write results to {}", path.display()),
                None => "failed to print results".to_string(),
            })?;

        Ok(())
    }

    fn classifier(&self) -> AffiliationClassifier {
        AffiliationClassifier::default()
            .with_academic_markers(&self.academic_markers)
            .with_non_academic_markers(&self.company_markers)
    }

    fn sink(&self) -> Sink {
        match &self.file {
            Some(path) => Sink::CsvFile(path.clone()),
            None => Sink::Console(self.format.into()),
        }
    }
}

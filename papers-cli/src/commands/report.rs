use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use papers_client::{LiteratureSource, RunOutcome, pipeline};
use papers_report::{render_console, write_csv_file};
use tracing::debug;

use super::create_pubmed_client;

#[derive(Args, Debug)]
pub struct Report {
    /// PubMed search query (full PubMed syntax)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of papers to fetch
    #[arg(
        short,
        long,
        alias = "max_result",
        default_value = "5",
        value_parser = parse_max_results
    )]
    max_results: usize,

    /// CSV file to write the results to
    #[arg(short, long, default_value = "pubmed_results.csv")]
    filename: PathBuf,
}

impl Report {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
    ) -> Result<()> {
        let client = create_pubmed_client(api_key, email, tool)?;
        self.execute(&client).await
    }

    /// Run the search against `source` and present the outcome
    pub async fn execute<S>(&self, source: &S) -> Result<()>
    where
        S: LiteratureSource + ?Sized,
    {
        println!("Searching PubMed for: {}", self.query);

        let outcome = pipeline::run(source, &self.query, self.max_results).await?;

        match outcome {
            RunOutcome::NoResults => {
                println!("No papers found");
            }
            RunOutcome::NoQualifyingArticles { pmids } => {
                println!("Found PMIDs: {}", pmids.join(", "));
                println!("No non-academic authors found");
            }
            RunOutcome::Report { pmids, records } => {
                println!("Found PMIDs: {}", pmids.join(", "));
                debug!(count = records.len(), "Papers with non-academic authors");

                println!();
                print!("{}", render_console(&records));

                write_csv_file(&records, &self.filename)?;
                println!();
                println!("Results saved to {}", self.filename.display());
            }
        }

        Ok(())
    }
}

fn parse_max_results(value: &str) -> Result<usize, String> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a positive integer"))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

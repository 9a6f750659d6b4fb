//! Pipeline Driver — search, extract and pace, one organization at a time.
//!
//! Flow per organization: search → analyze → collect → sleep.
//! After the loop: CSV snapshot → row echo → summary.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::goals::extractor::GoalExtractor;
use crate::llm_client::LlmClient;
use crate::models::goal::OrganizationGoal;
use crate::pacing::{Sleeper, TokioSleeper, ORGANIZATION_DELAY};
use crate::report::{render_rows, write_csv_file, Summary};
use crate::search_client::{SearchClient, WebSearch};

/// Analyzed when no organizations are given on the command line.
pub const DEFAULT_ORGANIZATIONS: &[&str] = &[
    "Consolidated Edison Company of New York",
    "Veolia Energy NA - Philadelphia",
    "Columbia Energy Center",
    "Downtown Milwaukee",
    "University of Wisconsin - Whitewater",
    "University of Delaware",
];

pub struct Pipeline {
    search: Arc<dyn WebSearch>,
    extractor: GoalExtractor,
    sleeper: Arc<dyn Sleeper>,
}

impl Pipeline {
    pub fn new(
        search: Arc<dyn WebSearch>,
        extractor: GoalExtractor,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            search,
            extractor,
            sleeper,
        }
    }

    /// Wires the Brave and Anthropic clients from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
        let search = SearchClient::new(config.brave_api_key.clone(), sleeper.clone())?;
        let llm = LlmClient::new(config.anthropic_api_key.clone())?;
        info!("LLM client initialized (model: {})", crate::llm_client::MODEL);

        Ok(Self::new(
            Arc::new(search),
            GoalExtractor::new(Arc::new(llm)),
            sleeper,
        ))
    }

    /// Processes every organization in order. One organization's failure only
    /// degrades its own record.
    pub async fn analyze_all(&self, organizations: &[String]) -> Vec<OrganizationGoal> {
        let mut goals = Vec::with_capacity(organizations.len());
        for org in organizations {
            println!("\nAnalyzing {org}...");
            info!("Analyzing {org}");

            let results = self.search.search(org).await;
            let goal = self.extractor.analyze(org, &results).await;
            info!("Result for {org}: {goal:?}");
            goals.push(goal);

            self.sleeper.sleep(ORGANIZATION_DELAY).await;
        }
        goals
    }

    /// Full run: analyze, write the CSV, print the echo and summary.
    pub async fn run(&self, organizations: &[String], output: &Path) -> Result<Summary, AppError> {
        let goals = self.analyze_all(organizations).await;

        write_csv_file(output, &goals)?;
        println!("\nCSV saved to {}\n", output.display());
        info!("Wrote {} rows to {}", goals.len(), output.display());

        print!("{}", render_rows(&goals));
        let summary = Summary::from_goals(&goals);
        println!("\n{summary}");

        Ok(summary)
    }
}

//! Goal Extractor — turns one organization's search hits into an `OrganizationGoal`.
//!
//! Flow: build prompt → single model call → pull the JSON object out of the
//! free-form reply → fallbacks for whatever is still missing.
//!
//! A failed call or an unparseable reply is logged and treated as an empty
//! answer. Nothing here returns an error to the pipeline.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{debug, error, warn};

use crate::goals::fallback::apply_fallbacks;
use crate::goals::prompts::build_goal_prompt;
use crate::llm_client::CompletionModel;
use crate::models::goal::{GoalAnswer, OrganizationGoal};
use crate::models::search::SearchResult;

fn json_span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)(\{.*\})").expect("json span regex must compile"))
}

/// Parses the outermost `{ ... }` span of the reply (first `{` to last `}`).
/// Returns an empty answer when there is no span or it is not a JSON object.
pub fn parse_answer(org_name: &str, text: &str) -> GoalAnswer {
    let Some(span) = json_span_re().captures(text).map(|caps| caps[1].to_string()) else {
        error!("No JSON candidate found in model response for {org_name}.");
        return GoalAnswer::default();
    };

    match serde_json::from_str::<GoalAnswer>(&span) {
        Ok(answer) => {
            debug!("Parsed answer for {org_name}: {answer:?}");
            answer
        }
        Err(e) => {
            error!("Error decoding JSON from model response for {org_name}: {e}");
            GoalAnswer::default()
        }
    }
}

pub struct GoalExtractor {
    model: Arc<dyn CompletionModel>,
}

impl GoalExtractor {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn analyze(&self, org_name: &str, results: &[SearchResult]) -> OrganizationGoal {
        if results.is_empty() {
            warn!("No search results for {org_name}; skipping model call.");
            return OrganizationGoal::not_found(org_name);
        }

        let prompt = build_goal_prompt(org_name, results);
        debug!("Prompt for {org_name}:\n{prompt}");

        let answer = match self.model.complete(&prompt).await {
            Ok(text) => {
                debug!("Model response text for {org_name}:\n{text}");
                parse_answer(org_name, &text)
            }
            Err(e) => {
                error!("Error in model call for {org_name}: {e}");
                GoalAnswer::default()
            }
        };

        apply_fallbacks(org_name, answer, results).into_goal(org_name)
    }
}

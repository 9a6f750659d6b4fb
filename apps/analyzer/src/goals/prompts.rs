// Prompt constants for goal extraction.

use crate::models::search::SearchResult;

/// Goal prompt template. Replace `{org_name}` and `{context}` before sending.
pub const GOAL_PROMPT_TEMPLATE: &str = "Based on these search results, determine the following for {org_name} using only information from the organization's official website or its official press releases (do not use third-party sites):
1. Does {org_name} have a stated decarbonization goal? (Answer Yes, No, or Not Found)
2. If yes, what is their target date?
3. What is the source URL for this information?
4. In one to two sentences, provide a short description summarizing the organization's decarbonization goal, mission, or strategy.

Search results:
{context}
Please provide the answers in JSON format with keys: has_goal, target_date, source_url, description";

/// Renders the search hits as the plain-text block embedded in the prompt.
pub fn build_context(org_name: &str, results: &[SearchResult]) -> String {
    let mut context = format!("Search results for {org_name}:\n");
    for result in results {
        context.push_str(&format!("Title: {}\n", result.title));
        context.push_str(&format!("Description: {}\n", result.description));
        context.push_str(&format!("URL: {}\n\n", result.url));
    }
    context
}

pub fn build_goal_prompt(org_name: &str, results: &[SearchResult]) -> String {
    GOAL_PROMPT_TEMPLATE
        .replace("{org_name}", org_name)
        .replace("{context}", &build_context(org_name, results))
}

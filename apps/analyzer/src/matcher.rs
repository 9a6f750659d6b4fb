//! Text Matcher — decides whether a search hit plausibly belongs to an organization.
//!
//! Both checks tokenize the organization name the same way: lowercase, split on
//! whitespace, drop filler words. A hit matches when any remaining token is a
//! substring of the text being checked.

use url::Url;

use crate::models::search::SearchResult;

const STOPWORDS: &[&str] = &["the", "of", "and", "company", "inc", "co", "-"];

fn org_tokens(org_name: &str) -> Vec<String> {
    org_name
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn any_token_in(tokens: &[String], haystacks: &[&str]) -> bool {
    // A name made only of stopwords never matches anything.
    if tokens.is_empty() {
        return false;
    }
    tokens
        .iter()
        .any(|token| haystacks.iter().any(|h| h.contains(token.as_str())))
}

/// True if any organization token appears in the result's title or description.
pub fn organization_matches(org_name: &str, result: &SearchResult) -> bool {
    let title = result.title.to_lowercase();
    let description = result.description.to_lowercase();
    any_token_in(&org_tokens(org_name), &[title.as_str(), description.as_str()])
}

/// True if any organization token appears in the URL's hostname.
/// Unparseable URLs have an empty hostname; punycode labels are compared in Unicode form.
pub fn url_belongs_to_org(org_name: &str, url: &str) -> bool {
    let hostname = hostname(url);
    any_token_in(&org_tokens(org_name), &[hostname.as_str()])
}

/// Both checks together: the hit is about the organization and hosted by it.
pub fn is_official_source(org_name: &str, result: &SearchResult) -> bool {
    organization_matches(org_name, result) && url_belongs_to_org(org_name, &result.url)
}

fn hostname(url: &str) -> String {
    let Some(host) = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
    else {
        return String::new();
    };
    // The url crate stores IDNs as punycode; labels that fail to decode stay as given.
    let (unicode, _) = idna::domain_to_unicode(&host);
    unicode
}

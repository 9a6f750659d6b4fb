use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const NOT_FOUND: &str = "Not Found";

/// One row of the final report. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationGoal {
    pub organization: String,
    /// "Yes", "No", "Not Found", or whatever the model answered verbatim.
    pub has_goal: String,
    pub target_date: Option<String>,
    pub source_url: Option<String>,
    pub description: String,
}

impl OrganizationGoal {
    /// The record produced when there is no evidence at all.
    pub fn not_found(organization: &str) -> Self {
        Self {
            organization: organization.to_string(),
            has_goal: NOT_FOUND.to_string(),
            target_date: None,
            source_url: None,
            description: String::new(),
        }
    }

    pub fn has_goal(&self) -> bool {
        self.has_goal.eq_ignore_ascii_case("yes")
    }
}

/// The structured answer pulled out of the model response. Every field is optional;
/// `None` means absent, null, or empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoalAnswer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub has_goal: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl GoalAnswer {
    pub fn into_goal(self, organization: &str) -> OrganizationGoal {
        OrganizationGoal {
            organization: organization.to_string(),
            has_goal: self.has_goal.unwrap_or_else(|| NOT_FOUND.to_string()),
            target_date: self.target_date,
            source_url: self.source_url,
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Accepts strings, numbers and booleans (models sometimes answer `"target_date": 2035`).
/// Null, empty strings, arrays and objects all decode to `None`; whitespace is kept as given.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

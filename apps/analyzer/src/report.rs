//! Report output: the CSV snapshot, the plain-text row echo, and the summary block.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::errors::AppError;
use crate::models::goal::OrganizationGoal;

pub const CSV_HEADER: &str = "Organization,Decarbonization Goal?,Target Date,Source URL,Description";

/// Writes one row per organization, in order. Absent optional fields are empty cells.
pub fn write_csv<W: Write>(writer: W, goals: &[OrganizationGoal]) -> Result<(), AppError> {
    let mut csv = csv::Writer::from_writer(writer);
    if goals.is_empty() {
        // serde only emits the header alongside the first record.
        csv.write_record([
            "organization",
            "has_goal",
            "target_date",
            "source_url",
            "description",
        ])?;
    }
    for goal in goals {
        csv.serialize(goal)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, goals: &[OrganizationGoal]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, goals)
}

/// The plain-text echo printed after the CSV is saved. Cells are not quoted.
pub fn render_rows(goals: &[OrganizationGoal]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for goal in goals {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            goal.organization,
            goal.has_goal,
            goal.target_date.as_deref().unwrap_or(""),
            goal.source_url.as_deref().unwrap_or(""),
            goal.description,
        ));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub with_goals: usize,
}

impl Summary {
    pub fn from_goals(goals: &[OrganizationGoal]) -> Self {
        Self {
            total: goals.len(),
            with_goals: goals.iter().filter(|g| g.has_goal()).count(),
        }
    }

    /// Share of organizations with a goal, 0.0 for an empty run.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.with_goals as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decarbonization Goals Analysis Summary")?;
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "Total Organizations: {}", self.total)?;
        write!(
            f,
            "Organizations with Goals: {} ({:.1}%)",
            self.with_goals,
            self.percentage()
        )
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::pipeline::DEFAULT_ORGANIZATIONS;

#[derive(Parser, Debug)]
#[command(name = "decarb-analyzer")]
#[command(about = "Checks whether organizations publish decarbonization goals")]
#[command(version)]
pub struct Args {
    /// Organization names to analyze (defaults to the built-in list)
    pub organizations: Vec<String>,

    /// File with one organization per line; blank lines and `#` comments are skipped
    #[arg(long)]
    pub orgs_file: Option<PathBuf>,

    /// Where to write the CSV report
    #[arg(short, long, default_value = "decarbonization_goals.csv")]
    pub output: PathBuf,

    /// Debug log file, truncated at startup
    #[arg(long, default_value = "cons_debug.txt")]
    pub log_file: PathBuf,
}

impl Args {
    /// Organizations from the command line, then the file, else the default list.
    pub fn organizations(&self) -> Result<Vec<String>> {
        let mut orgs = self.organizations.clone();
        if let Some(path) = &self.orgs_file {
            orgs.extend(read_orgs_file(path)?);
        }
        if orgs.is_empty() {
            orgs = DEFAULT_ORGANIZATIONS.iter().map(|s| s.to_string()).collect();
        }
        Ok(orgs)
    }
}

fn read_orgs_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read organizations file '{}'", path.display()))?;
    Ok(parse_orgs(&contents))
}

fn parse_orgs(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["decarb-analyzer"]);
        assert_eq!(args.output, PathBuf::from("decarbonization_goals.csv"));
        assert_eq!(args.log_file, PathBuf::from("cons_debug.txt"));
        assert_eq!(args.organizations().unwrap().len(), DEFAULT_ORGANIZATIONS.len());
    }

    #[test]
    fn test_positional_organizations_replace_defaults() {
        let args = Args::parse_from(["decarb-analyzer", "Acme Corp", "-o", "out.csv", "Globex"]);
        assert_eq!(args.organizations().unwrap(), vec!["Acme Corp", "Globex"]);
        assert_eq!(args.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_orgs_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orgs.txt");
        std::fs::write(&path, "# utilities\nAcme Corp\n\n  Globex  \n").unwrap();

        let args = Args::parse_from([
            "decarb-analyzer",
            "Initech",
            "--orgs-file",
            path.to_str().unwrap(),
        ]);
        assert_eq!(
            args.organizations().unwrap(),
            vec!["Initech", "Acme Corp", "Globex"]
        );
    }

    #[test]
    fn test_missing_orgs_file_is_an_error() {
        let args = Args::parse_from(["decarb-analyzer", "--orgs-file", "/nonexistent/orgs.txt"]);
        let err = args.organizations().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/orgs.txt"));
    }
}

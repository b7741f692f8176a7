use crate::domain::model::{MatchHistory, Person, Team};
use crate::utils::error::{Result, RouletteError};
use regex::Regex;

pub const DEFAULT_HISTORY_PREFIX: &str = "assigned_pairs_run_";
pub const DEFAULT_ROSTER_FILE: &str = "people.txt";

/// One name per line; surrounding whitespace and blank lines are dropped.
pub fn parse_roster(content: &str) -> Vec<Person> {
    content
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Reads a previous run's output (`Group,People` header, then
/// `Group <k>,<name>,<name>[,<name>]`) into the pairs it contains.
///
/// The first column is ignored. Lines without names, or that fail to
/// parse, contribute nothing.
pub fn parse_history_csv(content: &str) -> MatchHistory {
    let mut history = MatchHistory::new();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    for record in reader.records() {
        match record {
            Ok(record) => {
                let people: Vec<Person> = record
                    .iter()
                    .skip(1)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect();
                history.record_group(&people);
            }
            Err(e) => tracing::debug!("Skipping unreadable history line: {}", e),
        }
    }

    history
}

pub fn render_teams_csv(teams: &[Team]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["Group", "People"])?;
    for (index, team) in teams.iter().enumerate() {
        let mut row = Vec::with_capacity(team.len() + 1);
        row.push(format!("Group {}", index + 1));
        row.extend(team.members().iter().cloned());
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RouletteError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RouletteError::ProcessingError {
        message: format!("Rendered CSV is not valid UTF-8: {}", e),
    })
}

/// Recognises `<prefix><N>.csv` run files.
#[derive(Debug, Clone)]
pub struct RunFiles {
    prefix: String,
    pattern: Regex,
}

impl RunFiles {
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^{}(\d+)\.csv$", regex::escape(prefix))).map_err(
            |e| RouletteError::ConfigError {
                message: format!("Invalid history prefix '{}': {}", prefix, e),
            },
        )?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// Run number of a file name, or `None` if it is not a run file.
    pub fn run_number_of(&self, file_name: &str) -> Option<u32> {
        let caps = self.pattern.captures(file_name)?;
        caps[1].parse::<u32>().ok().filter(|n| *n > 0)
    }

    /// Run files among `file_names`, newest run first.
    pub fn history_files(&self, file_names: &[String]) -> Vec<String> {
        let mut runs: Vec<(u32, &String)> = file_names
            .iter()
            .filter_map(|name| self.run_number_of(name).map(|n| (n, name)))
            .collect();
        runs.sort_by(|a, b| b.0.cmp(&a.0));
        runs.into_iter().map(|(_, name)| name.clone()).collect()
    }

    /// Highest existing run number plus one; gaps are not filled.
    pub fn next_run_number(&self, file_names: &[String]) -> Result<u32> {
        let Some(latest) = file_names.iter().filter_map(|name| self.run_number_of(name)).max() else {
            return Ok(1);
        };

        latest
            .checked_add(1)
            .ok_or_else(|| RouletteError::ProcessingError {
                message: format!(
                    "Run number {} is the largest supported; no run can follow {}",
                    latest,
                    self.file_name(latest)
                ),
            })
    }

    pub fn file_name(&self, run_number: u32) -> String {
        format!("{}{}.csv", self.prefix, run_number)
    }
}

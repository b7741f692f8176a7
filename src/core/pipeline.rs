use crate::core::matching::PairingEngine;
use crate::core::records::{parse_history_csv, parse_roster, render_teams_csv, RunFiles};
use crate::core::shuffle::Shuffler;
use crate::core::{ConfigProvider, MatchHistory, Person, Pipeline, RunInput, RunResult, Storage};
use crate::utils::error::{Result, RouletteError};
use crate::utils::validation::validate_roster;
use std::path::Path;

/// Reads the roster and every previous run file from storage, pairs the
/// roster, and writes the teams as the next run file.
pub struct CsvRoulettePipeline<S: Storage, C: ConfigProvider, X: Shuffler> {
    storage: S,
    config: C,
    engine: PairingEngine<X>,
    run_files: RunFiles,
}

impl<S: Storage, C: ConfigProvider, X: Shuffler> CsvRoulettePipeline<S, C, X> {
    pub fn new(storage: S, config: C, shuffler: X) -> Result<Self> {
        let run_files = RunFiles::new(config.history_prefix())?;
        Ok(Self {
            storage,
            config,
            engine: PairingEngine::new(shuffler),
            run_files,
        })
    }

    async fn read_roster(&self) -> Result<Vec<Person>> {
        let roster_file = self.config.roster_file();
        let data = self.storage.read_file(roster_file).await.map_err(|e| {
            tracing::error!("Error reading roster file {}: {}", roster_file, e);
            e
        })?;

        let content = String::from_utf8(data).map_err(|e| RouletteError::ProcessingError {
            message: format!("Roster file {} is not valid UTF-8: {}", roster_file, e),
        })?;
        Ok(parse_roster(&content))
    }

    /// Union of the pairs in all run files, and how many files were read.
    pub async fn read_history(&self) -> Result<(MatchHistory, usize)> {
        let files = self.storage.list_files().await?;
        let history_files = self.run_files.history_files(&files);

        let mut history = MatchHistory::new();
        for file in &history_files {
            let data = self.storage.read_file(file).await?;
            let pairs = parse_history_csv(&String::from_utf8_lossy(&data));
            tracing::debug!("Loaded {} pairs from {}", pairs.len(), file);
            history.merge(pairs);
        }

        Ok((history, history_files.len()))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, X: Shuffler> Pipeline for CsvRoulettePipeline<S, C, X> {
    async fn extract(&self) -> Result<RunInput> {
        let roster = self.read_roster().await?;
        validate_roster(&roster)?;
        if roster.is_empty() {
            tracing::warn!("Roster is empty, the run file will only hold the header");
        } else {
            tracing::debug!("Roster: {}", roster.join(", "));
        }

        let (history, history_files) = self.read_history().await?;

        Ok(RunInput {
            roster,
            history,
            history_files,
        })
    }

    async fn transform(&mut self, input: RunInput) -> Result<RunResult> {
        let RunInput {
            roster,
            mut history,
            ..
        } = input;

        let teams = self.engine.assign(&roster, &mut history);
        let csv_output = render_teams_csv(&teams)?;

        Ok(RunResult {
            teams,
            history,
            csv_output,
        })
    }

    async fn load(&self, result: RunResult) -> Result<String> {
        let files = self.storage.list_files().await?;
        let run_number = self.run_files.next_run_number(&files)?;
        let file_name = self.run_files.file_name(run_number);

        tracing::debug!(
            "Writing {} teams ({} bytes) to {}",
            result.teams.len(),
            result.csv_output.len(),
            file_name
        );
        self.storage
            .write_file(&file_name, result.csv_output.as_bytes())
            .await?;

        Ok(Path::new(self.config.artifacts_dir())
            .join(&file_name)
            .display()
            .to_string())
    }
}

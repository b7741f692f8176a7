use crate::core::{Pipeline, RunResult, Team};
use crate::utils::error::Result;

/// What one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub teams: Vec<Team>,
    pub history_files: usize,
    /// `None` for a dry run.
    pub output_path: Option<String>,
}

pub struct RouletteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RouletteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Pairs the roster and writes the next run file.
    pub async fn run(&mut self) -> Result<RunReport> {
        let mut report = self.pair().await?;

        tracing::info!("Loading teams...");
        let output_path = self.pipeline.load(report.result).await?;
        tracing::info!("Teams assigned and written to {}", output_path);

        report.summary.output_path = Some(output_path);
        Ok(report.summary)
    }

    /// Pairs the roster without writing anything.
    pub async fn preview(&mut self) -> Result<RunReport> {
        Ok(self.pair().await?.summary)
    }

    async fn pair(&mut self) -> Result<PairedRun> {
        tracing::info!("Reading roster and history...");
        let input = self.pipeline.extract().await?;
        let history_files = input.history_files;
        tracing::info!(
            "Read {} people and {} previous pairs from {} run files",
            input.roster.len(),
            input.history.len(),
            history_files
        );

        let result = self.pipeline.transform(input).await?;
        tracing::info!("Formed {} teams", result.teams.len());

        Ok(PairedRun {
            summary: RunReport {
                teams: result.teams.clone(),
                history_files,
                output_path: None,
            },
            result,
        })
    }
}

struct PairedRun {
    summary: RunReport,
    result: RunResult,
}

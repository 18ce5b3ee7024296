//! Recommend command implementation for the Deadzone CLI.

use std::fs::File;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use deadzone_core::{
    Remedy, RemedyCatalog, RemedyDetails, RemedyScorer, ScoreBoard, SiteProfile, WeightTable,
};
use deadzone_scorer::WeightedScorer;

use crate::{
    ARG_RECOMMEND_CATALOG, ARG_RECOMMEND_PROFILE, ARG_RECOMMEND_WEIGHTS, CliError,
    ENV_RECOMMEND_PROFILE,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one site's observed features against a weight table \
                 and report the winning remedy. The profile is a JSON object \
                 of feature names to values (number, boolean, or \
                 low/medium/high label). Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Recommend a remedy for one site profile"
)]
#[ortho_config(prefix = "DEADZONE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON site profile of feature observations.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Override the canonical weight table with a JSON file.
    #[arg(long = ARG_RECOMMEND_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Decorate the winner with metadata from a JSON remedy catalog.
    #[arg(long = ARG_RECOMMEND_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON site profile.
    pub(crate) profile: Utf8PathBuf,
    /// Optional path to a JSON weight table.
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Optional path to a JSON remedy catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.profile, ARG_RECOMMEND_PROFILE)?;
        if let Some(path) = &self.weights {
            Self::require_existing(path, ARG_RECOMMEND_WEIGHTS)?;
        }
        if let Some(path) = &self.catalog {
            Self::require_existing(path, ARG_RECOMMEND_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        if path.as_std_path().is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_PROFILE,
            env: ENV_RECOMMEND_PROFILE,
        })?;
        Ok(Self {
            profile,
            weights: args.weights,
            catalog: args.catalog,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let profile: SiteProfile = load_json(&config.profile)?;
    let table = match &config.weights {
        Some(path) => load_json(path)?,
        None => WeightTable::default(),
    };
    let catalog: Option<RemedyCatalog> = match &config.catalog {
        Some(path) => Some(load_json(path)?),
        None => None,
    };

    let scorer = WeightedScorer::new(table)?;
    info!(
        "scoring {} observations across {} remedies",
        profile.len(),
        scorer.universe().len(),
    );
    let board = scorer.score(&profile);
    let winner = board.leader().ok_or_else(|| {
        CliError::Engine(deadzone_scorer::WeightedScorerError::EmptyRemedyUniverse)
    })?;

    let details = catalog.as_ref().and_then(|entries| entries.details(winner));
    write_report(writer, winner, &board, details)
}

/// Loads a JSON-encoded value from disk.
fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = File::open(path.as_std_path()).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    writer: &mut dyn Write,
    winner: Remedy,
    board: &ScoreBoard,
    details: Option<&RemedyDetails>,
) -> Result<(), CliError> {
    let mut emit = |line: String| -> Result<(), CliError> {
        writeln!(writer, "{line}").map_err(|source| CliError::WriteOutput { source })
    };

    emit(format!("Proposed remedy: {winner}"))?;
    emit(String::new())?;
    emit("Scores:".to_owned())?;
    for (remedy, score) in board.iter() {
        emit(format!("  {:<20} {score:>7.2}", remedy.as_str()))?;
    }
    if let Some(entry) = details {
        emit(String::new())?;
        emit(entry.description.clone())?;
        emit(format!("Cost: ${}", entry.cost))?;
        for (benefit, rating) in &entry.benefits {
            let filled = usize::from(rating.stars());
            let stars = "★".repeat(filled) + &"☆".repeat(5 - filled);
            emit(format!("  {benefit}: {stars}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
            .unwrap_or_else(|path| panic!("non-utf8 temp path {}", path.display()));
        std::fs::write(path.as_std_path(), contents)
            .unwrap_or_else(|err| panic!("write {name}: {err}"));
        path
    }

    fn run_to_string(config: &RecommendConfig) -> String {
        let mut output = Vec::new();
        execute_recommend(config, &mut output)
            .unwrap_or_else(|err| panic!("recommendation should succeed: {err}"));
        String::from_utf8(output).unwrap_or_else(|err| panic!("utf8 output: {err}"))
    }

    #[rstest]
    fn recommends_from_a_profile_with_default_weights() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let profile = write_file(
            &dir,
            "site.json",
            r#"{"flood_risk": true, "proximity_to_water": "high"}"#,
        );
        let config = RecommendConfig {
            profile,
            weights: None,
            catalog: None,
        };

        let report = run_to_string(&config);

        assert!(report.starts_with("Proposed remedy: Stormwater"));
        assert!(report.contains("Resilience Plans"));
    }

    #[rstest]
    fn honours_an_explicit_weight_table() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let profile = write_file(&dir, "site.json", r#"{"air_quality": "low"}"#);
        let weights = write_file(
            &dir,
            "weights.json",
            r#"{"air_quality": {"Urban Forestry": 3.0, "Park": -1.0}}"#,
        );
        let config = RecommendConfig {
            profile,
            weights: Some(weights),
            catalog: None,
        };

        let report = run_to_string(&config);

        // Low air quality negates both weights; Park's -1 becomes +1.
        assert!(report.starts_with("Proposed remedy: Park"));
    }

    #[rstest]
    fn decorates_the_winner_with_catalog_details() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let profile = write_file(&dir, "site.json", r#"{"flood_risk": true}"#);
        let catalog = write_file(
            &dir,
            "catalog.json",
            r#"{"Stormwater": {
                "description": "Capture and drain runoff",
                "cost": 500000,
                "benefits": {"Flood Mitigation": 5}
            }}"#,
        );
        let config = RecommendConfig {
            profile,
            weights: None,
            catalog: Some(catalog),
        };

        let report = run_to_string(&config);

        assert!(report.contains("Capture and drain runoff"));
        assert!(report.contains("Cost: $500000"));
        assert!(report.contains("Flood Mitigation: ★★★★★"));
    }

    #[rstest]
    fn missing_profile_path_is_reported() {
        let config = RecommendConfig {
            profile: Utf8PathBuf::from("does-not-exist.json"),
            weights: None,
            catalog: None,
        };

        let err = config
            .validate_sources()
            .expect_err("validation should fail");

        assert!(matches!(err, CliError::MissingSourceFile { field, .. } if field == "profile"));
    }

    #[rstest]
    fn empty_weight_table_is_a_fatal_engine_error() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let profile = write_file(&dir, "site.json", r"{}");
        let weights = write_file(&dir, "weights.json", r"{}");
        let config = RecommendConfig {
            profile,
            weights: Some(weights),
            catalog: None,
        };

        let mut output = Vec::new();
        let err = execute_recommend(&config, &mut output).expect_err("engine should reject");

        assert!(matches!(err, CliError::Engine(_)));
    }

    #[rstest]
    fn malformed_profile_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let profile = write_file(&dir, "site.json", r#"{"flood_risk": [1, 2]}"#);
        let config = RecommendConfig {
            profile,
            weights: None,
            catalog: None,
        };

        let mut output = Vec::new();
        let err = execute_recommend(&config, &mut output).expect_err("parse should fail");

        assert!(matches!(err, CliError::ParseInput { .. }));
    }
}

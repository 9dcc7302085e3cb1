//! Snapshot acquisition: local files first, HTTP second.
//!
//! Each dataset is a single JSON document served statically next to the
//! original pages. Resolution order:
//!
//! 1. an explicit `--input` path
//! 2. the default snapshot filename in the working directory, if present
//! 3. HTTP GET `<base-url>/<filename>` (one round trip, no retries)

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::domain::{NationMedalRecord, SportMedalTable};
use crate::error::AppError;

/// Default filename of the per-nation snapshot.
pub const NATION_SNAPSHOT: &str = "fullStat_nation.json";

/// Default filename of the per-sport-per-country snapshot.
pub const SPORT_SNAPSHOT: &str = "full_sport_by_country.json";

const BASE_URL_VAR: &str = "PODIUM_BASE_URL";

/// Where a dataset should be read from.
#[derive(Debug, Clone)]
pub enum SourceSpec {
    /// Explicit local file.
    Path(PathBuf),
    /// Local snapshot if present, else fetch from the base URL.
    Auto { base_url: Option<String> },
}

/// A parsed dataset plus the label of where it came from (path or URL).
///
/// The label ends up in report headers and chart subtitles.
#[derive(Debug, Clone)]
pub struct RawDataset<T> {
    pub value: T,
    pub source: String,
}

/// Resolves and loads statistics snapshots.
pub struct StatsSource {
    client: Client,
    spec: SourceSpec,
}

impl StatsSource {
    pub fn new(spec: SourceSpec) -> Self {
        Self {
            client: Client::new(),
            spec,
        }
    }

    /// Base URL from the environment (`.env` supported), if configured.
    pub fn base_url_from_env() -> Option<String> {
        dotenvy::dotenv().ok();
        std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    /// Load the per-nation snapshot (`fullStat_nation.json`).
    pub fn load_nations(&self) -> Result<RawDataset<Vec<NationMedalRecord>>, AppError> {
        self.load(NATION_SNAPSHOT)
    }

    /// Load the per-sport snapshot (`full_sport_by_country.json`).
    pub fn load_sport_table(&self) -> Result<RawDataset<SportMedalTable>, AppError> {
        self.load(SPORT_SNAPSHOT)
    }

    fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<RawDataset<T>, AppError> {
        match &self.spec {
            SourceSpec::Path(path) => read_json_file(path),
            SourceSpec::Auto { base_url } => {
                let local = Path::new(filename);
                if local.is_file() {
                    return read_json_file(local);
                }
                match base_url {
                    Some(base) => self.fetch(base, filename),
                    None => Err(AppError::usage(format!(
                        "No local '{filename}' found and no base URL configured \
                         (use --base-url or set {BASE_URL_VAR})."
                    ))),
                }
            }
        }
    }

    fn fetch<T: DeserializeOwned>(&self, base_url: &str, filename: &str) -> Result<RawDataset<T>, AppError> {
        let url = join_url(base_url, filename);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::data_load(format!("Request for '{url}' failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data_load(format!(
                "Request for '{url}' failed with status {}.",
                resp.status()
            )));
        }

        let value = resp
            .json()
            .map_err(|e| AppError::data_load(format!("Failed to parse response from '{url}': {e}")))?;

        Ok(RawDataset { value, source: url })
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<RawDataset<T>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::data_load(format!("Failed to open '{}': {e}", path.display())))?;

    let value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::data_load(format!("Invalid JSON in '{}': {e}", path.display())))?;

    Ok(RawDataset {
        value,
        source: path.display().to_string(),
    })
}

fn join_url(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}

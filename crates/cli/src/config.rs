use std::{env, fmt::Display, fs, path::PathBuf, str::FromStr};

use anyhow::{Context, anyhow};
use tracing::info;

use solidarity_observability::LogFormat;
use solidarity_origin::{PrefixTable, PrefixTableSpec};
use solidarity_store::DEFAULT_SEARCH_HISTORY_LIMIT;

pub const DATA_FILE_VAR: &str = "SOLIDARITY_DATA_FILE";
pub const PREFIX_TABLE_VAR: &str = "SOLIDARITY_PREFIX_TABLE";
pub const LOG_FORMAT_VAR: &str = "SOLIDARITY_LOG_FORMAT";
pub const SEARCH_HISTORY_LIMIT_VAR: &str = "SOLIDARITY_SEARCH_HISTORY_LIMIT";

pub const DEFAULT_DATA_FILE: &str = "solidarity-data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file backing the key/value store.
    pub data_file: PathBuf,
    /// Replacement prefix table; `None` keeps the built-in one.
    pub prefix_table: Option<PathBuf>,
    pub log_format: LogFormat,
    pub search_history_limit: usize,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            data_file: try_load(&lookup, DATA_FILE_VAR, DEFAULT_DATA_FILE)?,
            prefix_table: lookup(PREFIX_TABLE_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_format: try_load(&lookup, LOG_FORMAT_VAR, "pretty")?,
            search_history_limit: try_load(
                &lookup,
                SEARCH_HISTORY_LIMIT_VAR,
                &DEFAULT_SEARCH_HISTORY_LIMIT.to_string(),
            )?,
        })
    }

    /// Just the log format, read without logging so it can be used to install
    /// the subscriber before [`Config::load`] reports its defaults.
    pub fn log_format_from(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<LogFormat> {
        match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow!("invalid {LOG_FORMAT_VAR} value {raw:?}: {e}")),
            None => Ok(LogFormat::default()),
        }
    }

    /// The configured prefix table, or the built-in one when none is set.
    pub fn load_prefix_table(&self) -> anyhow::Result<PrefixTable> {
        let Some(path) = &self.prefix_table else {
            return Ok(PrefixTable::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading prefix table {}", path.display()))?;
        let spec: PrefixTableSpec = serde_json::from_str(&raw)
            .with_context(|| format!("parsing prefix table {}", path.display()))?;
        let table = PrefixTable::from_spec(spec)
            .with_context(|| format!("invalid prefix table {}", path.display()))?;
        info!(path = %path.display(), entries = table.len(), "loaded prefix table");
        Ok(table)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("invalid {key} value {raw:?}: {e}"))
}

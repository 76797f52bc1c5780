use crate::config::ModelData;
use crate::error::{ModelDataError, Result};
use crate::merge::{RIVER_FLAG, TRANSPORT_FLAG, value_kind};
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Build groundwater flow model data from defaults and overrides
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file with an object of overrides, `-` for stdin
    #[arg(short, long)]
    pub overrides: Option<PathBuf>,

    /// Override one top-level key; VALUE is JSON, or a plain string otherwise
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Include the solute transport defaults
    #[arg(long)]
    pub transport: bool,

    /// Include the river boundary defaults
    #[arg(long)]
    pub river: bool,

    /// Pretty-print the merged model data
    #[arg(short, long)]
    pub pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Overrides from the file, then `--set` entries, then the flag switches.
    pub fn collect_overrides(&self) -> Result<Value> {
        let mut overrides = match &self.overrides {
            Some(path) => read_overrides(path)?,
            None => ModelData::new(),
        };

        for assignment in &self.set {
            let (key, value) = parse_assignment(assignment)?;
            overrides.insert(key, value);
        }
        if self.transport {
            overrides.insert(TRANSPORT_FLAG.to_string(), Value::Bool(true));
        }
        if self.river {
            overrides.insert(RIVER_FLAG.to_string(), Value::Bool(true));
        }

        Ok(Value::Object(overrides))
    }
}

pub fn get_args() -> Args {
    Args::parse()
}

/// Split `KEY=VALUE`; the value is read as JSON and falls back to a string.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| ModelDataError::InvalidAssignment(assignment.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ModelDataError::InvalidAssignment(assignment.to_string()));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Read an override document; it must hold a JSON object.
pub fn read_overrides(path: &Path) -> Result<ModelData> {
    let content = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|source| ModelDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(ModelDataError::InvalidConfiguration {
            found: value_kind(&other),
        }),
    }
}

//! Data loaders resolving paths under the workspace `data/` directory.

use crate::scenario::{InputScenario, MAX_SCENARIO_FRAMES};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a raw JSON file under `data/` and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

/// Parse a TOML config under `data/`; a missing file yields `T::default()`.
pub(crate) fn read_config_toml<T: DeserializeOwned + Default>(rel: impl AsRef<Path>) -> Result<T> {
    let path = data_root().join(rel);
    if !path.is_file() {
        return Ok(T::default());
    }
    let txt = fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    toml::from_str(&txt).with_context(|| format!("parse config: {}", path.display()))
}

/// Load an input scenario from `data/scenarios/*`.
pub fn load_scenario(rel: impl AsRef<Path>) -> Result<InputScenario> {
    let txt = read_json(rel)?;
    parse_scenario(&txt)
}

/// Load an input scenario from an arbitrary filesystem path.
pub fn load_scenario_file(path: &Path) -> Result<InputScenario> {
    let txt = fs::read_to_string(path).with_context(|| format!("read scenario: {}", path.display()))?;
    parse_scenario(&txt)
}

/// Parse and validate scenario JSON.
pub fn parse_scenario(txt: &str) -> Result<InputScenario> {
    let scn: InputScenario = serde_json::from_str(txt).context("parse scenario json")?;
    anyhow::ensure!(scn.tick_ms > 0, "scenario {}: tick_ms must be > 0", scn.name);
    for (i, seg) in scn.segments.iter().enumerate() {
        anyhow::ensure!(
            seg.duration_s.is_finite() && seg.duration_s >= 0.0,
            "scenario {}: segment {i} has invalid duration",
            scn.name
        );
    }
    let frames = scn.checked_total_frames();
    anyhow::ensure!(
        frames.is_some_and(|n| n <= MAX_SCENARIO_FRAMES),
        "scenario {}: longer than {MAX_SCENARIO_FRAMES} frames",
        scn.name
    );
    Ok(scn)
}

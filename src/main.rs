use anyhow::{Context, Result};
use echoes::client::config::MotionConfig;
use echoes::client::harness;
use echoes::client::telemetry::init_client_telemetry;
use echoes::data::configs::{character_motion, telemetry};
use echoes::data::loader;

const DEFAULT_SCENARIO: &str = "scenarios/patrol_and_strike.json";

fn main() -> Result<()> {
    let tcfg = telemetry::load_default()?;
    init_client_telemetry(&tcfg);

    let cfg = MotionConfig::from_cfg(&character_motion::load_default()?).context("character motion tuning")?;
    let scn = loader::load_scenario(DEFAULT_SCENARIO)?;
    let summary = harness::replay(&scn, cfg).context("build controller")?;
    tracing::info!(
        target: "controls",
        scenario = %summary.scenario,
        frames = summary.frames,
        pos = ?summary.final_state.position,
        phase = ?summary.final_state.phase(),
        attacks = summary.attacks,
        boom_len = summary.boom_len,
        "demo finished"
    );
    Ok(())
}

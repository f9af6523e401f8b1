use anyhow::{Context, Result};
use client_core::config::MotionConfig;
use client_core::harness::replay;
use client_core::telemetry::init_client_telemetry;
use data_runtime::configs::{character_motion, telemetry};
use data_runtime::loader::load_scenario_file;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: motion-harness <scenario.json> [tuning.toml]");
        std::process::exit(2);
    }
    init_client_telemetry(&telemetry::load_default()?);

    let scn = load_scenario_file(Path::new(&args[1]))?;
    let tuning = match args.get(2) {
        Some(p) => character_motion::load_from(Path::new(p))?,
        None => character_motion::load_default()?,
    };
    let cfg = MotionConfig::from_cfg(&tuning).context("character motion tuning")?;
    let s = replay(&scn, cfg).context("build controller")?;

    let report = serde_json::json!({
        "scenario": s.scenario,
        "frames": s.frames,
        "position": s.final_state.position.to_array(),
        "yaw_rad": client_core::systems::orientation::yaw_of(s.final_state.facing),
        "armed": s.final_state.combat.is_armed,
        "in_combat": s.final_state.combat.in_combat_stance,
        "attacks": s.attacks,
        "stance_entries": s.stance_entries,
        "max_target_speed": s.max_target_speed,
        "boom_len": s.boom_len,
        "zoom_target": s.final_state.zoom_target,
        "trail_points": s.trail_points,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

//! data_runtime: data schemas and loaders for character tuning and input scenarios.
//!
//! Kept free of math/engine types so tools and tests can read data without
//! pulling in the controller.

pub mod loader;
pub mod scenario;
pub mod configs {
    pub mod character_motion;
    pub mod telemetry;
}

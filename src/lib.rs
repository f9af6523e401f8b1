// Root app shell and re-exports for workspace crates used by bins.
pub use client_core as client;
pub use data_runtime as data;

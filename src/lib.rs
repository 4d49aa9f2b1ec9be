//! # Recorder Dashboard
//!
//! A terminal status dashboard for a live-stream recording/transcoding/upload
//! pipeline managed by a co-located recorder service.
//!
//! Once per refresh interval the dashboard:
//!
//! 1. Fetches the room snapshot from the recorder's status endpoint
//! 2. Derives per-stage elapsed times and the pipeline-state label per room
//! 3. Samples host CPU, memory, and network counters
//! 4. Repaints two terminal tables in place (rooms, host gauges)
//!
//! ## Architecture
//!
//! - **`config`**: resolved runtime settings (endpoint, refresh interval)
//! - **`client`**: one blocking HTTP GET per cycle, schema validation
//! - **`model`**: the wire-level room record and pipeline-state labels
//! - **`fmt`**: elapsed-time and byte-count rendering rules
//! - **`host`**: OS gauge sampling and throughput deltas between cycles
//! - **`display`**: table construction and in-place frame replacement
//!
//! The loop is deliberately sequential and blocking, with no retry or
//! backoff: the recorder service is expected to be always available on the
//! same host, and any failure aborts the process with a full error report.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod fmt;
pub mod host;
pub mod model;

pub use client::InfoClient;
pub use config::Config;
pub use error::DashboardError;
pub use host::HostMonitor;

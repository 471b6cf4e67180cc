//! RISC-16 Simulation Orchestration
//!
//! Drives the external compile+run toolchain against an assembled memory
//! image and extracts the structured execution trace from its combined
//! output.
//!
//! The pipeline for one request is strictly sequential:
//! assemble -> format image -> compile -> execute -> extract trace.
//! Both external invocations are bounded by independent 30-second
//! timeouts; the ephemeral workspace is removed on every exit path.

pub mod error;
pub mod orchestrator;
pub mod runner;
pub mod service;
pub mod sources;
pub mod toolchain;
pub mod trace;
pub mod workspace;

pub use error::{Phase, SimError};
pub use orchestrator::{Simulator, TOOL_TIMEOUT};
pub use runner::{ProcessRunner, SpawnError, ToolInvocation, ToolOutput, ToolRunner};
pub use service::{simulate, status, InfoResponse, SimulateResponse, StatusResponse};
pub use sources::SourceSet;
pub use toolchain::Toolchain;
pub use trace::{extract, Trace};

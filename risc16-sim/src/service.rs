//! Request/response service layer
//!
//! The synchronous core behind the external protocol: submit assembly
//! source, receive the trace plus the encoded program; query toolchain
//! status; fetch service info. Payload shapes mirror the wire format
//! (camelCase field names). Routing, CORS and transport concerns live
//! outside this crate.

use serde::{Deserialize, Serialize};

use crate::orchestrator::Simulator;
use crate::runner::ToolRunner;
use crate::toolchain::Toolchain;
use crate::trace::Trace;
use risc16_assembler::assemble;
use risc16_spec::{image_lines, to_image, CodeWord};

/// Body of a simulate request
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    /// Assembly source text
    pub assembly: String,
}

/// Body of a simulate response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub success: bool,
    /// Execution trace; empty array on failure
    pub trace: Trace,
    /// Encoded code words, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<Vec<CodeWord>>,
    /// 4-hex-digit image lines, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_hex: Option<Vec<String>>,
    pub error: Option<String>,
}

impl SimulateResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            trace: Trace::Array(Vec::new()),
            program: None,
            program_hex: None,
            error: Some(message),
        }
    }
}

/// Assemble and simulate one submission.
///
/// Assembly errors are returned in full (collect-all); an empty program is
/// rejected here, before any external tool is invoked. Orchestration
/// failures become structured failure responses; nothing panics the
/// serving process.
pub fn simulate<R: ToolRunner>(sim: &Simulator<R>, source: &str) -> SimulateResponse {
    let assembled = assemble(source);

    if !assembled.is_success() {
        let joined = assembled
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        return SimulateResponse::failure(format!("Assembly errors:\n{joined}"));
    }

    if assembled.is_empty() {
        return SimulateResponse::failure("No instructions in program".to_string());
    }

    let image = to_image(&assembled.words);
    tracing::debug!(words = assembled.len(), "assembled program");

    match sim.run(&image) {
        Ok(trace) => SimulateResponse {
            success: true,
            trace,
            program_hex: Some(image_lines(&assembled.words)),
            program: Some(assembled.words),
            error: None,
        },
        Err(e) => SimulateResponse::failure(e.to_string()),
    }
}

/// Per-tool resolution status
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub available: bool,
    pub path: Option<String>,
}

/// Body of a status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub compile_tool: ToolStatus,
    pub run_tool: ToolStatus,
}

/// Report whether both external tools were resolved, and where
pub fn status(toolchain: &Toolchain) -> StatusResponse {
    let tool = |path: &Option<std::path::PathBuf>| ToolStatus {
        available: path.is_some(),
        path: path.as_ref().map(|p| p.display().to_string()),
    };
    StatusResponse {
        status: "ok",
        compile_tool: tool(&toolchain.compiler),
        run_tool: tool(&toolchain.runner),
    }
}

/// One advertised operation
#[derive(Debug, Clone, Serialize)]
pub struct OperationInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Body of the root/info response
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub operations: Vec<OperationInfo>,
}

/// Advertise the service operations
pub fn info() -> InfoResponse {
    InfoResponse {
        name: "RISC-16 CPU simulator",
        version: env!("CARGO_PKG_VERSION"),
        operations: vec![
            OperationInfo {
                name: "simulate",
                description: "Assemble source and run the hardware simulation",
            },
            OperationInfo {
                name: "status",
                description: "Report external toolchain availability",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{SpawnError, ToolInvocation, ToolOutput};
    use crate::sources::SourceSet;
    use crate::toolchain::{COMPILE_TOOL, RUN_TOOL};
    use std::path::{Path, PathBuf};

    /// Runner that always succeeds with a fixed run-step output
    struct CannedRunner {
        run_output: String,
    }

    impl ToolRunner for CannedRunner {
        fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, SpawnError> {
            let stdout = if invocation.program.ends_with("vvp") {
                self.run_output.clone()
            } else {
                String::new()
            };
            Ok(ToolOutput {
                success: true,
                stdout,
                stderr: String::new(),
            })
        }
    }

    /// Runner that panics if invoked at all
    struct NeverRunner;

    impl ToolRunner for NeverRunner {
        fn run(&self, _invocation: &ToolInvocation) -> Result<ToolOutput, SpawnError> {
            panic!("no tool should be invoked");
        }
    }

    fn toolchain() -> Toolchain {
        Toolchain {
            compiler: Some(PathBuf::from("/opt/bin/iverilog")),
            runner: Some(PathBuf::from("/opt/bin/vvp")),
        }
    }

    fn sim_with<R: ToolRunner>(runner: R) -> Simulator<R> {
        Simulator::with_runner(toolchain(), SourceSet::rooted_at(Path::new("/hw")), runner)
    }

    #[test]
    fn test_simulate_success_payload() {
        let sim = sim_with(CannedRunner {
            run_output: "[\n  {\"cycle\": 0}\n]\n".to_string(),
        });
        let response = simulate(&sim, "LDI R0, 5\nHLT");

        assert!(response.success);
        assert!(response.error.is_none());
        assert_eq!(response.program, Some(vec![0x9005, 0xE000]));
        let hex = response.program_hex.unwrap();
        assert_eq!(hex.len(), 8);
        assert_eq!(hex[0], "9005");
        assert_eq!(hex[1], "E000");
        assert_eq!(response.trace[0]["cycle"], 0);
    }

    #[test]
    fn test_assembly_errors_reported_without_tool_invocation() {
        let sim = sim_with(NeverRunner);
        let response = simulate(&sim, "FOO R0\nLDI R0, 5");

        assert!(!response.success);
        let error = response.error.unwrap();
        assert!(error.contains("Assembly errors"));
        assert!(error.contains("Line 1"));
        assert!(error.to_lowercase().contains("unknown instruction"));
        assert!(error.contains("FOO"));
    }

    #[test]
    fn test_empty_program_rejected_before_tools() {
        let sim = sim_with(NeverRunner);
        let response = simulate(&sim, "; comments only\n\n");

        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("No instructions in program")
        );
        assert_eq!(response.trace, Trace::Array(Vec::new()));
    }

    #[test]
    fn test_simulation_failure_is_structured() {
        let sim = Simulator::with_runner(
            Toolchain::default(),
            SourceSet::rooted_at(Path::new("/hw")),
            NeverRunner,
        );
        let response = simulate(&sim, "HLT");
        assert!(!response.success);
        assert!(response.error.unwrap().contains("toolchain unavailable"));
    }

    #[test]
    fn test_status_reports_both_tools() {
        let report = status(&toolchain());
        assert_eq!(report.status, "ok");
        assert!(report.compile_tool.available);
        assert_eq!(
            report.compile_tool.path.as_deref(),
            Some("/opt/bin/iverilog")
        );
        assert!(report.run_tool.available);

        let report = status(&Toolchain::default());
        assert!(!report.compile_tool.available);
        assert!(report.compile_tool.path.is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let sim = sim_with(CannedRunner {
            run_output: "[\n]\n".to_string(),
        });
        let response = simulate(&sim, "HLT");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("programHex").is_some());
        assert!(json.get("program").is_some());
        assert!(json.get("success").is_some());
    }

    #[test]
    fn test_info_advertises_operations() {
        let info = info();
        let names: Vec<&str> = info.operations.iter().map(|op| op.name).collect();
        assert_eq!(names, vec!["simulate", "status"]);
    }

    #[test]
    fn test_uses_tool_names() {
        // Keep the wire-visible tool identities stable
        assert_eq!(COMPILE_TOOL, "iverilog");
        assert_eq!(RUN_TOOL, "vvp");
    }
}

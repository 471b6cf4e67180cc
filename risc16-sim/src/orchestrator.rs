//! Simulation orchestration
//!
//! Sequential state machine per request: ToolsCheck -> WorkspaceCreate ->
//! Compile -> Execute -> ExtractTrace. Every failure is terminal for its
//! request; nothing is retried. The workspace is dropped (and deleted) on
//! every exit path, including errors raised before any process is spawned.

use std::ffi::OsString;
use std::time::Duration;

use crate::error::{Phase, SimError};
use crate::runner::{ProcessRunner, SpawnError, ToolInvocation, ToolOutput, ToolRunner};
use crate::sources::SourceSet;
use crate::toolchain::{Toolchain, COMPILE_TOOL, RUN_TOOL};
use crate::trace::{extract, Trace};
use crate::workspace::Workspace;

/// Hard wall-clock limit for each external invocation
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives the external toolchain for one memory image at a time
#[derive(Debug)]
pub struct Simulator<R = ProcessRunner> {
    toolchain: Toolchain,
    sources: SourceSet,
    runner: R,
}

impl Simulator<ProcessRunner> {
    pub fn new(toolchain: Toolchain, sources: SourceSet) -> Self {
        Self::with_runner(toolchain, sources, ProcessRunner)
    }
}

impl<R: ToolRunner> Simulator<R> {
    /// Construct with an injected runner (used by tests to script outcomes)
    pub fn with_runner(toolchain: Toolchain, sources: SourceSet, runner: R) -> Self {
        Self {
            toolchain,
            sources,
            runner,
        }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Run the compile and run steps against `image` and extract the trace
    pub fn run(&self, image: &str) -> Result<Trace, SimError> {
        // ToolsCheck
        let compiler = self
            .toolchain
            .compiler
            .as_ref()
            .ok_or(SimError::ToolchainUnavailable {
                missing: COMPILE_TOOL,
            })?;
        let run_tool = self
            .toolchain
            .runner
            .as_ref()
            .ok_or(SimError::ToolchainUnavailable { missing: RUN_TOOL })?;

        // WorkspaceCreate; lives to the end of this function so the
        // directory survives both tool steps and is removed on every return
        let workspace = Workspace::create(image)?;
        tracing::debug!(workspace = %workspace.path().display(), "workspace created");

        // Compile
        let mut args: Vec<OsString> = vec![
            OsString::from("-o"),
            workspace.artifact_path().into_os_string(),
            OsString::from("-I"),
            self.sources.include_dir().as_os_str().to_os_string(),
        ];
        args.extend(
            self.sources
                .files()
                .into_iter()
                .map(|f| f.into_os_string()),
        );

        let compile = self
            .runner
            .run(&ToolInvocation {
                program: compiler.clone(),
                args,
                cwd: workspace.path().to_path_buf(),
                timeout: TOOL_TIMEOUT,
            })
            .map_err(|e| tag(e, Phase::Compile))?;

        if !compile.success {
            return Err(SimError::CompileFailure {
                diagnostics: compile.stderr,
            });
        }
        tracing::debug!("compile step finished");

        // Execute
        let run: ToolOutput = self
            .runner
            .run(&ToolInvocation {
                program: run_tool.clone(),
                args: vec![workspace.artifact_path().into_os_string()],
                cwd: workspace.path().to_path_buf(),
                timeout: TOOL_TIMEOUT,
            })
            .map_err(|e| tag(e, Phase::Run))?;
        tracing::debug!(bytes = run.stdout.len(), "run step finished");

        // ExtractTrace
        extract(&run.stdout)
    }
}

fn tag(err: SpawnError, phase: Phase) -> SimError {
    match err {
        SpawnError::Timeout => SimError::Timeout { phase },
        SpawnError::Launch(source) => SimError::Launch { phase, source },
    }
}

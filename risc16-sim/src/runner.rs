//! External tool execution
//!
//! [`ToolRunner`] is the narrow seam between the orchestration state
//! machine and the operating system: one call runs one tool to completion
//! under a deadline. The orchestrator is tested against scripted runners;
//! [`ProcessRunner`] is the real implementation.

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the child is polled for exit while the deadline runs down
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// One tool invocation: program, arguments, working directory, deadline
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

/// Captured outcome of a completed tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the tool exited with status zero
    pub success: bool,
    /// Complete standard output
    pub stdout: String,
    /// Complete standard error
    pub stderr: String,
}

/// Why an invocation produced no [`ToolOutput`]
#[derive(Debug)]
pub enum SpawnError {
    /// The deadline expired; the child was killed
    Timeout,
    /// The process could not be launched or waited on
    Launch(std::io::Error),
}

/// Capability to run one external tool to completion
pub trait ToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, SpawnError>;
}

/// Real runner backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, SpawnError> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(SpawnError::Launch)?;

        // Drain both pipes on their own threads so a chatty child cannot
        // fill a pipe buffer and deadlock against the exit poll below.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + invocation.timeout;
        let status = loop {
            match child.try_wait().map_err(SpawnError::Launch)? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SpawnError::Timeout);
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        Ok(ToolOutput {
            success: status.success(),
            stdout: collect(stdout),
            stderr: collect(stderr),
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            buf
        })
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    let bytes = handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

//! External toolchain resolution
//!
//! Locates the two external executables (compile step, run step) once per
//! process. PATH is probed first, then a short list of well-known install
//! locations. A missing tool is not fatal here; it short-circuits later
//! simulation attempts instead.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Name of the compile-step executable
pub const COMPILE_TOOL: &str = "iverilog";

/// Name of the run-step executable
pub const RUN_TOOL: &str = "vvp";

/// Well-known install locations probed after PATH
const INSTALL_DIRS: &[&str] = &["/usr/bin", "/usr/local/bin"];

/// Resolved locations of the external toolchain
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    /// Compile-step executable, if found
    pub compiler: Option<PathBuf>,
    /// Run-step executable, if found
    pub runner: Option<PathBuf>,
}

impl Toolchain {
    /// Probe for both tools
    pub fn resolve() -> Self {
        let compiler = locate(COMPILE_TOOL);
        let runner = locate(RUN_TOOL);

        match &compiler {
            Some(path) => tracing::info!(tool = COMPILE_TOOL, path = %path.display(), "resolved compile tool"),
            None => tracing::warn!(tool = COMPILE_TOOL, "compile tool not found"),
        }
        match &runner {
            Some(path) => tracing::info!(tool = RUN_TOOL, path = %path.display(), "resolved run tool"),
            None => tracing::warn!(tool = RUN_TOOL, "run tool not found"),
        }

        Self { compiler, runner }
    }

    /// Process-wide cached resolution. Probing happens on the first call;
    /// every later call reuses the read-only result.
    pub fn global() -> &'static Toolchain {
        static TOOLCHAIN: OnceLock<Toolchain> = OnceLock::new();
        TOOLCHAIN.get_or_init(Self::resolve)
    }

    /// Whether both tools were found
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.compiler.is_some() && self.runner.is_some()
    }
}

fn locate(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }
    for dir in INSTALL_DIRS {
        let candidate = Path::new(dir).join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

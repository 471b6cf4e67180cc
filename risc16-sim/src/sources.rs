//! Hardware-description source set
//!
//! The simulated design is a fixed set of HDL files compiled together with
//! a JSON-emitting testbench. Order matters for module dependencies.

use std::path::{Path, PathBuf};

/// Design source files, in dependency order
pub const HDL_SOURCES: &[&str] = &[
    "alu.v",
    "register_file.v",
    "program_counter.v",
    "instruction_mem.v",
    "data_memory.v",
    "control_unit.v",
    "cpu_top.v",
];

/// Testbench that emits the structured trace block
pub const TESTBENCH: &str = "cpu_tb_json.v";

/// Locations of the hardware-description inputs
#[derive(Debug, Clone)]
pub struct SourceSet {
    src_dir: PathBuf,
    testbench_dir: PathBuf,
}

impl SourceSet {
    pub fn new(src_dir: impl Into<PathBuf>, testbench_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            testbench_dir: testbench_dir.into(),
        }
    }

    /// Conventional layout: `<base>/src` and `<base>/testbench`
    pub fn rooted_at(base: &Path) -> Self {
        Self::new(base.join("src"), base.join("testbench"))
    }

    /// Include directory passed to the compile step
    pub fn include_dir(&self) -> &Path {
        &self.src_dir
    }

    /// All input files in compile order, testbench last
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = HDL_SOURCES
            .iter()
            .map(|name| self.src_dir.join(name))
            .collect();
        files.push(self.testbench_dir.join(TESTBENCH));
        files
    }
}

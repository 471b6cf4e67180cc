//! Trace extraction
//!
//! The run step's combined output interleaves free-form diagnostic lines
//! with exactly one structured JSON block, delimited by a line containing
//! only `[` and a later line containing only `]`. This module recovers the
//! block as an opaque [`serde_json::Value`]; the trace's internal schema
//! belongs to the simulation engine and is never interpreted here.

use crate::error::SimError;

/// Opaque execution trace produced by the external engine
pub type Trace = serde_json::Value;

/// Maximum number of raw-output characters attached to a parse failure
pub const EXCERPT_LEN: usize = 500;

/// Extract the single delimited trace block from raw tool output.
///
/// Outside the block, blank lines and lines starting with `WARNING:` or
/// `ERROR:` are skipped. Once the opening delimiter is seen, every line is
/// buffered (diagnostic-looking ones included) through the closing
/// delimiter. All-or-nothing: no partial trace is ever returned.
pub fn extract(raw: &str) -> Result<Trace, SimError> {
    let mut block: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in raw.lines() {
        let line = line.trim();
        if in_block {
            block.push(line);
            if line == "]" {
                break;
            }
        } else {
            if line.is_empty() || line.starts_with("WARNING:") || line.starts_with("ERROR:") {
                continue;
            }
            if line == "[" {
                in_block = true;
                block.push(line);
            }
        }
    }

    if block.is_empty() {
        return Err(SimError::TraceParse {
            reason: "no trace block found in simulation output".to_string(),
            excerpt: excerpt(raw),
        });
    }

    serde_json::from_str(&block.join("\n")).map_err(|e| SimError::TraceParse {
        reason: format!("trace block is not valid JSON: {e}"),
        excerpt: excerpt(raw),
    })
}

fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_clean_block() {
        let raw = "[\n  {\"cycle\": 0},\n  {\"cycle\": 1}\n]";
        let trace = extract(raw).unwrap();
        assert_eq!(trace, json!([{"cycle": 0}, {"cycle": 1}]));
    }

    #[test]
    fn test_skips_diagnostics_and_blanks() {
        let raw = "WARNING: timing arc ignored\n\nERROR: $dumpvars unsupported\n[\n  {\"pc\": 0}\n]\ntrailing noise";
        let trace = extract(raw).unwrap();
        assert_eq!(trace, json!([{"pc": 0}]));
    }

    #[test]
    fn test_diagnostic_looking_lines_inside_block_kept() {
        // Once the block opens, nothing is filtered until it closes
        let raw = "[\n  \"WARNING: not a warning\",\n  \"ERROR: not an error\"\n]";
        let trace = extract(raw).unwrap();
        assert_eq!(
            trace,
            json!(["WARNING: not a warning", "ERROR: not an error"])
        );
    }

    #[test]
    fn test_junk_before_block_ignored() {
        let raw = "VCD info: dumpfile dump.vcd opened\n[\n]\n";
        let trace = extract(raw).unwrap();
        assert_eq!(trace, json!([]));
    }

    #[test]
    fn test_no_block_fails_with_excerpt() {
        let raw = "WARNING: nothing here\nplain noise\n";
        let err = extract(raw).unwrap_err();
        match err {
            SimError::TraceParse { reason, excerpt } => {
                assert!(reason.contains("no trace block"));
                assert!(excerpt.contains("plain noise"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_block_fails() {
        let raw = "[\n  {\"cycle\": 0},\n";
        assert!(matches!(
            extract(raw),
            Err(SimError::TraceParse { .. })
        ));
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let raw = "x".repeat(2000);
        let err = extract(&raw).unwrap_err();
        match err {
            SimError::TraceParse { excerpt, .. } => assert_eq!(excerpt.len(), EXCERPT_LEN),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

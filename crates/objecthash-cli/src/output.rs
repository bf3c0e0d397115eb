//! Output formatting utilities.

use objecthash::golden::GoldenMismatch;
use objecthash::Digest;
use serde_json::json;

/// Formats a digest as hex or base64url.
pub fn format_digest(digest: &Digest, b64: bool) -> String {
    if b64 {
        digest.to_base64url()
    } else {
        digest.to_hex()
    }
}

/// Formats a mismatch as a human-readable block.
pub fn format_mismatch(mismatch: &GoldenMismatch) -> String {
    format!(
        "line {}: {}\n  expected {}\n  got      {}",
        mismatch.case.line,
        truncate(&mismatch.case.json, 60),
        mismatch.case.expected,
        mismatch.actual
    )
}

/// Formats mismatches as a JSON report.
pub fn format_mismatches_json(mismatches: &[GoldenMismatch], total: usize) -> String {
    let failures: Vec<_> = mismatches
        .iter()
        .map(|m| {
            json!({
                "line": m.case.line,
                "json": m.case.json,
                "expected": m.case.expected,
                "actual": m.actual,
            })
        })
        .collect();
    let report = json!({ "total": total, "failed": failures.len(), "failures": failures });
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

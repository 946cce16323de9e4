//! Report rendering: human-readable text and NDJSON events.
//!
//! Both renderers write through a caller-supplied sink so tests can
//! capture output without process-level stdout redirection.

use std::io::{self, Write};
use std::path::Path;

use crate::audit::{AuditReport, CheckStatus};

const BANNER: &str = "Teams Transcription Application - Project Verification";
const RULE: &str = "==================================================";

const NEXT_STEPS: [&str; 4] = [
    "1. Open project in Visual Studio on Windows",
    "2. Configure API keys in config/settings.json",
    "3. Build using scripts/build.bat or Visual Studio",
    "4. Test audio capture and transcription features",
];

/// Render the human-readable report.
///
/// Line format is stable (grep-able prefixes): `✓ {description}: {path}`
/// for present entries, `✗ {description}: {path} (MISSING)` for missing
/// ones, in checklist order.
pub fn render_report(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{RULE}")?;

    for result in &report.results {
        match result.status {
            CheckStatus::Present => {
                writeln!(out, "✓ {}: {}", result.item.description, result.item.path)?;
            }
            CheckStatus::Missing => {
                writeln!(
                    out,
                    "✗ {}: {} (MISSING)",
                    result.item.description, result.item.path
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;

    if report.is_success() {
        writeln!(out, "✓ All required files are present!")?;
        writeln!(out)?;
        writeln!(out, "Next steps:")?;
        for step in NEXT_STEPS {
            writeln!(out, "{step}")?;
        }
    } else {
        writeln!(out, "✗ Some required files are missing!")?;
        writeln!(out, "Please ensure all files are in place before building.")?;
    }

    Ok(())
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Render the report as an NDJSON event stream for CI consumers.
pub fn render_json(out: &mut impl Write, root: &Path, report: &AuditReport) -> io::Result<()> {
    write_event(
        out,
        &serde_json::json!({
            "event": "start",
            "command": "verify",
            "root": root.display().to_string(),
        }),
    )?;

    for result in &report.results {
        write_event(
            out,
            &serde_json::json!({
                "event": "check",
                "command": "verify",
                "description": result.item.description,
                "path": result.item.path,
                "status": result.status,
            }),
        )?;
    }

    write_event(
        out,
        &serde_json::json!({
            "event": "complete",
            "command": "verify",
            "present": report.present(),
            "missing": report.missing(),
            "success": report.is_success(),
        }),
    )
}

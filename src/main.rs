//! Preflight CLI - project scaffold verification
//!
//! Usage: preflight [--root <DIR>] [--json]
//!
//! Audits the project tree for the required files and exits nonzero when
//! any are missing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use preflight::{render_json, render_report, resolve_root, run_audit};

/// Preflight - project scaffold verification tool
#[derive(Parser, Debug)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root to audit (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// NDJSON event output for CI
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = resolve_root(cli.root)?;
    let report = run_audit(&root);

    let mut out = std::io::stdout().lock();
    if cli.json {
        render_json(&mut out, &root, &report)?;
    } else {
        render_report(&mut out, &report)?;
    }
    drop(out);

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["preflight"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_root() {
        let cli = Cli::try_parse_from(["preflight", "--root", "checkouts/app"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("checkouts/app")));
    }

    #[test]
    fn test_cli_parse_json_flag() {
        let cli = Cli::try_parse_from(["preflight", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        assert!(Cli::try_parse_from(["preflight", "extra"]).is_err());
    }
}

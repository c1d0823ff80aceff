//! wordex CLI - render a wiki page export to a Word document.
//!
//! Reads a JSON page-data payload from a file or standard input,
//! renders it against a `.docx`/`.docm` template, and reports the
//! result as a single JSON object on standard output:
//! `{"success": true, "output": "..."}` or
//! `{"success": false, "error": "..."}`. Exit code 0 on success, 1 on
//! any failure. Diagnostics go to standard error.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordex_template::{PageData, render_template};

/// Render a wiki page to a Word document using a template.
#[derive(Parser)]
#[command(name = "wordex", version, about)]
struct Cli {
    /// Path to the Word template (.docx or .docm).
    #[arg(long, short = 't')]
    template: PathBuf,

    /// Output path for the generated document.
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Input JSON file (default: read from stdin).
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            emit(&serde_json::json!({ "success": true, "output": output.display().to_string() }));
            ExitCode::SUCCESS
        }
        Err(message) => {
            emit(&serde_json::json!({ "success": false, "error": message }));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, String> {
    let page = read_page_data(cli.input.as_deref())?;

    if !cli.template.is_file() {
        return Err(format!("Template not found: {}", cli.template.display()));
    }

    let outcome = render_template(&cli.template, &page, &cli.output)
        .map_err(|err| err.to_string())?;
    Ok(outcome.output)
}

fn read_page_data(input: Option<&Path>) -> Result<PageData, String> {
    let payload = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("Cannot read input {}: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("Cannot read stdin: {err}"))?;
            buffer
        }
    };
    serde_json::from_str(&payload).map_err(|err| format!("Invalid JSON input: {err}"))
}

/// The JSON result is the CLI contract; it is the only thing written
/// to stdout.
fn emit(value: &serde_json::Value) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{value}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_parses_short_and_long_flags() {
        let cli = Cli::parse_from(["wordex", "-t", "tpl.docm", "-o", "out.docx", "-i", "page.json"]);
        assert_eq!(cli.template, PathBuf::from("tpl.docm"));
        assert_eq!(cli.output, PathBuf::from("out.docx"));
        assert_eq!(cli.input, Some(PathBuf::from("page.json")));

        let cli = Cli::parse_from(["wordex", "--template", "t.docx", "--output", "o.docx"]);
        assert_eq!(cli.input, None);
    }

    #[test]
    fn missing_template_reports_error_message() {
        let dir = tempfile_dir();
        let input = dir.join("page.json");
        std::fs::write(&input, r#"{"title": "T", "markdown": ""}"#).expect("write input");

        let cli = Cli::parse_from([
            "wordex",
            "-t",
            "/no/such/template.docx",
            "-o",
            dir.join("out.docx").to_str().expect("utf8 path"),
            "-i",
            input.to_str().expect("utf8 path"),
        ]);
        let err = run(&cli).expect_err("must fail");
        assert!(err.contains("Template not found"));
    }

    #[test]
    fn invalid_json_reports_error_message() {
        let dir = tempfile_dir();
        let input = dir.join("bad.json");
        std::fs::write(&input, "{not json").expect("write input");

        let cli = Cli::parse_from([
            "wordex",
            "-t",
            "whatever.docx",
            "-o",
            "out.docx",
            "-i",
            input.to_str().expect("utf8 path"),
        ]);
        let err = run(&cli).expect_err("must fail");
        assert!(err.contains("Invalid JSON input"));
    }

    fn tempfile_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordex-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create test dir");
        dir
    }
}

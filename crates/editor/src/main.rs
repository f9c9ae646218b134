use std::io::{self, BufRead, Write};

use tubejoint_editor::command::{execute_json, execute_json_batch, CommandResponse};
use tubejoint_editor::harness::TestHarness;

/// Reads one JSON command (or a JSON array of commands) per stdin line and
/// writes one JSON response per line to stdout. Logs go to stderr so the
/// response stream stays machine-readable.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubejoint_editor=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let mut harness = TestHarness::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {e}");
                break;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let response = if input.starts_with('[') {
            match execute_json_batch(&mut harness, input) {
                Ok(responses) => to_json(&responses),
                Err(e) => to_json(&CommandResponse::err(e)),
            }
        } else {
            match execute_json(&mut harness, input) {
                Ok(response) => to_json(&response),
                Err(e) => to_json(&CommandResponse::err(e)),
            }
        };

        if writeln!(out, "{response}").is_err() {
            break;
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| r#"{"success":false,"error":"response serialization failed"}"#.into())
}

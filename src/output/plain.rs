//! Plain console report: one line per event plus a closing status line.

use rewire::Result;

use super::response::write_stdout;
use crate::commands::refactor::RefactorOutput;

pub const COMPLETED: &str = "Backend import refactor successful.";
pub const FAILED: &str = "Backend import refactor failed.";

/// Report lines for one run. The closing line is always present.
pub fn report_lines(target: &str, result: &Result<RefactorOutput>) -> Vec<String> {
    let mut lines = Vec::new();

    match result {
        Ok(RefactorOutput::Rewrite { file, changed, .. }) => {
            if *changed {
                lines.push(format!("Updated {}", file));
            }
            lines.push(COMPLETED.to_string());
        }
        Err(err) => {
            lines.push(format!("Error {}: {}", target, err));
            lines.push(FAILED.to_string());
        }
    }

    lines
}

pub fn print_plain(target: &str, result: &Result<RefactorOutput>) {
    let payload = report_lines(target, result).join("\n");
    if let Err(err) = write_stdout(&payload) {
        eprintln!("{}", err);
    }
}

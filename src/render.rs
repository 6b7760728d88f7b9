// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output formats for a finished run.

use serde::Serialize;

use crate::error::EngineError;
use crate::roster::AssignmentSet;

pub const STATUS_LINE: &str = "Picking Santas...";
pub const SUCCESS_HEADER: &str =
    "Here are the Santa assignments! May the odds be ever in your favor!";
pub const FAILURE_LINE: &str = "Something went wrong...no assignments made.";

/// One line per assignment.
pub fn assignment_lines(assignments: &AssignmentSet) -> Vec<String> {
    assignments
        .iter()
        .map(|a| format!("{} is Santa for {}", a.giver, a.recipient))
        .collect()
}

/// Full text rendering of a run, status line included.
pub fn render_text(result: &Result<AssignmentSet, EngineError>) -> String {
    let mut lines = vec![STATUS_LINE.to_string()];
    match result {
        Ok(assignments) if !assignments.is_empty() => {
            lines.push(SUCCESS_HEADER.to_string());
            lines.extend(assignment_lines(assignments));
        }
        Ok(_) => lines.push(FAILURE_LINE.to_string()),
        Err(e) => {
            lines.push(FAILURE_LINE.to_string());
            lines.push(e.to_string());
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    assignments: Option<&'a AssignmentSet>,
    attempts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON rendering of a run.
pub fn render_json(
    result: &Result<AssignmentSet, EngineError>,
    attempts: u64,
) -> serde_json::Result<String> {
    let report = match result {
        Ok(assignments) => JsonReport {
            assignments: Some(assignments),
            attempts,
            error: None,
        },
        Err(e) => JsonReport {
            assignments: None,
            attempts,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_string_pretty(&report)
}

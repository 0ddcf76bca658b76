//! Advance lifecycle tags use case

use crate::domain::{advance_tags, parse_creation_date};
use crate::error::{RipenError, Result};
use crate::infrastructure::{parse_document, DocumentRepository};
use chrono::NaiveDateTime;
use serde_yaml::Value;

/// Options for an advancement run.
#[derive(Debug, Clone)]
pub struct AdvanceOptions {
    /// The point in time documents are aged against.
    pub now: NaiveDateTime,
    pub dry_run: bool,
}

/// A document whose lifecycle tag moved forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceFileChange {
    pub filename: String,
    pub tag: String,
}

/// A document passed over because its header could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Summary of an advancement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceReport {
    pub scanned_files: usize,
    pub changed_files: usize,
    pub dry_run: bool,
    pub changes: Vec<AdvanceFileChange>,
    pub skipped: Vec<SkippedFile>,
}

/// Walk the repository and advance the lifecycle tag of every document whose
/// age has crossed a new threshold.
///
/// Documents are processed one at a time, in path order. A document whose
/// header or date cannot be read is recorded as skipped and the run
/// continues; only I/O failures abort the run.
pub fn advance_documents(
    repository: &DocumentRepository,
    options: &AdvanceOptions,
) -> Result<AdvanceReport> {
    let files = repository.list_documents();

    let mut changes = Vec::new();
    let mut skipped = Vec::new();

    for filename in &files {
        let content = repository.read_document(filename)?;

        let mut document = match parse_document(&content) {
            Ok(document) => document,
            Err(e) => {
                skipped.push(SkippedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // Documents without a date are not tracked proposals.
        let Some(date_value) = document.metadata.get("date") else {
            continue;
        };

        let created = match creation_date(date_value) {
            Ok(created) => created,
            Err(e) => {
                skipped.push(SkippedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let tags = match document.metadata.tags() {
            Ok(tags) => tags,
            Err(e) => {
                skipped.push(SkippedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let update = advance_tags(&tags, created, options.now);
        if !update.changed {
            continue;
        }

        // The applied stage tag is always the last element.
        let tag = update.tags.last().cloned().unwrap_or_default();

        if !options.dry_run {
            document.metadata.set_tags(update.tags);
            let rendered = document.render()?;
            repository.write_document_atomic(filename, &rendered)?;
        }

        changes.push(AdvanceFileChange {
            filename: filename.clone(),
            tag,
        });
    }

    Ok(AdvanceReport {
        scanned_files: files.len(),
        changed_files: changes.len(),
        dry_run: options.dry_run,
        changes,
        skipped,
    })
}

fn creation_date(value: &Value) -> Result<NaiveDateTime> {
    match value {
        Value::String(text) => parse_creation_date(text),
        other => Err(RipenError::DateFormat(describe_scalar(other))),
    }
}

fn describe_scalar(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|text| text.trim_end().to_string())
        .unwrap_or_else(|_| "<unrepresentable value>".to_string())
}

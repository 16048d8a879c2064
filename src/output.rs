//! Output formatting and styling module.
//!
//! Centralizes all CLI output: colored status lines, per-record rendering
//! of sweep outcomes, the bucket summary table, and the idle spinner shown
//! between watch-mode sweeps.

use crate::sweep::{EntryOutcome, NotifyStatus, SweepRecord, SweepReport};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Renders the fate of one swept entry.
    pub fn record_line(record: &SweepRecord) {
        let mime = record
            .mime_type
            .as_deref()
            .map(|m| format!(" ({})", m))
            .unwrap_or_default();

        match &record.outcome {
            EntryOutcome::Moved => {
                let bucket = record.bucket.as_deref().unwrap_or("?");
                let notify = match &record.notify {
                    NotifyStatus::Notified => " [notified]".to_string(),
                    NotifyStatus::Failed { reason } => {
                        format!(" [{}]", format!("notify failed: {}", reason).yellow())
                    }
                    NotifyStatus::NotAttempted => String::new(),
                };
                Self::success(&format!("{}{} → {}/{}", record.name, mime, bucket, notify));
            }
            EntryOutcome::Orphaned { reason } => {
                Self::warning(&format!(
                    "{} copied but source not removed ({}); file exists in both locations",
                    record.name, reason
                ));
            }
            EntryOutcome::Collision => {
                Self::warning(&format!(
                    "{} skipped: same-named file already in bucket {}/",
                    record.name,
                    record.bucket.as_deref().unwrap_or("?")
                ));
            }
            EntryOutcome::NotAFile => {
                Self::plain(&format!("  {} is not a file, skipped", record.name));
            }
            EntryOutcome::Excluded => {
                Self::plain(&format!("  {} excluded by filters", record.name));
            }
            EntryOutcome::CopyFailed { reason } => {
                Self::error(&format!("{} copy failed: {}", record.name, reason));
            }
            EntryOutcome::BucketUnavailable { reason } => {
                Self::error(&format!(
                    "{} bucket could not be created: {}",
                    record.name, reason
                ));
            }
        }
    }

    /// Prints the per-bucket summary table for a completed sweep.
    pub fn sweep_summary(report: &SweepReport) {
        if report.is_empty() {
            Self::plain("Nothing to sweep.");
            return;
        }

        Self::header("SUMMARY");

        let counts = report.bucket_counts();
        let mut buckets: Vec<_> = counts.iter().collect();
        buckets.sort_by_key(|&(name, _)| name);

        let max_bucket_len = buckets
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(6); // At least "Bucket" width

        println!(
            "{:<width$} | {}",
            "Bucket".bold(),
            "Files".bold(),
            width = max_bucket_len
        );
        println!("{}", "-".repeat(max_bucket_len + 10));

        for (bucket, count) in &buckets {
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                bucket,
                count.to_string().green(),
                file_word,
                width = max_bucket_len
            );
        }

        println!("{}", "-".repeat(max_bucket_len + 10));
        println!(
            "{:<width$} | {} moved, {} failed, {} orphaned, {} notify failures",
            "Total".bold(),
            report.moved().to_string().green().bold(),
            report.failed(),
            report.orphaned(),
            report.notify_failed(),
            width = max_bucket_len
        );
    }

    /// Creates a steady-tick spinner shown while waiting for the next sweep.
    pub fn create_idle_spinner(interval: Duration) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(format!("next sweep in {}s", interval.as_secs()));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}

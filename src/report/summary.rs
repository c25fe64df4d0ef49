//! Conversion summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::path::PathBuf;

use crate::convert::{Direction, ExecutionReport};

/// Summary of one conversion run
#[derive(Debug)]
pub struct ConversionSummary {
    pub direction: Direction,
    pub planned: usize,
    pub dry_run: bool,
    pub backup: Option<PathBuf>,
    pub report: ExecutionReport,
}

impl ConversionSummary {
    pub fn new(direction: Direction, planned: usize, dry_run: bool) -> Self {
        Self {
            direction,
            planned,
            dry_run,
            backup: None,
            report: ExecutionReport::default(),
        }
    }

    pub fn set_backup(&mut self, backup: PathBuf) {
        self.backup = Some(backup);
    }

    pub fn set_report(&mut self, report: ExecutionReport) {
        self.report = report;
    }

    /// Build the summary table.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🔁 Direction"),
            Cell::new(self.direction.to_string()),
        ]);
        table.add_row(vec![Cell::new("📋 Planned"), Cell::new(self.planned)]);

        if self.dry_run {
            table.add_row(vec![
                Cell::new("👀 Dry run (not applied)"),
                Cell::new(self.report.skipped_dry_run).fg(Color::Yellow),
            ]);
        } else {
            table.add_row(vec![
                Cell::new("📦 Moved"),
                Cell::new(self.report.moved).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("📄 Copied"),
                Cell::new(self.report.copied).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("♻️  Overwritten"),
                Cell::new(self.report.overwritten).fg(if self.report.overwritten == 0 {
                    Color::White
                } else {
                    Color::Red
                }),
            ]);
            table.add_row(vec![
                Cell::new("🧹 Emptied dirs removed"),
                Cell::new(self.report.removed_dirs),
            ]);
        }

        if let Some(backup) = &self.backup {
            table.add_row(vec![
                Cell::new("🛡️  Backup"),
                Cell::new(backup.display().to_string()),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

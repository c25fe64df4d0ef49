//! Terminal styling helpers for consistent CLI output

use console::{measure_text_width, style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", ">> ");
pub static CARD: Emoji<'_, '_> = Emoji("💾 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static ARROWS: Emoji<'_, '_> = Emoji("🔁 ", "");
pub static SHIELD: Emoji<'_, '_> = Emoji("🛡️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        CARD,
        style("VMC Renamer").cyan().bold()
    );
    println!(
        "    {}",
        style("GameCube memory card layouts, MCGCP ⇄ GCMCE").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(
    sd_root: &Path,
    out_root: &Path,
    direction: &str,
    backup_dir: Option<&Path>,
    dry_run: bool,
) {
    let line = "─".repeat(BOX_INNER_WIDTH);

    println!("    ┌{}┐", line);
    println!("    {}", box_row(&format!(" {}", style("⚙️  Configuration").cyan().bold())));
    println!("    ├{}┤", line);
    println!(
        "    {}",
        box_row(&format!("  {}Source:    {}", FOLDER, truncate_path(sd_root, 42)))
    );
    println!(
        "    {}",
        box_row(&format!("  {}Output:    {}", FOLDER, truncate_path(out_root, 42)))
    );
    println!(
        "    {}",
        box_row(&format!("  {}Direction: {}", ARROWS, truncate_string(direction, 42)))
    );
    if let Some(dir) = backup_dir {
        println!(
            "    {}",
            box_row(&format!("  {}Backup:    {}", SHIELD, truncate_path(dir, 42)))
        );
    }
    if dry_run {
        println!(
            "    {}",
            box_row(&format!("  {}", style("Dry run: nothing will be written").yellow()))
        );
    }
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("{}{}", SPARKLE, style("Done.").green().bold());
    println!();
}

// Helper functions

const BOX_INNER_WIDTH: usize = 58;

/// Wrap `content` in box borders, padding by displayed width so styling
/// escapes and wide glyphs don't push the right border out.
fn box_row(content: &str) -> String {
    let pad = BOX_INNER_WIDTH.saturating_sub(measure_text_width(content));
    format!("│{}{}│", content, " ".repeat(pad))
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - (max_len - 3)).collect();
        format!("...{}", tail)
    }
}

//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm applying a plan
pub fn confirm_apply(item_count: usize, mode: &str) -> Result<bool> {
    let message = format!("{} {} save file(s)?", mode, item_count);
    confirm_step(&message)
}

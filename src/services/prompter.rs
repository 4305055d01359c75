use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

/// The questions the uninstaller asks.
pub trait Prompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Returns the indices of the chosen items.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .context("Failed to read confirmation")?;
        // Esc means no.
        Ok(answer.unwrap_or(false))
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("{} (space to select, enter to submit)", prompt))
            .items(items)
            .interact_opt()
            .context("Failed to read selection")?;
        Ok(chosen.unwrap_or_default())
    }
}

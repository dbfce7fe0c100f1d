use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};

/// Interactive multi-select capability used by both the create and delete
/// flows. Returns the indices of the chosen options; choosing nothing is
/// valid and results in a no-op for the caller.
pub trait PromptSelect {
    fn select_many(&self, prompt: &str, options: &[String]) -> Result<Vec<usize>>;
}

pub struct InteractivePrompt {
    theme: ColorfulTheme,
}

impl InteractivePrompt {
    pub fn new() -> Self {
        InteractivePrompt {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSelect for InteractivePrompt {
    fn select_many(&self, prompt: &str, options: &[String]) -> Result<Vec<usize>> {
        let selections = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .interact()?;

        Ok(selections)
    }
}

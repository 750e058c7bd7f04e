//! [`Prompter`] implementations for the terminal.

use std::io::IsTerminal;

use dsforge_core::{
    application::{ApplicationError, Prompt, Prompter},
    error::DsforgeResult,
};

/// Pick the prompter for this run.
///
/// Prompts are shown only when `--yes` was not given, stdin is a terminal
/// and the `interactive` feature is compiled in.
pub fn for_session(yes: bool) -> Box<dyn Prompter> {
    if yes || !std::io::stdin().is_terminal() {
        return Box::new(NoPrompt);
    }

    #[cfg(feature = "interactive")]
    {
        Box::new(DialoguerPrompter::new())
    }
    #[cfg(not(feature = "interactive"))]
    {
        tracing::debug!("Built without the interactive feature, prompts disabled");
        Box::new(NoPrompt)
    }
}

/// Never prompts. Missing values fall back to defaults or fail.
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn is_interactive(&self) -> bool {
        false
    }

    fn ask(&self, prompt: &Prompt) -> DsforgeResult<String> {
        Err(ApplicationError::NonInteractive {
            field: prompt.key.clone(),
        }
        .into())
    }

    fn choose(&self, _message: &str, _items: &[String], default: usize) -> DsforgeResult<usize> {
        Ok(default)
    }
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{FuzzySelect, Input, Password, theme::ColorfulTheme};

    use super::*;

    #[derive(Default)]
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn failed(err: dialoguer::Error) -> ApplicationError {
        ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn is_interactive(&self) -> bool {
            true
        }

        fn ask(&self, prompt: &Prompt) -> DsforgeResult<String> {
            if prompt.secret {
                return Password::with_theme(&self.theme)
                    .with_prompt(&prompt.message)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| failed(e).into());
            }

            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(&prompt.message)
                .allow_empty(true);
            if let Some(default) = &prompt.default {
                input = input.default(default.clone());
            }
            input.interact_text().map_err(|e| failed(e).into())
        }

        fn choose(&self, message: &str, items: &[String], default: usize) -> DsforgeResult<usize> {
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(message)
                .items(items)
                .default(default)
                .interact()
                .map_err(|e| failed(e).into())
        }
    }
}

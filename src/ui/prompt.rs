//! Interactive prompts

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use log::debug;

use crate::context::validate::ValidationResult;
use crate::error::{KubeContextError, Result};

/// Interactive input surface consumed by the command handlers
pub trait Prompter {
    /// Let the user pick one of `options`
    fn select_one(&self, prompt: &str, options: &[String]) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Ask for free text, re-prompting until `validator` accepts it
    fn input(&self, prompt: &str, validator: &dyn Fn(&str) -> ValidationResult)
        -> Result<String>;
}

/// Prompter backed by the terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select_one(&self, prompt: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(KubeContextError::Prompt(format!(
                "nothing to choose from for '{}'",
                prompt
            )));
        }

        // Esc/q returns None
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?
            .ok_or(KubeContextError::UserCancelled)?;

        debug!("User selected '{}'", options[selection]);
        Ok(options[selection].clone())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?
            .ok_or(KubeContextError::UserCancelled)
    }

    fn input(
        &self,
        prompt: &str,
        validator: &dyn Fn(&str) -> ValidationResult,
    ) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|value: &String| validator(value.as_str()))
            .interact_text()?;
        Ok(value.trim().to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted prompter for driving interactive flows in tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// One scripted reply
    #[derive(Debug, Clone)]
    pub enum Answer {
        Select(String),
        Confirm(bool),
        Input(String),
        Cancel,
    }

    /// Replays answers in order and records every prompt shown
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<Answer>>,
        pub prompts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn next(&self, prompt: &str) -> Answer {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for prompt '{}'", prompt))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select_one(&self, prompt: &str, options: &[String]) -> Result<String> {
            match self.next(prompt) {
                Answer::Select(choice) => {
                    assert!(
                        options.contains(&choice),
                        "'{}' is not one of {:?}",
                        choice,
                        options
                    );
                    Ok(choice)
                }
                Answer::Cancel => Err(KubeContextError::UserCancelled),
                other => panic!("expected a selection for '{}', got {:?}", prompt, other),
            }
        }

        fn confirm(&self, prompt: &str) -> Result<bool> {
            match self.next(prompt) {
                Answer::Confirm(yes) => Ok(yes),
                Answer::Cancel => Err(KubeContextError::UserCancelled),
                other => panic!("expected a confirmation for '{}', got {:?}", prompt, other),
            }
        }

        fn input(
            &self,
            prompt: &str,
            validator: &dyn Fn(&str) -> ValidationResult,
        ) -> Result<String> {
            match self.next(prompt) {
                Answer::Input(value) => {
                    // A real terminal would re-prompt; surface it instead
                    validator(&value).map_err(KubeContextError::Prompt)?;
                    Ok(value.trim().to_string())
                }
                Answer::Cancel => Err(KubeContextError::UserCancelled),
                other => panic!("expected input for '{}', got {:?}", prompt, other),
            }
        }
    }
}

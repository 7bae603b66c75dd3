//! Terminal interaction seam

use truckchat_types::Result;

/// One entry of a numbered multiple-choice menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Token the user types to pick this option (e.g. "1")
    pub selector: String,
    /// Text shown next to the selector
    pub label: String,
    /// Value handed back to the caller
    pub value: String,
}

impl MenuOption {
    pub fn new(
        selector: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Standard Yes/No menu returning "yes" or "no"
    pub fn yes_no() -> Vec<MenuOption> {
        vec![
            MenuOption::new("1", "Yes", "yes"),
            MenuOption::new("2", "No", "no"),
        ]
    }
}

/// How an informational message is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Regular chatbot statement
    Info,
    /// Greeting and closing lines
    Greeting,
    /// Errors and refusals
    Warning,
}

/// Asks questions and shows messages
pub trait Prompter {
    /// Free-text question. Returns the answer without the line ending.
    fn query(&mut self, question: &str) -> Result<String>;

    /// Multiple-choice question. Returns the `value` of the chosen option.
    fn choose(&mut self, question: &str, options: &[MenuOption]) -> Result<String>;

    /// Statement with no expected response
    fn say(&mut self, message: &str, tone: Tone) -> Result<()>;
}

impl<T: Prompter + ?Sized> Prompter for &mut T {
    fn query(&mut self, question: &str) -> Result<String> {
        (**self).query(question)
    }

    fn choose(&mut self, question: &str, options: &[MenuOption]) -> Result<String> {
        (**self).choose(question, options)
    }

    fn say(&mut self, message: &str, tone: Tone) -> Result<()> {
        (**self).say(message, tone)
    }
}

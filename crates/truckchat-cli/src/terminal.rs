//! Terminal prompter: free-text questions, numbered menus, colored statements

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::Colorize;
use truckchat_domain::conversation::{MenuOption, Prompter, Tone};
use truckchat_types::{Error, Result};

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

fn find_option<'a>(options: &'a [MenuOption], answer: &str) -> Option<&'a MenuOption> {
    options
        .iter()
        .find(|o| o.selector == answer)
        .or_else(|| options.iter().find(|o| o.value.eq_ignore_ascii_case(answer)))
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn query(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question.bold())?;
        self.output.flush()?;
        self.read_answer()
    }

    fn choose(&mut self, question: &str, options: &[MenuOption]) -> Result<String> {
        loop {
            writeln!(self.output, "{}", question.bold())?;
            for option in options {
                writeln!(self.output, "[{}] {}", option.selector, option.label)?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match find_option(options, &answer) {
                Some(option) => return Ok(option.value.clone()),
                None => writeln!(self.output, "{}", "Enter a valid selection".red())?,
            }
        }
    }

    fn say(&mut self, message: &str, tone: Tone) -> Result<()> {
        let styled = match tone {
            Tone::Info => message.blue(),
            Tone::Greeting => message.cyan(),
            Tone::Warning => message.red(),
        };
        writeln!(self.output, "{}", styled)?;
        Ok(())
    }
}

// Line-based prompting with a pluggable input source and retry policy
// The binary reads from stdin; tests feed a ScriptedInput so every run is finite.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("Gave up on '{prompt}' after {attempts} invalid attempts")]
    AttemptsExhausted { prompt: String, attempts: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// Where answers come from. None signals that no more input will arrive.
pub trait InputSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

// Reads answers line by line from any buffered reader
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

// Canned answers, consumed front to back
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

// How many rejected answers a single question tolerates.
// None keeps asking until a valid answer arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unlimited() -> Self {
        Self { max_attempts: None }
    }

    pub fn limited(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts.max(1)),
        }
    }

    pub fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.map_or(false, |max| attempts >= max)
    }
}

pub struct Prompter<I, W> {
    input: I,
    output: W,
    policy: RetryPolicy,
}

impl<I: InputSource, W: Write> Prompter<I, W> {
    pub fn new(input: I, output: W, policy: RetryPolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn reject(&mut self, message: &str) -> Result<(), PromptError> {
        self.say(&format!("❌ {}", message))
    }

    // Show the prompt and return the raw answer, without validation
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.input
            .next_line()?
            .ok_or_else(|| PromptError::InputClosed {
                prompt: prompt.trim().to_string(),
            })
    }

    // Keep asking until the parser accepts an answer or the policy runs out.
    // The parser's error text is shown to the user before asking again.
    pub fn ask_with<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        let mut attempts = 0;
        loop {
            let answer = self.ask(prompt)?;
            attempts += 1;

            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    tracing::debug!(prompt = prompt.trim(), attempts, "rejected answer");
                    self.reject(&message)?;
                    if self.policy.is_exhausted(attempts) {
                        return Err(PromptError::AttemptsExhausted {
                            prompt: prompt.trim().to_string(),
                            attempts,
                        });
                    }
                }
            }
        }
    }

    pub fn ask_validated<F>(
        &mut self,
        prompt: &str,
        is_valid: F,
        error_message: &str,
    ) -> Result<String, PromptError>
    where
        F: Fn(&str) -> bool,
    {
        self.ask_with(prompt, |answer| {
            if is_valid(answer) {
                Ok(answer.to_string())
            } else {
                Err(error_message.to_string())
            }
        })
    }

    pub fn ask_date(&mut self, prompt: &str) -> Result<NaiveDate, PromptError> {
        self.ask_with(prompt, |answer| {
            parse_date(answer)
                .ok_or_else(|| "Invalid date format. Please use YYYY-MM-DD.".to_string())
        })
    }
}

// Strict YYYY-MM-DD: a four digit year, then one or two digits each for
// month and day. chrono's %Y alone also takes short or signed years.
pub fn parse_date(answer: &str) -> Option<NaiveDate> {
    let answer = answer.trim();
    let mut parts = answer.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(year, 4, 4) || !digits(month, 1, 2) || !digits(day, 1, 2) {
        return None;
    }

    NaiveDate::parse_from_str(answer, DATE_FORMAT).ok()
}

//! # Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Line-based prompts for the interactive extraction mode: yes/no confirmations and
//! free-text answers with an optional default. The prompter is generic over its reader
//! and writer so the interactive flows can be driven from tests with in-memory buffers.
//!
//! End of input (Ctrl-D, closed pipe) is treated as a cancellation rather than an empty
//! answer, so a detached stdin can never spin in a re-prompt loop.
//!
use crate::core::error::{ModAssetsError, Result};
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Reads answers from `input`, writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to terminal")
    }

    /// Asks a yes/no question until the answer is one of `y`, `yes`, `n`, `no`.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{message} (y/n): "))?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' or 'n'.")?,
            }
        }
    }

    /// Asks for a value. An empty answer takes `default`; without a default the
    /// question repeats until something is entered.
    pub fn input_with_default(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => {
                let answer = self.ask(&format!("{prompt} (default: {default}): "))?;
                Ok(if answer.is_empty() {
                    default.to_string()
                } else {
                    answer
                })
            }
            None => loop {
                let answer = self.ask(&format!("{prompt}: "))?;
                if !answer.is_empty() {
                    return Ok(answer);
                }
                self.say("Input cannot be empty.")?;
            },
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        if read == 0 {
            anyhow::bail!(ModAssetsError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

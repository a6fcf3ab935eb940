//! Interactive loop: read a line, tokenize it, print the tokens or the error.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::lexer::lexer::tokenize;

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub file_name: String,
    /// Print the offending line and a caret after each diagnostic.
    pub show_source: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from("zen >> "),
            file_name: String::from("stdin"),
            show_source: false,
        }
    }
}

/// Runs until `input` is exhausted.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            return Ok(());
        }

        evaluate_line(line.trim_end_matches(['\n', '\r']), output, config)?;
    }
}

pub fn evaluate_line<W: Write>(source: &str, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    match tokenize(source.to_string(), Some(config.file_name.clone())) {
        Ok(tokens) => {
            for token in &tokens {
                writeln!(output, "{}", token)?;
            }
        }
        Err(error) => {
            writeln!(output, "{}", error)?;
            if config.show_source {
                writeln!(output, "{}", error.context())?;
            }
        }
    }

    Ok(())
}

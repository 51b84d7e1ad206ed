//! Interactive prompting with validation and re-ask on invalid input.
//!
//! The reader and writer are injected so tests (and embedders) can drive
//! prompts without a terminal.

use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until `validate` accepts the trimmed answer.
    ///
    /// Invalid input re-asks; only a closed input stream is an error.
    pub fn ask(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> bool,
    ) -> anyhow::Result<String> {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input stream closed while waiting for {question}");
            }
            let answer = line.trim();
            if validate(answer) {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "invalid value, please try again")?;
        }
    }
}

impl Prompter<std::io::BufReader<std::io::Stdin>, std::io::Stderr> {
    /// Prompt on stderr, read from stdin. Keeps stdout clean for output
    /// that scripts may consume.
    pub fn stdio() -> Self {
        Self::new(std::io::BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn accepts_valid_input_first_try() {
        let mut p = prompter("library\n");
        let answer = p.ask("blueprint", stencil_domain::is_blueprint_name).unwrap();
        assert_eq!(answer, "library");
    }

    #[test]
    fn reasks_until_input_validates() {
        let mut p = prompter("Not Valid!\n\nweb-app\n");
        let answer = p.ask("blueprint", stencil_domain::is_blueprint_name).unwrap();
        assert_eq!(answer, "web-app");
        let transcript = String::from_utf8(p.output).unwrap();
        assert_eq!(transcript.matches("invalid value").count(), 2);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut p = prompter("  my-lib  \n");
        let answer = p
            .ask("package", |s| stencil_domain::validate_package_name(s).is_ok())
            .unwrap();
        assert_eq!(answer, "my-lib");
    }

    #[test]
    fn closed_stream_is_an_error() {
        let mut p = prompter("");
        assert!(p.ask("blueprint", |_| true).is_err());
    }
}

use std::io::{BufRead, Write};

use crate::core::{ProjectError, db::Hours};

/// Line-oriented prompts over any reader/writer pair.
///
/// Blank input is returned as `None` by every prompt. End of input reads as
/// a blank line. Bytes that are not UTF-8 are replaced, not rejected.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn text(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn int(&mut self, prompt: &str) -> anyhow::Result<Option<i32>> {
        match self.text(prompt)? {
            Some(text) => match text.parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(ProjectError::InvalidNumber(text).into()),
            },
            None => Ok(None),
        }
    }

    pub fn decimal(&mut self, prompt: &str) -> anyhow::Result<Option<Hours>> {
        match self.text(prompt)? {
            Some(text) => Ok(Some(text.parse::<Hours>()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn text_trims_and_writes_prompt() -> anyhow::Result<()> {
        let mut p = prompter("  Learn Go  \n");
        assert_eq!(p.text("Enter the project name")?.as_deref(), Some("Learn Go"));
        assert_eq!(
            String::from_utf8(p.into_output())?,
            "Enter the project name: "
        );
        Ok(())
    }

    #[test]
    fn blank_and_eof_are_absent() -> anyhow::Result<()> {
        let mut p = prompter("   \n");
        assert_eq!(p.text("x")?, None);
        assert_eq!(p.text("x")?, None);
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_read_lossily() -> anyhow::Result<()> {
        let mut p = Prompter::new(Cursor::new(b"\xffname\n".to_vec()), Vec::<u8>::new());
        assert_eq!(p.text("x")?.as_deref(), Some("\u{FFFD}name"));
        Ok(())
    }

    #[test]
    fn int_parses_or_reports_offending_text() -> anyhow::Result<()> {
        let mut p = prompter("42\n\nforty\n");
        assert_eq!(p.int("n")?, Some(42));
        assert_eq!(p.int("n")?, None);

        let err = p.int("n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::InvalidNumber(text)) if text == "forty"
        ));
        Ok(())
    }

    #[test]
    fn decimal_parses_or_reports_offending_text() -> anyhow::Result<()> {
        let mut p = prompter("5.00\n\nlots\n");
        assert_eq!(p.decimal("d")?, Some(Hours::from_hundredths(500)));
        assert_eq!(p.decimal("d")?, None);

        let err = p.decimal("d").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::InvalidDecimal(text)) if text == "lots"
        ));
        Ok(())
    }
}

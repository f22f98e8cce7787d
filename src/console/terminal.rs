//! Line-oriented terminal I/O for the console

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::{AppError, AppResult};

/// Reads answers from `R` and writes prompts and tables to `W`
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<BufReader<Stdin>, Stdout> {
    /// Terminal bound to the process' standard streams
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Read one line without its line terminator. `None` at end of input.
    pub async fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Show `marker` and wait for an answer
    pub async fn prompt(&mut self, marker: &str) -> AppResult<String> {
        self.write(marker).await?;
        self.read_line().await?.ok_or(AppError::InputClosed)
    }

    pub async fn write(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    pub async fn println(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_line_strips_terminators() {
        let mut terminal = Terminal::new("first\r\nsecond\n".as_bytes(), Vec::new());
        assert_eq!(terminal.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(terminal.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(terminal.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_line_across_chunks() {
        let input = tokio_test::io::Builder::new()
            .read(b"tri")
            .read(b"pod\nx")
            .read(b"\n")
            .build();
        let mut terminal = Terminal::new(BufReader::new(input), Vec::new());
        assert_eq!(terminal.read_line().await.unwrap().as_deref(), Some("tripod"));
        assert_eq!(terminal.read_line().await.unwrap().as_deref(), Some("x"));
        assert_eq!(terminal.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_prompt_writes_marker() {
        let mut terminal = Terminal::new("yes\n".as_bytes(), Vec::new());
        let answer = terminal.prompt(" CATA > ").await.unwrap();
        assert_eq!(answer, "yes");
        assert_eq!(terminal.output().as_slice(), b" CATA > ");
    }

    #[tokio::test]
    async fn test_prompt_at_end_of_input() {
        let mut terminal = Terminal::new("".as_bytes(), Vec::new());
        assert!(matches!(terminal.prompt("? ").await, Err(AppError::InputClosed)));
    }
}

//! Operator confirmation on the controlling terminal.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Question asked before an ephemeral workspace is deleted.
pub const CONFIRM_PROMPT: &str = "All files will be removed. OK?[Y/N]: ";

/// Whether `token` explicitly confirms deletion (`y` or `yes`, any case).
pub fn is_affirmative(token: &str) -> bool {
    matches!(token.to_lowercase().as_str(), "y" | "yes")
}

/// Source of operator answers.
#[allow(async_fn_in_trait, reason = "only used as a generic bound")]
pub trait Operator {
    /// Show `question` and read one whitespace-delimited token.
    ///
    /// A blank line yields an empty token. `None` means no answer can ever
    /// arrive (end of input or interrupt).
    async fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// [`Operator`] reading answers line by line from an input stream.
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
}

impl TerminalOperator<BufReader<Stdin>, Stdout> {
    /// Operator on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> Operator for TerminalOperator<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        let read = tokio::select! {
            read = self.input.read_line(&mut line) => read?,
            interrupted = tokio::signal::ctrl_c() => {
                interrupted?;
                self.output.write_all(b"\n").await?;
                self.output.flush().await?;
                return Ok(None);
            }
        };

        if read == 0 {
            return Ok(None);
        }

        let token = line.split_whitespace().next().unwrap_or_default();
        Ok(Some(token.to_string()))
    }
}

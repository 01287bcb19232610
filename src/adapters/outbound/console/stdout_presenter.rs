use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

/// StdoutPresenter adapter for writing the result line to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        writeln!(
            io::stdout(),
            "{}",
            content.if_supports_color(Stream::Stdout, |text| text.green())
        )
        .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

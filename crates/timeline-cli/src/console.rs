//! # Console Reporter
//!
//! Human-readable status lines. Each line starts with a glyph that carries
//! its severity; detail lines are indented under the line they belong to.
//! The reporter writes to any `io::Write`, so runs can be captured in tests.

use std::fmt::Display;
use std::io::{self, Write};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress information.
    Info,
    /// A stage passed.
    Success,
    /// A stage failed; the run is over.
    Failure,
    /// Advisory finding; the run continues.
    Warning,
    /// Every stage passed.
    Done,
}

impl Severity {
    /// Glyph printed in front of the line, including its trailing spacing.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Info => "🔍 ",
            Self::Success => "✅ ",
            Self::Failure => "❌ ",
            // The warning sign renders narrow in most terminals.
            Self::Warning => "⚠️  ",
            Self::Done => "🎉 ",
        }
    }
}

/// Writes status lines to an output stream.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one status line.
    pub fn line(&mut self, severity: Severity, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}{message}", severity.glyph())
    }

    /// Write an indented detail line under the previous status line.
    pub fn detail(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "   {message}")
    }

    pub fn info(&mut self, message: impl Display) -> io::Result<()> {
        self.line(Severity::Info, message)
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        self.line(Severity::Success, message)
    }

    pub fn failure(&mut self, message: impl Display) -> io::Result<()> {
        self.line(Severity::Failure, message)
    }

    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        self.line(Severity::Warning, message)
    }

    pub fn done(&mut self, message: impl Display) -> io::Result<()> {
        self.line(Severity::Done, message)
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

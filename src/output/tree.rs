//! Tree formatter for console and file output
//!
//! `TreeFormatter` writes render lines to any `WriteColor` sink. Styling is
//! always requested; sinks without color support (`NoColor`,
//! `Buffer::no_color`, a `Never` stream) silently drop it, so the text is
//! the same either way.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{RenderOutput, Totals};

use super::line::{EntryStyle, RenderLine};

/// Streaming tree formatter.
pub struct TreeFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, text: &str, style: EntryStyle) -> io::Result<()> {
        match style.color_spec() {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", text)?;
                self.out.reset()
            }
            None => write!(self.out, "{}", text),
        }
    }
}

impl<W: WriteColor> RenderOutput for TreeFormatter<W> {
    fn header(&mut self, root: &Path) -> io::Result<()> {
        self.write_styled(&root.display().to_string(), EntryStyle::Directory)?;
        writeln!(self.out)
    }

    fn line(&mut self, line: &RenderLine) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector())?;
        self.write_styled(&line.label, line.style)?;

        if let Some(target) = &line.target {
            write!(self.out, " -> {}", target)?;
        }

        if let Some(suffix) = &line.suffix {
            write!(self.out, "  ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(self.out, "[{}]", suffix)?;
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self, totals: &Totals) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", totals.summary_line())?;
        self.out.flush()
    }
}

//! Count-mode output: one `ext: count` line per bucket, then the summary

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::ExtensionHistogram;

/// Write an extension histogram to `out`.
pub fn write_histogram<W: WriteColor + ?Sized>(
    out: &mut W,
    histogram: &ExtensionHistogram,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(out, "{}", histogram.root.display())?;
    out.reset()?;
    writeln!(out)?;

    let mut ext_color = ColorSpec::new();
    ext_color.set_fg(Some(Color::Cyan));

    for bucket in &histogram.buckets {
        out.set_color(&ext_color)?;
        write!(out, "{}", bucket.extension)?;
        out.reset()?;
        writeln!(out, ": {}", bucket.count)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", histogram.totals.summary_line())?;
    out.flush()
}

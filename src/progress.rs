//! Console progress indicator.
//!
//! Each report ends in `\r` so the next one overwrites it in place. Console
//! output is informational only: write errors are ignored and never abort
//! generation.

use std::io::Write;
use std::path::Path;

pub struct ConsoleProgress<W: Write> {
    out: W,
    quiet: bool,
    /// A report ending in `\r` is on screen.
    line_open: bool,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            quiet: false,
            line_open: false,
        }
    }

    /// Swallows every message.
    pub fn quiet(out: W) -> Self {
        Self {
            out,
            quiet: true,
            line_open: false,
        }
    }

    pub fn start(&mut self, line_count: u64) {
        if self.quiet {
            return;
        }
        let mut buf = itoa::Buffer::new();
        let _ = writeln!(
            self.out,
            "Generating file with {} lines...",
            buf.format(line_count)
        );
        let _ = self.out.flush();
    }

    pub fn report(&mut self, line: u64) {
        if self.quiet {
            return;
        }
        let mut buf = itoa::Buffer::new();
        let _ = self.out.write_all(b"Generated ");
        let _ = self.out.write_all(buf.format(line).as_bytes());
        let _ = self.out.write_all(b" lines\r");
        let _ = self.out.flush();
        self.line_open = true;
    }

    /// Ends an open progress line so a following error message starts clean.
    pub fn abort(&mut self) {
        if !self.line_open {
            return;
        }
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
        self.line_open = false;
    }

    pub fn finish(&mut self, path: &Path) {
        if self.quiet {
            return;
        }
        let _ = writeln!(self.out, "\nDone. File created: {}", path.display());
        let _ = self.out.flush();
        self.line_open = false;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

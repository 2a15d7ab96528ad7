use crate::crawler::TargetReport;
use crate::output::traits::{EndpointSink, OutputError, OutputResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes endpoints one per line
///
/// Lines go to the primary writer (stdout in the CLI) and, when configured,
/// are mirrored to a file.
pub struct LineWriter<W: Write> {
    primary: W,
    mirror: Option<BufWriter<File>>,
    lines_written: u64,
}

impl<W: Write> LineWriter<W> {
    /// Creates a writer with no mirror file
    pub fn new(primary: W) -> Self {
        Self {
            primary,
            mirror: None,
            lines_written: 0,
        }
    }

    /// Mirrors every line to a newly created file at `path`
    pub fn with_mirror(mut self, path: &Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|e| {
            OutputError::Write(format!("cannot create {}: {}", path.display(), e))
        })?;
        self.mirror = Some(BufWriter::new(file));
        Ok(self)
    }

    /// Number of endpoint lines written so far
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consumes the writer, returning the primary writer
    pub fn into_inner(self) -> W {
        self.primary
    }

    fn write_line(&mut self, line: &str) -> OutputResult<()> {
        writeln!(self.primary, "{}", line)?;
        if let Some(mirror) = self.mirror.as_mut() {
            writeln!(mirror, "{}", line)?;
        }
        self.lines_written += 1;
        Ok(())
    }
}

impl<W: Write> EndpointSink for LineWriter<W> {
    fn write_report(&mut self, report: &TargetReport) -> OutputResult<()> {
        for endpoint in &report.endpoints {
            self.write_line(endpoint)?;
        }
        // Piped consumers should see each target as soon as it is done
        self.primary.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.primary.flush()?;
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.flush()?;
        }
        Ok(())
    }
}

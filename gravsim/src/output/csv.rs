//! Comma-separated trajectory table
//!
//! One header line `Time,Object,Mass,X,Y,VX,VY,AX,AY`, then one row per body
//! per step. Time and kinematics carry 3 decimals, mass 6.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, SimError};
use crate::output::sink::SnapshotSink;
use crate::simulation::snapshot::Snapshot;

pub const CSV_HEADER: &str = "Time,Object,Mass,X,Y,VX,VY,AX,AY";

pub struct CsvSink<W: Write> {
    out: W,
    rows: usize,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SimError::SinkOpen {
            path: PathBuf::from(path),
            source,
        })?;
        info!("writing snapshots to {}", path.display());
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{CSV_HEADER}")?;
        Ok(Self { out, rows: 0 })
    }

    /// Data rows written so far, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format one data row (no trailing newline)
pub fn csv_row(s: &Snapshot) -> String {
    format!(
        "{:.3},{},{:.6},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
        s.time, s.object, s.mass, s.x.x, s.x.y, s.v.x, s.v.y, s.a.x, s.a.y
    )
}

impl<W: Write> SnapshotSink for CsvSink<W> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        writeln!(self.out, "{}", csv_row(snapshot))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

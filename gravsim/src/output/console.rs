//! Human-readable progress stream, one block per time step:
//!
//! ```text
//! Time: 0.010 seconds
//! Body 1: (0.030, -5.000)
//! Body 2: (0.000, 0.000)
//!
//! ```

use std::io::{self, Stdout, Write};

use crate::error::Result;
use crate::output::sink::SnapshotSink;
use crate::simulation::snapshot::Snapshot;

pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::BufWriter<Stdout>> {
    pub fn stdout() -> Self {
        Self::new(io::BufWriter::new(io::stdout()))
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for ConsoleSink<W> {
    fn begin_step(&mut self, _step: usize, time: f64) -> Result<()> {
        writeln!(self.out, "Time: {time:.3} seconds")?;
        Ok(())
    }

    fn record(&mut self, s: &Snapshot) -> Result<()> {
        writeln!(self.out, "Body {}: ({:.3}, {:.3})", s.object, s.x.x, s.x.y)?;
        Ok(())
    }

    fn end_step(&mut self, _step: usize, _time: f64) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

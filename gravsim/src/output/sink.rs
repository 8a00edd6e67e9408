//! The seam between the engine and anything that consumes its snapshots

use crate::error::Result;
use crate::simulation::snapshot::Snapshot;

/// Consumer of the engine's per-step records
///
/// For every step (including step 0) the engine calls `begin_step`, then
/// `record` once per body in slot order, then `end_step`. `finish` runs once
/// after the last step. Any error aborts the run.
pub trait SnapshotSink {
    fn begin_step(&mut self, _step: usize, _time: f64) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, snapshot: &Snapshot) -> Result<()>;

    fn end_step(&mut self, _step: usize, _time: f64) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn begin_step(&mut self, step: usize, time: f64) -> Result<()> {
        (**self).begin_step(step, time)
    }

    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        (**self).record(snapshot)
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<()> {
        (**self).end_step(step, time)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Feed two sinks at once, `.0` first
impl<A: SnapshotSink, B: SnapshotSink> SnapshotSink for (A, B) {
    fn begin_step(&mut self, step: usize, time: f64) -> Result<()> {
        self.0.begin_step(step, time)?;
        self.1.begin_step(step, time)
    }

    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.0.record(snapshot)?;
        self.1.record(snapshot)
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<()> {
        self.0.end_step(step, time)?;
        self.1.end_step(step, time)
    }

    fn finish(&mut self) -> Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Discards everything, for headless runs that only need the final state
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _snapshot: &Snapshot) -> Result<()> {
        Ok(())
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> FnSink<F>
where
    F: FnMut(&Snapshot) -> Result<()>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> SnapshotSink for FnSink<F>
where
    F: FnMut(&Snapshot) -> Result<()>,
{
    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        (self.0)(snapshot)
    }
}

/// Fans every call out to several sinks, stopping at the first error
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn SnapshotSink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink
    pub fn with<S>(mut self, sink: S) -> Self
    where
        S: SnapshotSink + 'static,
    {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn push(&mut self, sink: Box<dyn SnapshotSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl SnapshotSink for MultiSink {
    fn begin_step(&mut self, step: usize, time: f64) -> Result<()> {
        for sink in &mut self.sinks {
            sink.begin_step(step, time)?;
        }
        Ok(())
    }

    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        for sink in &mut self.sinks {
            sink.record(snapshot)?;
        }
        Ok(())
    }

    fn end_step(&mut self, step: usize, time: f64) -> Result<()> {
        for sink in &mut self.sinks {
            sink.end_step(step, time)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.finish()?;
        }
        Ok(())
    }
}

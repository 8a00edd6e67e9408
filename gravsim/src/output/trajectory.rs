//! In-memory recording of a run

use crate::error::Result;
use crate::output::sink::SnapshotSink;
use crate::simulation::snapshot::Snapshot;
use crate::simulation::states::NVec2;

/// Every snapshot of a run, in emission order (step-major, slot-minor)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub records: Vec<Snapshot>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct bodies seen
    pub fn body_count(&self) -> usize {
        self.records.iter().map(|s| s.object).max().unwrap_or(0)
    }

    /// All records of one body (1-based `object`), in step order
    pub fn track(&self, object: usize) -> impl Iterator<Item = &Snapshot> + '_ {
        self.records.iter().filter(move |s| s.object == object)
    }

    /// Positions of one body over the run
    pub fn positions(&self, object: usize) -> Vec<NVec2> {
        self.track(object).map(|s| s.x).collect()
    }

    /// Largest distance a body got from where it started
    pub fn max_displacement(&self, object: usize) -> f64 {
        let mut track = self.track(object);
        let Some(first) = track.next() else {
            return 0.0;
        };
        track
            .map(|s| (s.x - first.x).norm())
            .fold(0.0, f64::max)
    }
}

impl SnapshotSink for Trajectory {
    fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.records.push(*snapshot);
        Ok(())
    }
}

pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::{Result, SimError};

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, SingularityPolicy, G_SI, MAX_STEPS};
pub use simulation::forces::{accumulate_forces, Coincident, Force, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Engine, RunSummary};
pub use simulation::scenario::Scenario;
pub use simulation::snapshot::Snapshot;

pub use configuration::config::{BodyConfig, OutputConfig, ParametersConfig, ScenarioConfig, SingularityConfig};

pub use output::sink::{FnSink, MultiSink, NullSink, SnapshotSink};
pub use output::csv::{CsvSink, CSV_HEADER};
pub use output::console::ConsoleSink;
pub use output::trajectory::Trajectory;

#[cfg(feature = "viewer")]
pub use visualization::trajectory_vis2d::run_2d;

pub use benchmark::benchmark::{bench_direct, bench_direct_sizes};

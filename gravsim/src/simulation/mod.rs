pub mod states;
pub mod params;
pub mod snapshot;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
pub mod diagnostics;

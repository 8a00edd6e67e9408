use std::fs::File;
use std::path::PathBuf;

use gravsim::{
    ConsoleSink, CsvSink, Engine, MultiSink, NVec2, Parameters, Scenario, ScenarioConfig, SimError, SingularityConfig,
    SingularityPolicy, SnapshotSink, Trajectory, CSV_HEADER,
};

/// Run `cfg` into an in-memory CSV table and return its text
fn csv_text(cfg: ScenarioConfig) -> String {
    let engine = Scenario::build_scenario(cfg).into_engine().unwrap();
    let mut sink = CsvSink::new(Vec::new()).unwrap();
    engine.run(&mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

fn single_body(vx: f64, t_end: f64) -> ScenarioConfig {
    let yaml = format!(
        "parameters:\n  time_step: 0.01\n  simulation_time: {t_end}\nbodies:\n  - x: [0.0, 0.0]\n    v: [{vx}, 0.0]\n    m: 1.0\n"
    );
    ScenarioConfig::from_yaml_str(&yaml).unwrap()
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn yaml_defaults_fill_in() {
    let cfg = ScenarioConfig::from_yaml_str("bodies:\n  - x: [1.0, 2.0]\n    m: 5.0\n").unwrap();

    assert_eq!(cfg.parameters.time_step, 0.01);
    assert_eq!(cfg.parameters.simulation_time, 5.0);
    assert_eq!(cfg.parameters.G, 6.67430e-11);
    assert_eq!(cfg.parameters.singularity, SingularityConfig::Reject);
    assert_eq!(cfg.output.csv, Some(PathBuf::from("simulation_data.csv")));
    assert!(cfg.output.console);
    assert_eq!(cfg.bodies[0].v, [0.0, 0.0]);
}

#[test]
fn yaml_full_scenario() {
    let yaml = r#"
parameters:
  time_step: 0.001
  simulation_time: 2.0
  G: 1.0
  singularity: propagate
output:
  csv: null
  console: false
bodies:
  - x: [0.0, -5.0]
    v: [3.0, 0.0]
    m: 1000.0
  - x: [0.0, 0.0]
    m: 1.0e12
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.output.csv, None);
    assert!(!cfg.output.console);

    let scenario = Scenario::build_scenario(cfg);
    assert_eq!(scenario.parameters.h0, 0.001);
    assert_eq!(scenario.parameters.t_end, 2.0);
    assert_eq!(scenario.parameters.G, 1.0);
    assert_eq!(scenario.parameters.singularity, SingularityPolicy::Propagate);
    assert_eq!(scenario.parameters.step_count(), 2000);
    assert_eq!(scenario.system.bodies[0].x, NVec2::new(0.0, -5.0));
    assert_eq!(scenario.system.bodies[0].v, NVec2::new(3.0, 0.0));
    assert_eq!(scenario.system.bodies[1].m, 1e12);
    assert_eq!(scenario.system.t, 0.0);
}

#[test]
fn yaml_unknown_fields_rejected() {
    let err = ScenarioConfig::from_yaml_str("bodies:\n  - x: [0.0, 0.0]\n    m: 1.0\n    radius: 2.0\n").unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));

    let err = ScenarioConfig::from_yaml_str("bodies:\n  - x: [0.0, 0.0, 1.0]\n    m: 1.0\n").unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
}

#[test]
fn bundled_reference_scenario_matches_builtin() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("reference.yaml");
    let cfg = ScenarioConfig::from_reader(File::open(path).unwrap()).unwrap();
    let builtin = ScenarioConfig::reference();

    assert_eq!(cfg.bodies, builtin.bodies);
    assert_eq!(cfg.output, builtin.output);
    assert_eq!(cfg.parameters.time_step, builtin.parameters.time_step);
    assert_eq!(cfg.parameters.simulation_time, builtin.parameters.simulation_time);
    assert_eq!(cfg.parameters.G, builtin.parameters.G);
}

#[test]
fn bundled_orbit_scenario_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("two_body_orbit.yaml");
    let cfg = ScenarioConfig::from_reader(File::open(path).unwrap()).unwrap();
    let engine = Scenario::build_scenario(cfg).into_engine().unwrap();

    assert_eq!(engine.system().len(), 2);
    assert_eq!(engine.step_count(), 30000);
}

#[test]
fn scenario_with_no_bodies_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("bodies: []\n").unwrap();
    let err = Scenario::build_scenario(cfg).into_engine().err().unwrap();
    assert!(matches!(err, SimError::InvalidConfig(_)));
}

// ==================================================================================
// Sink tests
// ==================================================================================

#[test]
fn csv_header_and_row_count() {
    let text = csv_text(ScenarioConfig::reference());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[0], "Time,Object,Mass,X,Y,VX,VY,AX,AY");
    assert_eq!(lines.len(), 1 + 1503);
}

#[test]
fn csv_rows_use_reference_formatting() {
    let text = csv_text(ScenarioConfig::reference());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "0.000,1,1000.000000,0.000,-5.000,3.000,0.000,0.000,0.000");
    assert_eq!(lines[2], "0.000,2,1000000000000.000000,0.000,0.000,0.000,0.000,0.000,0.000");
    assert_eq!(lines[3], "0.000,3,1000.000000,0.000,2.000,-5.600,0.000,0.000,0.000");

    // step 1, body 1: pulled straight up by the anchor, G * 1e12 / 25
    assert_eq!(lines[4], "0.010,1,1000.000000,0.030,-5.000,3.000,0.027,0.000,2.670");

    let last = lines.last().unwrap();
    assert!(last.starts_with("5.000,3,"), "last row {last}");
}

#[test]
fn csv_sink_counts_rows() {
    let engine = Scenario::build_scenario(single_body(1.0, 0.1)).into_engine().unwrap();
    let mut sink = CsvSink::new(Vec::new()).unwrap();
    engine.run(&mut sink).unwrap();

    assert_eq!(sink.rows(), 11);
}

#[test]
fn csv_create_in_missing_directory_fails() {
    let path = std::env::temp_dir().join("gravsim-no-such-dir").join("deeper").join("out.csv");
    let err = CsvSink::create(&path).err().unwrap();

    match err {
        SimError::SinkOpen { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected SinkOpen, got {other}"),
    }
}

#[test]
fn csv_create_writes_file() {
    let path = std::env::temp_dir().join(format!("gravsim-test-{}.csv", std::process::id()));
    {
        let engine = Scenario::build_scenario(single_body(2.0, 0.02)).into_engine().unwrap();
        let mut sink = CsvSink::create(&path).unwrap();
        engine.run(&mut sink).unwrap();
    }
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "0.020,1,1.000000,0.040,0.000,2.000,0.000,0.000,0.000");
}

#[test]
fn console_groups_by_time_step() {
    let engine = Scenario::build_scenario(single_body(1.0, 0.01)).into_engine().unwrap();
    let mut sink = ConsoleSink::new(Vec::new());
    engine.run(&mut sink).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        text,
        "Time: 0.000 seconds\nBody 1: (0.000, 0.000)\n\nTime: 0.010 seconds\nBody 1: (0.010, 0.000)\n\n"
    );
}

#[test]
fn console_lists_every_body_per_block() {
    let mut cfg = ScenarioConfig::reference();
    cfg.parameters.simulation_time = 0.01;
    let engine = Scenario::build_scenario(cfg).into_engine().unwrap();
    let mut sink = ConsoleSink::new(Vec::new());
    engine.run(&mut sink).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].lines().count(), 4);
    assert!(blocks[1].starts_with("Time: 0.010 seconds\nBody 1: (0.030, -5.000)"));
}

#[test]
fn multi_sink_feeds_everything() {
    let engine = Engine::new(Scenario::build_scenario(ScenarioConfig::reference()).system, Parameters::default()).unwrap();
    let mut sinks = MultiSink::new().with(CsvSink::new(Vec::new()).unwrap());
    let mut trajectory = Trajectory::new();

    engine.run(&mut (&mut sinks, &mut trajectory)).unwrap();

    assert_eq!(sinks.len(), 1);
    assert_eq!(trajectory.len(), 1503);
}

#[test]
fn trajectory_tracks_and_displacement() {
    let engine = Scenario::build_scenario(single_body(3.0, 1.0)).into_engine().unwrap();
    let mut trajectory = Trajectory::new();
    engine.run(&mut trajectory).unwrap();

    assert_eq!(trajectory.track(1).count(), 101);
    assert_eq!(trajectory.track(2).count(), 0);
    assert!((trajectory.max_displacement(1) - 3.0).abs() < 1e-9);
    assert_eq!(trajectory.max_displacement(2), 0.0);

    let speeds: Vec<f64> = trajectory.track(1).map(|s| s.speed()).collect();
    assert!(speeds.iter().all(|v| (v - 3.0).abs() < 1e-12));
    assert!(trajectory.track(1).all(|s| s.acceleration_magnitude() == 0.0));
}

#[test]
fn finish_is_called_once() {
    struct Counting {
        begins: usize,
        ends: usize,
        finished: usize,
    }
    impl SnapshotSink for Counting {
        fn begin_step(&mut self, _step: usize, _time: f64) -> gravsim::Result<()> {
            self.begins += 1;
            Ok(())
        }
        fn record(&mut self, _s: &gravsim::Snapshot) -> gravsim::Result<()> {
            Ok(())
        }
        fn end_step(&mut self, _step: usize, _time: f64) -> gravsim::Result<()> {
            self.ends += 1;
            Ok(())
        }
        fn finish(&mut self) -> gravsim::Result<()> {
            self.finished += 1;
            Ok(())
        }
    }

    let engine = Scenario::build_scenario(single_body(1.0, 0.5)).into_engine().unwrap();
    let mut sink = Counting { begins: 0, ends: 0, finished: 0 };
    engine.run(&mut sink).unwrap();

    assert_eq!((sink.begins, sink.ends, sink.finished), (51, 51, 1));
}

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::output::trajectory::Trajectory;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Recorded run, one frame per step, replayed one frame per render tick
#[derive(Resource)]
struct Replay {
    frames: Vec<Vec<Vec2>>, // frames[step][slot], world units
    masses: Vec<f64>,
    cursor: usize,
    scale: f32, // world units -> pixels
}

impl Replay {
    fn from_trajectory(trajectory: &Trajectory) -> Self {
        let n = trajectory.body_count();
        let mut frames: Vec<Vec<Vec2>> = Vec::new();
        let mut masses = vec![0.0; n];

        for s in &trajectory.records {
            if frames.len() <= s.step {
                frames.resize(s.step + 1, vec![Vec2::ZERO; n]);
            }
            frames[s.step][s.object - 1] = Vec2::new(s.x.x as f32, s.x.y as f32);
            masses[s.object - 1] = s.mass;
        }

        // fit the whole run into roughly 300 px around the origin
        let extent = frames
            .iter()
            .flatten()
            .map(|p| p.x.abs().max(p.y.abs()))
            .filter(|e| e.is_finite())
            .fold(1e-6_f32, f32::max);

        Self {
            frames,
            masses,
            cursor: 0,
            scale: 300.0 / extent,
        }
    }
}

/// Open a window and replay `trajectory`
pub fn run_2d(trajectory: Trajectory) {
    println!("run_2d: replaying {} snapshots of {} bodies", trajectory.len(), trajectory.body_count());

    App::new()
        .insert_resource(Replay::from_trajectory(&trajectory))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_replay_system, sync_transforms_system, draw_trails_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, replay: Res<Replay>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let Some(first) = replay.frames.first() else {
        return;
    };
    let m_min = replay.masses.iter().cloned().fold(f64::INFINITY, f64::min);

    for (i, p) in first.iter().enumerate() {
        // marker grows with log mass so a 1e12 kg body doesn't swallow the view
        let size = ((replay.masses[i] / m_min).ln() * 5.0 + 10.0) as f32;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(size * 0.5))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(p.x * replay.scale, p.y * replay.scale, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_replay_system(mut replay: ResMut<Replay>) {
    if replay.cursor + 1 < replay.frames.len() {
        replay.cursor += 1;
    }
}

fn sync_transforms_system(replay: Res<Replay>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let Some(frame) = replay.frames.get(replay.cursor) else {
        return;
    };
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = frame.get(*i) {
            transform.translation.x = p.x * replay.scale;
            transform.translation.y = p.y * replay.scale;
        }
    }
}

fn draw_trails_system(replay: Res<Replay>, mut gizmos: Gizmos) {
    if replay.frames.is_empty() {
        return;
    }
    let shown = &replay.frames[..=replay.cursor];
    for i in 0..replay.masses.len() {
        let points = shown.iter().map(|f| f[i] * replay.scale);
        gizmos.linestrip_2d(points, Color::rgba(1.0, 1.0, 1.0, 0.35));
    }
}

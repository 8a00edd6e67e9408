pub mod trajectory_vis2d;

//! The built-in "Turn 1" rally.
//!
//! One ball and twelve players, seven waypoints each, ten seconds apart.
//! Players 1-6 start on the left half of the court (red team), players
//! 7-12 on the right half (blue team). The ball flies on the depth plane
//! 8.0, players stand on 7.0.

use glam::DVec3;

use crate::animation::{EntityRole, Waypoint};
use crate::scene::config::{EntityConfig, SceneConfig};
use crate::settings::AnimatorSettings;

pub const WAYPOINT_INTERVAL_MS: u64 = 10_000;
pub const WAYPOINTS_PER_TRACK: usize = 7;
pub const PLAYER_COUNT: usize = 12;
/// Players with a jersey number up to this one play on the left.
pub const PLAYERS_PER_TEAM: usize = 6;

pub const BALL_ID: &str = "ball";

const BALL_PATH: [[f64; 3]; WAYPOINTS_PER_TRACK] = [
    [-3.87, 1.0, 8.0],
    [2.15, 1.5, 8.0],
    [-4.25, 1.2, 8.0],
    [0.95, 1.6, 8.0],
    [3.85, 1.1, 8.0],
    [-2.15, 1.4, 8.0],
    [1.75, 1.7, 8.0],
];

const PLAYER_PATHS: [[[f64; 3]; WAYPOINTS_PER_TRACK]; PLAYER_COUNT] = [
    // #1
    [
        [-5.0, -1.65, 7.0],
        [-4.53, 2.85, 7.0],
        [-2.91, -1.23, 7.0],
        [-0.93, -0.98, 7.0],
        [-1.77, 0.76, 7.0],
        [-0.98, -2.12, 7.0],
        [-1.15, 2.01, 7.0],
    ],
    // #2
    [
        [-4.0, 1.34, 7.0],
        [-3.78, 1.65, 7.0],
        [-1.35, -2.54, 7.0],
        [-3.27, 0.45, 7.0],
        [-3.89, -2.12, 7.0],
        [-1.65, 1.23, 7.0],
        [-3.54, -0.87, 7.0],
    ],
    // #3
    [
        [-7.0, -2.78, 7.0],
        [-4.87, 0.67, 7.0],
        [-4.43, -1.54, 7.0],
        [-1.23, 2.11, 7.0],
        [-4.03, 1.98, 7.0],
        [-3.76, 0.78, 7.0],
        [-4.23, -1.45, 7.0],
    ],
    // #4
    [
        [-1.0, -0.67, 7.0],
        [-1.12, -1.43, 7.0],
        [-2.15, 1.24, 7.0],
        [-4.12, -2.01, 7.0],
        [-1.34, 1.12, 7.0],
        [-4.78, 2.45, 7.0],
        [-1.98, -1.76, 7.0],
    ],
    // #5
    [
        [-2.0, 2.23, 7.0],
        [-0.65, -0.89, 7.0],
        [-1.89, 0.76, 7.0],
        [-2.45, -2.31, 7.0],
        [-4.65, 1.98, 7.0],
        [-2.54, -1.76, 7.0],
        [-0.89, 2.65, 7.0],
    ],
    // #6
    [
        [-3.0, -2.11, 7.0],
        [-3.27, 0.76, 7.0],
        [-4.78, -0.34, 7.0],
        [-3.92, 1.45, 7.0],
        [-2.11, -2.56, 7.0],
        [-3.14, 0.56, 7.0],
        [-2.32, -1.12, 7.0],
    ],
    // #7
    [
        [5.0, 0.56, 7.0],
        [2.98, -1.23, 7.0],
        [1.98, 1.45, 7.0],
        [4.12, -0.98, 7.0],
        [0.56, 2.45, 7.0],
        [3.23, -1.12, 7.0],
        [1.89, 1.23, 7.0],
    ],
    // #8
    [
        [4.0, -0.98, 7.0],
        [4.23, 1.34, 7.0],
        [3.12, -2.65, 7.0],
        [1.45, 2.45, 7.0],
        [1.87, -1.23, 7.0],
        [0.98, 1.12, 7.0],
        [3.12, -0.76, 7.0],
    ],
    // #9
    [
        [7.0, 2.76, 7.0],
        [0.54, 1.56, 7.0],
        [4.45, -2.01, 7.0],
        [3.23, 1.12, 7.0],
        [2.98, -1.67, 7.0],
        [4.78, 2.12, 7.0],
        [4.45, 1.56, 7.0],
    ],
    // #10
    [
        [1.0, -1.45, 7.0],
        [3.89, 0.98, 7.0],
        [2.65, 2.12, 7.0],
        [2.34, -1.76, 7.0],
        [4.11, 1.54, 7.0],
        [1.12, -2.43, 7.0],
        [2.34, 0.67, 7.0],
    ],
    // #11
    [
        [2.0, 1.32, 7.0],
        [1.12, -2.87, 7.0],
        [4.23, 1.65, 7.0],
        [4.78, -1.76, 7.0],
        [0.98, 0.23, 7.0],
        [2.54, 1.76, 7.0],
        [4.12, -0.45, 7.0],
    ],
    // #12
    [
        [3.0, -1.23, 7.0],
        [2.45, 1.54, 7.0],
        [0.87, -0.12, 7.0],
        [3.65, 2.34, 7.0],
        [4.56, -2.23, 7.0],
        [3.76, 1.45, 7.0],
        [0.54, 0.98, 7.0],
    ],
];

/// Track id of the player wearing `jersey` (1-based).
#[must_use]
pub fn player_id(jersey: u32) -> String {
    format!("player-{jersey}")
}

/// The rally as scene configuration, played with `settings`.
#[must_use]
pub fn turn_one(settings: AnimatorSettings) -> SceneConfig {
    let mut entities = Vec::with_capacity(PLAYER_COUNT + 1);

    for (index, path) in PLAYER_PATHS.iter().enumerate() {
        let jersey = index as u32 + 1;
        let role = if index < PLAYERS_PER_TEAM {
            EntityRole::PlayerLeft
        } else {
            EntityRole::PlayerRight
        };
        entities.push(EntityConfig {
            id: player_id(jersey),
            role,
            jersey: Some(jersey),
            waypoints: waypoints(path),
        });
    }

    entities.push(EntityConfig {
        id: BALL_ID.to_string(),
        role: EntityRole::Ball,
        jersey: None,
        waypoints: waypoints(&BALL_PATH),
    });

    SceneConfig {
        name: "Turn 1".to_string(),
        settings,
        entities,
    }
}

fn waypoints(path: &[[f64; 3]; WAYPOINTS_PER_TRACK]) -> Vec<Waypoint> {
    path.iter()
        .enumerate()
        .map(|(i, &p)| Waypoint::new(i as u64 * WAYPOINT_INTERVAL_MS, DVec3::from_array(p)))
        .collect()
}

//! Scene Configuration Tests
//!
//! Tests for:
//! - The built-in "Turn 1" rally
//! - JSON loading, defaults and validation
//! - Building animators for both strategies

use glam::DVec3;

use courtside::CourtsideError;
use courtside::animation::{ClockState, EntityRole};
use courtside::scene::SceneConfig;
use courtside::scene::volleyball::{self, BALL_ID, PLAYER_COUNT, WAYPOINT_INTERVAL_MS};
use courtside::settings::{AnimatorSettings, RandomWalkSettings, Strategy};
use courtside::utils::time::ManualTimeSource;

const EPSILON: f64 = 1e-9;

fn vec3_approx(a: DVec3, b: DVec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SERVE_JSON: &str = r#"{
    "name": "Serve",
    "entities": [
        {
            "id": "ball",
            "role": "ball",
            "waypoints": [
                { "timestamp": 0, "position": [-3.87, 1, 8] },
                { "timestamp": 10000, "position": [2.15, 1.5, 8] }
            ]
        },
        {
            "id": "player-7",
            "role": "player-right",
            "jersey": 7,
            "waypoints": [
                { "timestamp": 0, "position": [5, 0.56, 7] }
            ]
        }
    ]
}"#;

// ============================================================================
// Built-in Rally
// ============================================================================

#[test]
fn turn_one_has_ball_and_two_teams() {
    let scene = volleyball::turn_one(AnimatorSettings::default());
    assert_eq!(scene.entities.len(), PLAYER_COUNT + 1);

    let left = scene
        .entities
        .iter()
        .filter(|e| e.role == EntityRole::PlayerLeft)
        .count();
    let right = scene
        .entities
        .iter()
        .filter(|e| e.role == EntityRole::PlayerRight)
        .count();
    assert_eq!((left, right), (6, 6));

    let p1 = scene.entity(&volleyball::player_id(1)).unwrap();
    assert_eq!(p1.jersey, Some(1));
    assert_eq!(p1.role.marker_color(), "red");
    let p12 = scene.entity("player-12").unwrap();
    assert_eq!(p12.role.marker_color(), "blue");
    assert_eq!(scene.entity(BALL_ID).unwrap().jersey, None);
}

#[test]
fn turn_one_waypoints_are_ten_seconds_apart() {
    let scene = volleyball::turn_one(AnimatorSettings::default());
    for entity in &scene.entities {
        for (i, w) in entity.waypoints.iter().enumerate() {
            assert_eq!(w.timestamp, i as u64 * WAYPOINT_INTERVAL_MS, "{}", entity.id);
        }
    }
}

#[test]
fn turn_one_keyframe_ball_matches_authored_path() {
    let scene = volleyball::turn_one(AnimatorSettings::default());
    let animator = scene.build_animator(ManualTimeSource::new(0)).unwrap();

    let mid = animator.get_position(BALL_ID, 5_000).unwrap();
    assert!(vec3_approx(mid, DVec3::new(-0.86, 1.25, 8.0)), "got {mid}");
    assert_eq!(
        animator.get_position(BALL_ID, 120_000).unwrap(),
        DVec3::new(1.75, 1.7, 8.0)
    );
    assert_eq!(
        animator.get_position("player-7", 0).unwrap(),
        DVec3::new(5.0, 0.56, 7.0)
    );
}

#[test]
fn turn_one_random_walk_is_reproducible() -> anyhow::Result<()> {
    init_logging();
    let settings = AnimatorSettings {
        strategy: Strategy::RandomWalk,
        random_walk: RandomWalkSettings {
            frame_count: 600,
            seed: 21,
            ..Default::default()
        },
    };
    let scene = volleyball::turn_one(settings);
    let a = scene.build_animator(ManualTimeSource::new(0))?;
    let b = scene.build_animator(ManualTimeSource::new(0))?;

    assert_eq!(a.frame_count(), 600);
    for id in a.track_ids() {
        for frame in [0, 1, 299, 599, 600, 1_234] {
            assert_eq!(a.get_position(id, frame)?, b.get_position(id, frame)?, "{id} frame {frame}");
        }
    }

    // Left players drift left, right players drift right.
    let p1_start = a.get_position("player-1", 0)?;
    let p1_end = a.get_position("player-1", 599)?;
    assert!(p1_end.x < p1_start.x);
    let p7_start = a.get_position("player-7", 0)?;
    let p7_end = a.get_position("player-7", 599)?;
    assert!(p7_end.x > p7_start.x);
    Ok(())
}

#[test]
fn scene_duration_is_latest_waypoint() {
    let scene = volleyball::turn_one(AnimatorSettings::default());
    assert_eq!(scene.duration_ms(), 6 * WAYPOINT_INTERVAL_MS);
    assert_eq!(SceneConfig::default().duration_ms(), 0);

    let json = format!(
        r#"{{ "entities": [ {{ "id": "ball", "role": "ball", "waypoints": [
            {{ "timestamp": 0, "position": [0, 0, 8] }},
            {{ "timestamp": {}, "position": [1, 0, 8] }}
        ] }} ] }}"#,
        u64::MAX
    );
    let late = SceneConfig::from_json_str(&json).unwrap();
    assert_eq!(late.duration_ms(), u64::MAX);
    assert_eq!(late.duration_ms().saturating_add(5_000), u64::MAX);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_scene_loads_with_default_settings() {
    let scene = SceneConfig::from_json_str(SERVE_JSON).unwrap();
    assert_eq!(scene.name, "Serve");
    assert_eq!(scene.settings, AnimatorSettings::default());
    assert_eq!(scene.settings.strategy, Strategy::Keyframe);
    assert_eq!(scene.entity("player-7").unwrap().jersey, Some(7));
    assert_eq!(
        scene.entity("ball").unwrap().waypoints[1].position,
        DVec3::new(2.15, 1.5, 8.0)
    );
}

#[test]
fn json_scene_builds_and_plays() -> anyhow::Result<()> {
    init_logging();
    let scene = SceneConfig::from_json_str(SERVE_JSON)?;
    let source = ManualTimeSource::new(0);
    let mut animator = scene.build_animator(&source)?;

    animator.start_animation();
    source.advance(15_000);
    animator.tick();

    assert_eq!(animator.state(), ClockState::Running);
    assert_eq!(animator.current_position("ball")?, DVec3::new(2.15, 1.5, 8.0));
    // Single waypoint never moves.
    assert_eq!(animator.current_position("player-7")?, DVec3::new(5.0, 0.56, 7.0));
    Ok(())
}

#[test]
fn json_partial_settings_keep_defaults() {
    let json = r#"{
        "settings": { "strategy": "random_walk", "random_walk": { "seed": 9 } },
        "entities": []
    }"#;
    let scene = SceneConfig::from_json_str(json).unwrap();
    assert_eq!(scene.settings.strategy, Strategy::RandomWalk);
    assert_eq!(scene.settings.random_walk.seed, 9);
    assert_eq!(scene.settings.random_walk.frame_count, 3600);
    assert!((scene.settings.random_walk.step - 0.1).abs() < EPSILON);
}

#[test]
fn turn_one_survives_json_round_trip() -> anyhow::Result<()> {
    let settings = AnimatorSettings {
        strategy: Strategy::RandomWalk,
        random_walk: RandomWalkSettings {
            seed: 5,
            ..Default::default()
        },
    };
    let scene = volleyball::turn_one(settings);
    let json = scene.to_json_string()?;
    assert!(json.contains("\"player-left\""));
    assert!(json.contains("\"random_walk\""));

    let reloaded = SceneConfig::from_json_str(&json)?;
    assert_eq!(reloaded, scene);
    Ok(())
}

#[test]
fn malformed_json_is_json_error() {
    let err = SceneConfig::from_json_str("{ \"entities\": [ }").unwrap_err();
    assert!(matches!(err, CourtsideError::JsonError(_)), "{err}");
}

#[test]
fn unknown_role_is_json_error() {
    let json = r#"{ "entities": [ { "id": "x", "role": "referee", "waypoints": [] } ] }"#;
    let err = SceneConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CourtsideError::JsonError(_)), "{err}");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn empty_waypoints_are_configuration_error() {
    let json = r#"{ "entities": [ { "id": "ball", "role": "ball", "waypoints": [] } ] }"#;
    let err = SceneConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CourtsideError::ConfigurationError(_)), "{err}");
}

#[test]
fn duplicate_entity_ids_are_rejected() {
    let json = r#"{ "entities": [
        { "id": "ball", "role": "ball", "waypoints": [ { "timestamp": 0, "position": [0, 0, 8] } ] },
        { "id": "ball", "role": "ball", "waypoints": [ { "timestamp": 0, "position": [1, 0, 8] } ] }
    ] }"#;
    let err = SceneConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CourtsideError::DuplicateTrack(_)), "{err}");
}

#[test]
fn repeated_timestamp_fails_at_build() {
    let json = r#"{ "entities": [
        { "id": "ball", "role": "ball", "waypoints": [
            { "timestamp": 0, "position": [0, 0, 8] },
            { "timestamp": 0, "position": [1, 0, 8] }
        ] }
    ] }"#;
    let scene = SceneConfig::from_json_str(json).unwrap();
    let err = scene.build_animator(ManualTimeSource::new(0)).unwrap_err();
    assert!(
        matches!(&err, CourtsideError::ConfigurationError(msg) if msg.starts_with("entity 'ball': timestamps")),
        "{err}"
    );
    assert_eq!(err.to_string().matches("Configuration error").count(), 1, "{err}");
}

#[test]
fn zero_frame_count_is_configuration_error() {
    let json = r#"{
        "settings": { "strategy": "random_walk", "random_walk": { "frame_count": 0 } },
        "entities": []
    }"#;
    let err = SceneConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CourtsideError::ConfigurationError(_)), "{err}");
}

#[test]
fn missing_scene_file_is_io_error() {
    let err = SceneConfig::from_path("/nonexistent/courtside/scene.json").unwrap_err();
    assert!(matches!(err, CourtsideError::IoError(_)), "{err}");
}

//! Headless court replay
//!
//! Stands in for the render surface: a fixed 60 Hz loop that ticks the
//! animator and logs where every marker would be painted, once per
//! simulated second.
//!
//! ```text
//! RUST_LOG=info court_replay                 # built-in "Turn 1" rally
//! RUST_LOG=info court_replay scene.json      # scene file
//! RUST_LOG=info court_replay --random-walk   # built-in rally, random walk
//! ```

use courtside::scene::volleyball;
use courtside::{AnimatorSettings, ManualTimeSource, PositionAnimator, SceneConfig, Strategy};

const FRAME_MS: u64 = 16;
const FRAMES_PER_LOG: u64 = 60;
/// Keyframe scenes run this long past their last waypoint to show the freeze.
const TAIL_MS: u64 = 5_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene = load_scene(std::env::args().nth(1).as_deref())?;
    let mut animator = scene.build_animator(ManualTimeSource::new(0))?;

    let run_until_ms = scene.duration_ms().saturating_add(TAIL_MS);

    animator.start_animation();
    let mut frame = 0_u64;
    while animator.is_running() {
        animator.tick();
        if frame.is_multiple_of(FRAMES_PER_LOG) {
            log_positions(&scene, &animator)?;
        }

        if scene.settings.strategy == Strategy::Keyframe && animator.elapsed_millis() >= run_until_ms {
            animator.stop_animation();
        }
        animator.time_source().advance(FRAME_MS);
        frame += 1;
    }

    log::info!(
        "Replay finished after {frame} frames ({} ms elapsed)",
        animator.elapsed_millis()
    );
    log_positions(&scene, &animator)?;
    Ok(())
}

fn load_scene(arg: Option<&str>) -> courtside::Result<SceneConfig> {
    match arg {
        Some("--random-walk") => Ok(volleyball::turn_one(AnimatorSettings {
            strategy: Strategy::RandomWalk,
            ..Default::default()
        })),
        Some(path) => SceneConfig::from_path(path),
        None => Ok(volleyball::turn_one(AnimatorSettings::default())),
    }
}

fn log_positions(
    scene: &SceneConfig,
    animator: &PositionAnimator<ManualTimeSource>,
) -> courtside::Result<()> {
    log::info!(
        "t = {} ms, frame {}",
        animator.elapsed_millis(),
        animator.frame_index()
    );
    for entity in &scene.entities {
        let pos = animator.current_position(&entity.id)?;
        let label = entity
            .jersey
            .map_or_else(|| entity.id.clone(), |n| format!("#{n}"));
        log::info!(
            "  {label:>6} ({:<5}) at ({:>6.2}, {:>6.2}, {:>4.1})",
            entity.role.marker_color(),
            pos.x,
            pos.y,
            pos.z
        );
    }
    Ok(())
}

use anyhow::Context;
use sculpture_core::{
    palette, Archetype, DetectorOptions, FrameClock, ImageHandle, RenderConfig, Sculpture,
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

mod assets;
mod detector;

use assets::DirectoryImages;
use detector::spawn_detector;

const FRAME_BUDGET: Duration = Duration::from_micros(16_667); // ~60 fps
const SECONDS_PER_SHAPE: f32 = 3.0;
const DEFAULT_RUN_SECONDS: f32 = 24.0;
const DETECTOR_JOIN_GRACE: Duration = Duration::from_millis(500);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let run_seconds: f32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("run length {arg:?} is not a number of seconds"))?,
        None => DEFAULT_RUN_SECONDS,
    };

    let mut sculpture = Sculpture::new(RenderConfig::default(), rand::random());
    let images = DirectoryImages {
        root: PathBuf::from("."),
    };
    let fallbacks = sculpture.ornaments_mut().resolve_images(&images);
    log::info!(
        "[native] {} ornaments, {} using the placeholder glyph",
        sculpture.ornaments().len(),
        fallbacks
    );

    // Detection is optional and comes up in the background; until it does
    // (or if it never does) the sculpture idles on the fallback signal.
    let session = sculpture.tracker_mut().enable();
    let detector_thread =
        spawn_detector(DetectorOptions::default(), session).context("spawning detector thread")?;

    let colors = palette();
    let mut clock = FrameClock::new();
    let mut shape_index = Archetype::ALL
        .iter()
        .position(|a| *a == sculpture.config().archetype)
        .unwrap_or(0);
    let mut next_switch = SECONDS_PER_SHAPE;
    let mut next_report = 1.0;

    loop {
        let frame_start = std::time::Instant::now();
        let time = clock.tick();
        if time.elapsed >= run_seconds {
            break;
        }

        if time.elapsed >= next_switch {
            next_switch += SECONDS_PER_SHAPE;
            shape_index = (shape_index + 1) % Archetype::ALL.len();
            sculpture.select_archetype(Archetype::ALL[shape_index]);
            if let Some(color) = colors.get(shape_index % colors.len().max(1)) {
                sculpture.select_color(*color);
            }
        }

        // Drop tracking for the last stretch to exercise cancellation.
        if sculpture.tracker().is_enabled() && time.elapsed >= run_seconds * 0.75 {
            sculpture.tracker_mut().disable();
        }

        let signal = sculpture.tick(time);

        if time.elapsed >= next_report {
            next_report += 1.0;
            let frame = sculpture.morph().frame();
            let (lo, hi) = frame.positions.bounds().unwrap_or_default();
            let placeholders = sculpture
                .ornaments()
                .records()
                .iter()
                .filter(|r| r.image == ImageHandle::Placeholder)
                .count();
            log::info!(
                "[native] t={:>5.1}s {:<14} hand={} open={:.2} scale={:.2} yaw={:.2} pitch={:.2} \
                 color={} bounds=({:.1},{:.1},{:.1})..({:.1},{:.1},{:.1}) ornaments={:.2} ({} placeholder)",
                time.elapsed,
                sculpture.config().archetype.label(),
                signal.hand_present,
                signal.openness,
                frame.scale,
                frame.orientation.yaw,
                frame.orientation.pitch,
                frame.color.to_hex(),
                lo.x,
                lo.y,
                lo.z,
                hi.x,
                hi.y,
                hi.z,
                sculpture.ornaments().group_scale(),
                placeholders,
            );
        }

        if let Some(rest) = FRAME_BUDGET.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    sculpture.tracker_mut().disable();
    let deadline = std::time::Instant::now() + DETECTOR_JOIN_GRACE;
    while !detector_thread.is_finished() && std::time::Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }
    if detector_thread.is_finished() {
        detector_thread
            .join()
            .map_err(|_| anyhow::anyhow!("detector thread panicked"))?;
    } else {
        // still inside an init attempt; its result will be discarded
        log::info!("[native] detector still initialising; not waiting for it");
    }
    log::info!("[native] done");
    Ok(())
}

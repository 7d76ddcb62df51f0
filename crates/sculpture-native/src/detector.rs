use glam::Vec3;
use sculpture_core::{
    DetectionError, DetectorOptions, LandmarkSet, TrackingSession, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_BASE, THUMB_TIP, WRIST,
};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Scripted stand-in for a camera hand detector.
///
/// The hand drifts across the frame on a slow Lissajous path and pinches
/// open and closed. Every `absent_every`-th second it leaves the frame.
pub struct SimulatedDetector {
    pub rate_hz: f32,
    pub absent_every: u32,
    started: Instant,
}

impl SimulatedDetector {
    /// Fails when `SCULPTURE_DETECTOR=off`, to exercise the fallback path.
    pub fn connect(options: &DetectorOptions) -> Result<Self, DetectionError> {
        if std::env::var("SCULPTURE_DETECTOR").is_ok_and(|v| v == "off") {
            return Err(DetectionError::Unavailable(
                "detector disabled by SCULPTURE_DETECTOR=off".into(),
            ));
        }
        log::info!(
            "[detector] simulated detector up (max_hands={}, min_confidence={:.2})",
            options.max_hands,
            options.min_detection_confidence
        );
        Ok(Self {
            rate_hz: 24.0,
            absent_every: 5,
            started: Instant::now(),
        })
    }

    /// Landmarks for the current instant, or `None` when the hand is away.
    pub fn detect(&self) -> Option<LandmarkSet> {
        let t = self.started.elapsed().as_secs_f32();
        if self.absent_every > 0 && (t as u32) % self.absent_every == self.absent_every - 1 {
            return None;
        }
        let palm = Vec3::new(0.5 + 0.35 * (t * 0.4).sin(), 0.5 + 0.2 * (t * 0.3).cos(), 0.0);
        let pinch = 0.5 + 0.5 * (t * 0.9).sin();
        Some(synthetic_hand(palm, 0.02 + pinch * 0.28))
    }
}

/// A 21-point hand whose thumb and index tips are `spread` apart.
pub fn synthetic_hand(palm: Vec3, spread: f32) -> LandmarkSet {
    let mut points = vec![palm; LANDMARK_COUNT];
    points[WRIST] = palm + Vec3::new(0.0, 0.12, 0.0);
    points[MIDDLE_BASE] = palm;
    points[THUMB_TIP] = palm + Vec3::new(-spread / 2.0, -0.1, 0.0);
    points[INDEX_TIP] = palm + Vec3::new(spread / 2.0, -0.1, 0.0);
    LandmarkSet::new(points)
}

/// Run one `connect` attempt on a worker thread and wait at most
/// `timeout` for it. A hung attempt is left detached.
pub fn connect_with_timeout<T, F>(
    connect: &Arc<F>,
    timeout: Duration,
) -> Result<T, DetectionError>
where
    T: Send + 'static,
    F: Fn() -> Result<T, DetectionError> + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel();
    let attempt = Arc::clone(connect);
    thread::Builder::new()
        .name("detector-init".into())
        .spawn(move || {
            // the receiver is gone if we already timed out
            let _ = tx.send(attempt());
        })
        .map_err(|e| DetectionError::Unavailable(format!("cannot start init thread: {e}")))?;
    match rx.recv_timeout(timeout) {
        Ok(outcome) => outcome,
        Err(RecvTimeoutError::Timeout) => Err(DetectionError::TimedOut(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(DetectionError::Unavailable(
            "init thread exited without a result".into(),
        )),
    }
}

/// Retry `connect` with a fixed backoff; each attempt is cut off after
/// `init_timeout`.
pub fn retry_with_backoff<T, F>(
    options: &DetectorOptions,
    connect: F,
) -> Result<T, DetectionError>
where
    T: Send + 'static,
    F: Fn() -> Result<T, DetectionError> + Send + Sync + 'static,
{
    let connect = Arc::new(connect);
    let attempts = options.max_retries + 1;
    let mut attempt = 1;
    loop {
        match connect_with_timeout(&connect, options.init_timeout) {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                log::warn!("[detector] attempt {attempt}/{attempts} failed: {e}; retrying");
                thread::sleep(options.retry_backoff);
                attempt += 1;
            }
            Err(e) => {
                log::error!("[detector] giving up after {attempts} attempts: {e}");
                return Err(e);
            }
        }
    }
}

/// Bring the detector up and run detections until the session is closed,
/// all off the frame loop. The slot stays on the fallback signal while
/// initialisation is pending or after it fails.
pub fn spawn_detector(
    options: DetectorOptions,
    session: TrackingSession,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("detector".into())
        .spawn(move || {
            let connect_options = options.clone();
            let detector = match retry_with_backoff(&options, move || {
                SimulatedDetector::connect(&connect_options)
            }) {
                Ok(detector) => detector,
                Err(e) => {
                    session.report_failure(&e);
                    log::warn!("[detector] continuing without hand tracking");
                    return;
                }
            };
            run_detection_loop(&detector, &session);
        })
}

fn run_detection_loop(detector: &SimulatedDetector, session: &TrackingSession) {
    let period = Duration::from_secs_f32(1.0 / detector.rate_hz.max(1.0));
    while session.is_live() {
        let hand = detector.detect();
        session.submit(hand.as_ref());
        thread::sleep(period);
    }
    log::info!("[detector] session {} closed; loop stopped", session.epoch());
}

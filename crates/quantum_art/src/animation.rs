//! Paced ANSI animation of fractal frames.
//!
//! Every frame is a fresh [`singularity_matrix`] passed through
//! [`gravitational_lensing`]. Rows are written in a random 256-colour
//! foreground, one pause per row; after the frame the cursor moves back up
//! so the next frame overdraws it.

use std::io::Write;
use std::time::Duration;

use quantum_core::rng::{EntropyProvider, StreamRng, SystemClockEntropy};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::ArtError;
use crate::fractal::{gravitational_lensing, singularity_matrix, Frame};
use crate::StreamSource;

/// Lowest colour code drawn for a row.
pub const MIN_COLOUR: u32 = 1;

/// Highest colour code drawn for a row.
pub const MAX_COLOUR: u32 = 255;

/// ANSI reset sequence written after every row.
pub const RESET: &str = "\x1b[0m";

/// Waits between animation steps.
pub trait Pacer {
    /// Blocks for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    #[inline]
    fn pause(&mut self, _duration: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    #[inline]
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Foreground colour escape for a 256-colour terminal.
///
/// ```rust
/// use quantum_art::animation::foreground;
///
/// assert_eq!(foreground(196), "\x1b[38;5;196m");
/// ```
pub fn foreground(code: u32) -> String {
    format!("\x1b[38;5;{}m", code)
}

/// Escape moving the cursor up `rows` lines.
pub fn cursor_up(rows: usize) -> String {
    format!("\x1b[{}A", rows)
}

/// Writes animated frames to an output.
pub struct FractalAnimator<W: Write, P: Pacer> {
    out: W,
    pacer: P,
    config: RenderConfig,
}

impl<W: Write, P: Pacer> FractalAnimator<W, P> {
    /// Creates an animator.
    pub fn new(out: W, pacer: P, config: RenderConfig) -> Self {
        Self { out, pacer, config }
    }

    /// Returns the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders every frame, returning them in display order.
    ///
    /// Row colours come from a [`StreamRng`] seeded with the stream's seed
    /// (or the clock when the stream has none), so a seeded stream
    /// reproduces the exact byte output.
    ///
    /// # Errors
    ///
    /// Returns `ArtError::Io` if writing or flushing fails.
    pub fn run<S: StreamSource>(&mut self, mut stream: S) -> Result<Vec<Frame>, ArtError> {
        let colour_seed = stream.seed().unwrap_or_else(|| SystemClockEntropy.seed());
        let mut colours = StreamRng::from_seed(colour_seed);

        info!(
            width = self.config.width(),
            height = self.config.height(),
            frames = self.config.frames(),
            seed = ?stream.seed(),
            "Rendering fractal"
        );
        debug!(
            density = self.config.density(),
            "density accepted; grid generation does not apply it"
        );

        let mut frames = Vec::with_capacity(self.config.frames());
        for index in 0..self.config.frames() {
            let matrix = singularity_matrix(&mut stream, self.config.width(), self.config.height());
            let warped = gravitational_lensing(&mut stream, matrix);
            self.write_frame(&warped, &mut colours)?;
            debug!(frame = index, rows = warped.height(), "Frame written");
            frames.push(warped);
        }
        Ok(frames)
    }

    fn write_frame(&mut self, frame: &Frame, colours: &mut StreamRng) -> Result<(), ArtError> {
        for row in frame.rows() {
            let code = colours.gen_range_inclusive(MIN_COLOUR..=MAX_COLOUR);
            writeln!(self.out, "{}{}{}", foreground(code), row, RESET)?;
            self.out.flush()?;
            self.pacer.pause(self.config.row_delay());
        }
        write!(self.out, "{}", cursor_up(frame.height()))?;
        self.out.flush()?;
        self.pacer.pause(self.config.frame_delay());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_core::{EntangledStreamGenerator, StreamParams};

    /// Records requested pauses instead of sleeping.
    #[derive(Default)]
    struct RecordingPacer {
        pauses: Vec<Duration>,
    }

    impl Pacer for RecordingPacer {
        fn pause(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }

    fn small_stream(seed: u64) -> EntangledStreamGenerator {
        let params = StreamParams::builder()
            .dimensions(17)
            .samples(59)
            .build()
            .unwrap();
        EntangledStreamGenerator::with_params(seed, params)
    }

    fn small_config() -> RenderConfig {
        RenderConfig::builder()
            .width(10)
            .height(5)
            .frames(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_escape_helpers() {
        assert_eq!(foreground(1), "\x1b[38;5;1m");
        assert_eq!(cursor_up(40), "\x1b[40A");
    }

    #[test]
    fn test_run_writes_framed_rows() {
        let mut out = Vec::new();
        let frames = FractalAnimator::new(&mut out, NoPause, small_config())
            .run(small_stream(42))
            .unwrap();

        assert_eq!(frames.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(RESET).count(), 2 * 5);
        assert_eq!(text.matches("\x1b[5A").count(), 2);
        assert!(text.starts_with("\x1b[38;5;"));
        for frame in &frames {
            for row in frame.rows() {
                assert!(text.contains(row.as_str()));
            }
        }
    }

    #[test]
    fn test_pacing_schedule() {
        let mut pacer = RecordingPacer::default();
        let mut out = Vec::new();
        FractalAnimator::new(&mut out, &mut pacer, small_config())
            .run(small_stream(1))
            .unwrap();

        let row = Duration::from_millis(50);
        let frame = Duration::from_millis(200);
        let mut expected = Vec::new();
        for _ in 0..2 {
            expected.extend(std::iter::repeat(row).take(5));
            expected.push(frame);
        }
        assert_eq!(pacer.pauses, expected);
    }

    #[test]
    fn test_same_seed_same_bytes() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        FractalAnimator::new(&mut first, NoPause, small_config())
            .run(small_stream(7))
            .unwrap();
        FractalAnimator::new(&mut second, NoPause, small_config())
            .run(small_stream(7))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_frames_differ_within_a_run() {
        let mut out = Vec::new();
        let frames = FractalAnimator::new(&mut out, NoPause, small_config())
            .run(small_stream(3))
            .unwrap();
        assert_ne!(frames[0], frames[1]);
    }
}

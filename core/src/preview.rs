use alloc::vec::Vec;
use core::time::Duration;
use log::debug;

use crate::convert::Frame;

/// ~12 frames per second.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 12);

/// Looping playback state for the frames of one conversion.
///
/// Owns no timer: whoever drives the preview reports elapsed time through
/// [`PreviewSession::advance`] and draws [`PreviewSession::current`].
/// Starting a new preview means building a new session.
pub struct PreviewSession {
    frames: Vec<Frame>,
    interval: Duration,
    current: usize,
    elapsed: Duration,
    running: bool,
}

impl PreviewSession {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self::with_interval(frames, DEFAULT_FRAME_INTERVAL)
    }

    pub fn with_interval(frames: Vec<Frame>, interval: Duration) -> Self {
        Self {
            frames,
            interval,
            current: 0,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            debug!("Starting preview of {} frames", self.frames.len());
        }
        self.running = true;
    }

    /// Halts playback on the current frame.
    pub fn stop(&mut self) {
        if self.running {
            debug!("Stopping preview on frame {}", self.current);
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.current)
    }

    /// Moves playback forward by `elapsed`, stepping one frame per full
    /// interval and wrapping after the last. Returns whether the visible
    /// frame changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.running || self.frames.len() < 2 || self.interval.is_zero() {
            return false;
        }
        self.elapsed += elapsed;
        let previous = self.current;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.current = (self.current + 1) % self.frames.len();
        }
        self.current != previous
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::bitmap::{BitMatrix, PackedBitmap};

    fn frames(count: usize) -> Vec<Frame> {
        (0..count)
            .map(|index| Frame {
                index,
                alpha: index as f64 / (count - 1) as f64,
                bitmap: PackedBitmap::pack(&BitMatrix::new(1, 1)),
            })
            .collect()
    }

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_until_started() {
        let mut session = PreviewSession::with_interval(frames(3), TICK);
        assert!(!session.is_running());
        assert!(!session.advance(TICK * 5));
        assert_eq!(session.current().map(|f| f.index), Some(0));
    }

    #[test]
    fn test_steps_and_wraps() {
        let mut session = PreviewSession::with_interval(frames(3), TICK);
        session.start();
        assert!(!session.advance(TICK / 2));
        assert!(session.advance(TICK / 2));
        assert_eq!(session.current().map(|f| f.index), Some(1));
        assert!(session.advance(TICK * 2));
        assert_eq!(session.current().map(|f| f.index), Some(0));
    }

    #[test]
    fn test_stop_holds_frame() {
        let mut session = PreviewSession::with_interval(frames(4), TICK);
        session.start();
        session.advance(TICK * 2);
        session.stop();
        assert!(!session.advance(TICK * 3));
        assert_eq!(session.current().map(|f| f.index), Some(2));
        session.start();
        assert!(session.advance(TICK));
        assert_eq!(session.current().map(|f| f.index), Some(3));
    }

    #[test]
    fn test_empty_session() {
        let mut session = PreviewSession::new(Vec::new());
        session.start();
        assert!(!session.advance(DEFAULT_FRAME_INTERVAL * 10));
        assert!(session.current().is_none());
        assert_eq!(session.interval(), DEFAULT_FRAME_INTERVAL);
    }
}

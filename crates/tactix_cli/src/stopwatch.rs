//! Accumulating stopwatch for per-side thinking time.

use std::time::{Duration, Instant};

/// A labeled stopwatch that can be paused and resumed.
///
/// Intervals between `start` and `pause` accumulate; the total is
/// reported at the end of a game.
#[derive(Debug)]
pub struct Stopwatch {
    label: &'static str,
    elapsed: Duration,
    started: Option<Instant>,
}

impl Stopwatch {
    /// Creates a paused stopwatch with a label for reporting.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            elapsed: Duration::ZERO,
            started: None,
        }
    }

    /// Starts counting. Has no effect while already running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops counting and banks the interval. Has no effect while paused.
    pub fn pause(&mut self) {
        if let Some(beginning) = self.started.take() {
            self.elapsed += beginning.elapsed();
        }
    }

    /// Total accumulated time, including a still-running interval.
    pub fn elapsed(&self) -> Duration {
        let running = self
            .started
            .map_or(Duration::ZERO, |beginning| beginning.elapsed());
        self.elapsed + running
    }

    /// Prints the accumulated time, e.g. `The computer took 1.2ms.`
    pub fn report(&self) {
        println!("{} took {:?}.", self.label, self.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused() {
        let stopwatch = Stopwatch::new("test");
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_pause_banks_elapsed_time() {
        let mut stopwatch = Stopwatch::new("test");
        stopwatch.start();
        std::thread::sleep(Duration::from_millis(5));
        stopwatch.pause();
        let banked = stopwatch.elapsed();
        assert!(banked >= Duration::from_millis(5));
        // Paused time does not accumulate.
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stopwatch.elapsed(), banked);
    }

    #[test]
    fn test_redundant_start_is_ignored() {
        let mut stopwatch = Stopwatch::new("test");
        stopwatch.start();
        std::thread::sleep(Duration::from_millis(2));
        stopwatch.start();
        stopwatch.pause();
        assert!(stopwatch.elapsed() >= Duration::from_millis(2));
    }
}

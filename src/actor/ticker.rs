//! Ticker Actor: Dedicated thread for fixed-interval timing events.
//!
//! The page uses it to blink the typewriter cursor. Ticks are dropped
//! rather than queued when the consumer falls behind.

use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Tick number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

impl Tick {
    /// Whether this tick falls in the "on" half of a blink cycle.
    pub const fn is_on(&self) -> bool {
        self.frame % 2 == 0
    }
}

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Dropping this stops the ticker.
    cancel_tx: Option<Sender<()>>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a new ticker actor with the given interval.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let (cancel_tx, cancel_rx) = bounded::<()>(0);
        // Small buffer: ticks should not queue up.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("folio-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &cancel_rx, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            cancel_tx: Some(cancel_tx),
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Stop the ticker and wait for its thread to finish.
    pub fn join(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.cancel_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<Tick>, cancel_rx: &Receiver<()>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            select! {
                recv(cancel_rx) -> _ => break,
                default(wait) => {}
            }

            let now = Instant::now();
            // Non-blocking send: if the buffer is full, skip this tick.
            let _ = tick_tx.try_send(Tick {
                frame,
                elapsed: now - start,
            });

            frame += 1;
            next_tick += interval;

            // Behind: catch up without queuing.
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_basic() {
        let ticker = TickerActor::spawn(Duration::from_millis(10));

        let tick = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(tick.is_ok());
        assert_eq!(tick.unwrap().frame, 0);

        let tick2 = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(tick2.is_ok());
        assert!(!tick2.unwrap().is_on());

        ticker.join();
    }

    #[test]
    fn test_ticker_join_is_prompt() {
        let ticker = TickerActor::spawn(Duration::from_secs(30));
        let started = Instant::now();
        ticker.join();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}

//! Cycler Actor: Dedicated thread that drives a title cycler in real time.
//!
//! The actor owns its [`TitleCycler`] and is the only thing that mutates it.
//! At any moment there is exactly one pending wake-up: the thread waits on a
//! cancel channel with a timeout equal to the current state's dwell. Dropping
//! the actor disconnects that channel, which wakes the thread immediately,
//! and then joins it, so no transition can happen after teardown.

use super::messages::CyclerFrame;
use crate::cycler::TitleCycler;
use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace};

/// Frames buffered before the cycler thread blocks on a slow consumer.
const FRAME_CAPACITY: usize = 32;

/// Actor that runs a [`TitleCycler`] on its own timer thread.
pub struct CyclerActor {
    /// Handle to the cycler thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Dropping this wakes the thread out of any pending wait.
    cancel_tx: Option<Sender<()>>,
    /// Receiver for display frames.
    frame_rx: Receiver<CyclerFrame>,
    /// Number of transitions performed so far.
    transitions: Arc<AtomicU64>,
}

impl CyclerActor {
    /// Mount a cycler: spawn its thread and publish the initial frame.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the cycler thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(cycler: TitleCycler) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let transitions = Arc::new(AtomicU64::new(0));
        let (cancel_tx, cancel_rx) = bounded::<()>(0);
        let (frame_tx, frame_rx) = bounded(FRAME_CAPACITY);

        debug!(titles = cycler.titles().len(), "mounting title cycler");

        let shutdown_clone = shutdown.clone();
        let transitions_clone = transitions.clone();
        let handle = thread::Builder::new()
            .name("folio-cycler".to_string())
            .spawn(move || {
                Self::run_loop(cycler, &frame_tx, &cancel_rx, &shutdown_clone, &transitions_clone);
            })
            .expect("Failed to spawn cycler thread");

        Self {
            handle: Some(handle),
            shutdown,
            cancel_tx: Some(cancel_tx),
            frame_rx,
            transitions,
        }
    }

    /// Get a reference to the frame receiver.
    ///
    /// The channel stays connected until the actor is dropped, including
    /// after a non-looping cycler has settled.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<CyclerFrame> {
        &self.frame_rx
    }

    /// Number of transitions performed since mount.
    pub fn transitions(&self) -> u64 {
        self.transitions.load(Ordering::Acquire)
    }

    /// Shared transition counter; stays readable after the actor is gone.
    pub fn transition_counter(&self) -> Arc<AtomicU64> {
        self.transitions.clone()
    }

    /// Unmount: cancel the pending wake-up and wait for the thread to exit.
    pub fn stop(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        // Disconnecting the cancel channel interrupts any wait or blocked send.
        self.cancel_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!(transitions = self.transitions(), "title cycler unmounted");
        }
    }

    /// Main cycler loop.
    fn run_loop(
        mut cycler: TitleCycler,
        frame_tx: &Sender<CyclerFrame>,
        cancel_rx: &Receiver<()>,
        shutdown: &Arc<AtomicBool>,
        transitions: &Arc<AtomicU64>,
    ) {
        let mut sequence = 0u64;
        if !Self::publish(&cycler, sequence, frame_tx, cancel_rx) {
            return;
        }

        let mut deadline = Instant::now();
        while let Some(dwell) = cycler.dwell() {
            deadline += dwell;

            let wait = deadline.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                select! {
                    recv(cancel_rx) -> _ => return,
                    default(wait) => {}
                }
            }

            // Re-checked before every mutation: teardown may have raced the timeout.
            if shutdown.load(Ordering::Acquire) {
                return;
            }

            let Some(state) = cycler.advance() else { break };
            sequence += 1;
            transitions.fetch_add(1, Ordering::AcqRel);
            trace!(index = state.index, prefix = state.prefix_len, phase = ?state.phase, "cycler transition");

            if !Self::publish(&cycler, sequence, frame_tx, cancel_rx) {
                return;
            }

            // Behind schedule (e.g. a stalled consumer): resync instead of bursting.
            let now = Instant::now();
            if deadline < now {
                deadline = now;
            }
        }

        // Settled. Keep the frame channel open until teardown.
        debug!("title cycler settled");
        let _ = cancel_rx.recv();
    }

    /// Send the current frame. Returns `false` if the actor is being torn down.
    fn publish(
        cycler: &TitleCycler,
        sequence: u64,
        frame_tx: &Sender<CyclerFrame>,
        cancel_rx: &Receiver<()>,
    ) -> bool {
        let frame = CyclerFrame {
            state: cycler.state(),
            text: cycler.display().to_string(),
            sequence,
            settled: cycler.is_settled(),
        };
        select! {
            send(frame_tx, frame) -> result => result.is_ok(),
            recv(cancel_rx) -> _ => false,
        }
    }
}

impl Drop for CyclerActor {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::{CyclerConfig, CyclerState, Phase, TitleList};
    use crossbeam_channel::RecvTimeoutError;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recv(actor: &CyclerActor) -> CyclerFrame {
        actor
            .receiver()
            .recv_timeout(Duration::from_secs(2))
            .expect("frame within timeout")
    }

    #[test]
    fn test_cycler_actor_publishes_sequence() {
        let cycler = TitleCycler::from_titles(["ab"], ms(5), ms(20)).unwrap();
        let actor = CyclerActor::spawn(cycler);

        let frames: Vec<CyclerFrame> = (0..6).map(|_| recv(&actor)).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["", "a", "ab", "ab", "a", ""]);
        assert_eq!(frames[2].phase(), Phase::Holding);
        assert_eq!(frames[3].phase(), Phase::Erasing);
        assert_eq!(frames[5].state, CyclerState::INITIAL);

        let sequences: Vec<u64> = frames.iter().map(|f| f.sequence).collect();
        assert_eq!(sequences, [0, 1, 2, 3, 4, 5]);

        actor.stop();
    }

    #[test]
    fn test_cycler_actor_respects_hold() {
        let cycler = TitleCycler::from_titles(["a"], ms(1), ms(150)).unwrap();
        // Deadlines start after spawn, so the Erasing frame cannot arrive
        // before type delay + hold, however late it is received.
        let mounted_at = Instant::now();
        let actor = CyclerActor::spawn(cycler);

        recv(&actor); // Typing(0, 0)
        let holding = recv(&actor);
        assert_eq!(holding.phase(), Phase::Holding);
        let erasing = recv(&actor);
        assert_eq!(erasing.phase(), Phase::Erasing);
        assert!(mounted_at.elapsed() >= ms(151));
    }

    #[test]
    fn test_teardown_cancels_pending_hold() {
        let cycler = TitleCycler::from_titles(["a"], ms(1), ms(10_000)).unwrap();
        let actor = CyclerActor::spawn(cycler);
        let counter = actor.transition_counter();
        let frames = actor.receiver().clone();

        recv(&actor);
        assert_eq!(recv(&actor).phase(), Phase::Holding);

        let started = Instant::now();
        drop(actor);
        assert!(started.elapsed() < Duration::from_secs(1), "teardown waited for the hold");

        let after_drop = counter.load(Ordering::Acquire);
        thread::sleep(ms(50));
        assert_eq!(counter.load(Ordering::Acquire), after_drop);
        assert_eq!(frames.recv_timeout(ms(50)), Err(RecvTimeoutError::Disconnected));
    }

    #[test]
    fn test_teardown_mid_typing() {
        let cycler = TitleCycler::from_titles(["Engineer"], ms(500), ms(2000)).unwrap();
        let actor = CyclerActor::spawn(cycler);
        assert_eq!(recv(&actor).text, "");

        let counter = actor.transition_counter();
        actor.stop();
        assert_eq!(counter.load(Ordering::Acquire), 0);
    }

    #[test]
    fn test_teardown_with_unread_frames() {
        // Zero delays fill the frame channel; the thread must still exit.
        let cycler = TitleCycler::from_titles(["abcdefghijklmnop"], Duration::ZERO, ms(5_000)).unwrap();
        let actor = CyclerActor::spawn(cycler);
        thread::sleep(ms(20));

        let started = Instant::now();
        actor.stop();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_empty_title_does_not_spin() {
        let cycler = TitleCycler::from_titles([""], Duration::ZERO, ms(40)).unwrap();
        let actor = CyclerActor::spawn(cycler);
        let frames = actor.receiver().clone();

        thread::sleep(ms(100));
        // Each 40ms hold allows at most three zero-dwell transitions.
        assert!(actor.transitions() <= 12, "transitions: {}", actor.transitions());
        while let Ok(frame) = frames.try_recv() {
            assert_eq!(frame.text, "");
        }
    }

    #[test]
    fn test_settled_actor_stays_connected() {
        let config = CyclerConfig::new(ms(1), ms(5)).with_looping(false);
        let cycler = TitleCycler::new(TitleList::new(["x", "y"]).unwrap(), config).unwrap();
        let actor = CyclerActor::spawn(cycler);

        let mut last = recv(&actor);
        while last.phase() != Phase::Holding || last.state.index != 1 {
            last = recv(&actor);
        }
        assert_eq!(last.text, "y");
        assert!(last.settled);
        assert_eq!(
            actor.receiver().recv_timeout(ms(50)),
            Err(RecvTimeoutError::Timeout)
        );
    }
}

use std::time::{Duration, Instant};

use crate::{core::TimeMs, error::ReelResult, model::Reel};

/// The entire mutable state of playback: which scene is up, and whether the
/// reel is running. Process-local, owned exclusively by the [`Sequencer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub scene: usize,
    pub playing: bool,
}

impl PlaybackState {
    pub const IDLE: PlaybackState = PlaybackState {
        scene: 0,
        playing: false,
    };
}

/// State changes reported to the presentation layer, in the order they
/// happened. `Completed` is the only way to tell "just finished a run" apart
/// from "never started": both collapse to [`PlaybackState::IDLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    Started,
    Advanced { from: usize, to: usize },
    Completed,
    Stopped,
}

/// The single outstanding timer. `scene` records which scene the deadline was
/// armed for; it must still be current when the deadline fires.
#[derive(Clone, Copy, Debug)]
struct PendingAdvance {
    deadline: Instant,
    scene: usize,
}

/// Drives playback through a fixed scene list, one cancellable deadline at a
/// time.
///
/// There is no callback registration: the owner of the sequencer sleeps until
/// [`next_deadline`](Sequencer::next_deadline) and then calls
/// [`poll`](Sequencer::poll) with the current time. Arming a new deadline
/// replaces the old one and [`stop`](Sequencer::stop) clears it, so a stale
/// advance can never fire — the cancellation contract holds on every path,
/// including dropping the sequencer.
pub struct Sequencer {
    reel: Reel,
    state: PlaybackState,
    pending: Option<PendingAdvance>,
    run_started: Option<Instant>,
}

impl Sequencer {
    pub fn new(reel: Reel) -> ReelResult<Self> {
        reel.validate()?;
        Ok(Self {
            reel,
            state: PlaybackState::IDLE,
            pending: None,
            run_started: None,
        })
    }

    pub fn reel(&self) -> &Reel {
        &self.reel
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    /// Begins (or restarts) a run from scene 0. Any in-flight deadline from a
    /// previous run is replaced before the new one is armed.
    pub fn start(&mut self, now: Instant) -> SequencerEvent {
        self.pending = None;
        self.state = PlaybackState {
            scene: 0,
            playing: true,
        };
        self.run_started = Some(now);
        self.arm(now);
        tracing::debug!(scenes = self.reel.scenes.len(), "run started");
        SequencerEvent::Started
    }

    /// Halts playback and resets to idle, cancelling the outstanding
    /// deadline. Returns `None` when there was nothing to do (already idle).
    pub fn stop(&mut self) -> Option<SequencerEvent> {
        if self.state == PlaybackState::IDLE && self.pending.is_none() {
            return None;
        }
        self.pending = None;
        self.run_started = None;
        self.state = PlaybackState::IDLE;
        tracing::debug!("run stopped");
        Some(SequencerEvent::Stopped)
    }

    /// When the owner should next call [`poll`](Sequencer::poll). `None`
    /// while idle.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Fires every deadline that is due at `now`, advancing one scene per
    /// elapsed duration — never skipping an index, even when the caller polls
    /// late. Each advance arms the next deadline relative to the previous
    /// one, so a scripted run stays on the cumulative schedule.
    pub fn poll(&mut self, now: Instant) -> Vec<SequencerEvent> {
        let mut events = Vec::new();

        while let Some(pending) = self.pending {
            if pending.deadline > now {
                break;
            }
            // invariant: a pending deadline always belongs to the scene that
            // is currently up, and only exists while playing
            debug_assert!(self.state.playing);
            debug_assert_eq!(pending.scene, self.state.scene);

            self.pending = None;
            let from = self.state.scene;
            let to = from + 1;

            if to == self.reel.scenes.len() {
                self.state = PlaybackState::IDLE;
                self.run_started = None;
                tracing::debug!(last_scene = from, "run complete");
                events.push(SequencerEvent::Completed);
            } else {
                self.state.scene = to;
                self.arm(pending.deadline);
                tracing::debug!(from, to, "scene advance");
                events.push(SequencerEvent::Advanced { from, to });
            }
        }

        events
    }

    /// Fraction of the reel's total duration elapsed since `start`, linear
    /// in wall time. 0.0 while idle.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(started) = self.run_started else {
            return 0.0;
        };
        let total = self.reel.total_duration_ms();
        if total == 0 {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(started).as_millis() as f64;
        (elapsed / total as f64).clamp(0.0, 1.0)
    }

    /// Scene-local clock for the scene currently up. Zero while idle.
    pub fn scene_clock(&self, now: Instant) -> TimeMs {
        let Some(started) = self.run_started else {
            return TimeMs(0);
        };
        let scene_start = started + Duration::from_millis(self.reel.scene_start_ms(self.state.scene));
        TimeMs::from_duration(now.saturating_duration_since(scene_start))
    }

    fn arm(&mut self, at: Instant) {
        let scene = self.state.scene;
        let duration = self.reel.scenes[scene].duration_ms;
        self.pending = Some(PendingAdvance {
            deadline: at + Duration::from_millis(duration),
            scene,
        });
    }
}

//! Virtual-clock driver for the typewriter
//!
//! The [`Timeline`] owns both timer sources of a typewriter session: the
//! periodic character tick and the one-shot line pause. Callers feed it
//! elapsed time and a [`Surface`]; it fires every due event in order and
//! presents the buffer after each mutation.
//!
//! The browser binding fires the two sources from real timers through
//! [`Timeline::tick`] and [`Timeline::finish_pause`]; tests use
//! [`Timeline::advance`] to get deterministic playback.

use std::time::Duration;

use super::typewriter::{TickOutcome, Typewriter};

/// Display target of a typewriter session.
///
/// `present` is called after every change of the rendered buffer. The
/// implementation shows the text and keeps the viewport scrolled to the
/// bottom.
pub trait Surface {
    fn present(&mut self, rendered: &str);
}

impl<F> Surface for F
where
    F: FnMut(&str),
{
    fn present(&mut self, rendered: &str) {
        self(rendered)
    }
}

/// Typewriter session driven by elapsed time
#[derive(Debug, Clone)]
pub struct Timeline {
    engine: Typewriter,
    now: Duration,
    next_tick: Duration,
    pause_deadline: Option<Duration>,
}

impl Timeline {
    /// Start a session at time zero. The first tick fires one tick period
    /// later.
    pub fn new(engine: Typewriter) -> Self {
        let next_tick = engine.config().tick_period;
        Self {
            engine,
            now: Duration::ZERO,
            next_tick,
            pause_deadline: None,
        }
    }

    /// Move the clock forward by `elapsed`, firing every tick and pause
    /// deadline that falls inside the window.
    ///
    /// Returns how many times the surface was updated.
    pub fn advance(&mut self, elapsed: Duration, surface: &mut impl Surface) -> usize {
        let target = self.now + elapsed;
        let mut presented = 0;

        while !self.engine.is_disposed() {
            // Ticks win ties: a tick landing on the pause deadline still sees
            // the paused line.
            let pause_due = self
                .pause_deadline
                .filter(|deadline| *deadline < self.next_tick && *deadline <= target);

            if let Some(deadline) = pause_due {
                self.now = deadline;
                self.pause_deadline = None;
                if self.finish_pause(surface) {
                    presented += 1;
                }
                continue;
            }

            if self.next_tick > target {
                break;
            }

            self.now = self.next_tick;
            self.next_tick += self.engine.config().tick_period;
            match self.tick(surface) {
                TickOutcome::Typed(_) => presented += 1,
                TickOutcome::PauseArmed => {
                    self.pause_deadline = Some(self.now + self.engine.config().line_pause);
                }
                TickOutcome::Idle | TickOutcome::Stopped => {}
            }
        }

        self.now = target;
        presented
    }

    /// Fire the periodic tick source once.
    ///
    /// On [`TickOutcome::PauseArmed`] the caller owns the one-shot timer:
    /// it must call [`Timeline::finish_pause`] once the line pause elapses.
    pub fn tick(&mut self, surface: &mut impl Surface) -> TickOutcome {
        let outcome = self.engine.tick();
        if outcome.mutated() {
            surface.present(self.engine.rendered());
        }
        outcome
    }

    /// Fire the one-shot line pause. Returns whether the surface was updated.
    pub fn finish_pause(&mut self, surface: &mut impl Surface) -> bool {
        if self.engine.finish_pause() {
            surface.present(self.engine.rendered());
            true
        } else {
            false
        }
    }

    /// Tear the session down. Pending ticks and pauses never fire.
    pub fn stop(&mut self) {
        self.pause_deadline = None;
        self.engine.dispose();
    }

    pub fn is_stopped(&self) -> bool {
        self.engine.is_disposed()
    }

    pub fn engine(&self) -> &Typewriter {
        &self.engine
    }

    pub fn rendered(&self) -> &str {
        self.engine.rendered()
    }

    /// Current virtual time since the session started
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pause_deadline(&self) -> Option<Duration> {
        self.pause_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::typewriter::{Phase, TypewriterConfig};

    /// Surface that remembers every frame it was asked to show
    #[derive(Default)]
    struct Recorder {
        frames: Vec<String>,
    }

    impl Surface for Recorder {
        fn present(&mut self, rendered: &str) {
            self.frames.push(rendered.to_string());
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn timeline(lines: &[&str], tick: u64, pause: u64) -> Timeline {
        let config = TypewriterConfig::default()
            .with_tick_period(ms(tick))
            .with_line_pause(ms(pause));
        Timeline::new(Typewriter::from_lines(lines.iter().copied(), config).unwrap())
    }

    #[test]
    fn test_echo_scenario_on_the_clock() {
        let mut tl = timeline(&["$ echo hi", "hi"], 1, 1);
        let mut surface = Recorder::default();

        tl.advance(ms(9), &mut surface);
        assert_eq!(tl.rendered(), "$ echo hi");
        assert_eq!(tl.engine().phase(), Phase::LinePause);

        // Tick 10 arms the pause, tick 11 is a no-op, then the pause fires
        tl.advance(ms(2), &mut surface);
        assert_eq!(tl.rendered(), "$ echo hi\n");
        assert_eq!(tl.engine().line_index(), 1);
        assert_eq!(tl.engine().char_index(), 0);

        tl.advance(ms(2), &mut surface);
        assert_eq!(tl.rendered(), "$ echo hi\nhi");
    }

    #[test]
    fn test_pause_waits_for_deadline() {
        let mut tl = timeline(&["ab", "c"], 10, 500);
        let mut surface = Recorder::default();

        tl.advance(ms(30), &mut surface);
        assert_eq!(tl.rendered(), "ab");
        assert_eq!(tl.pause_deadline(), Some(ms(530)));

        tl.advance(ms(499), &mut surface);
        assert_eq!(tl.rendered(), "ab");

        tl.advance(ms(1), &mut surface);
        assert_eq!(tl.rendered(), "ab\n");
        assert_eq!(tl.pause_deadline(), None);

        tl.advance(ms(10), &mut surface);
        assert_eq!(tl.rendered(), "ab\nc");
    }

    #[test]
    fn test_surface_sees_every_mutation_only() {
        let mut tl = timeline(&["ab", "c"], 1, 5);
        let mut surface = Recorder::default();

        let presented = tl.advance(ms(100), &mut surface);
        assert_eq!(presented, surface.frames.len());

        // No two consecutive frames are identical: no-op ticks are not shown
        assert!(surface.frames.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(surface.frames[0], "a");
        assert_eq!(surface.frames[1], "ab");
        assert_eq!(surface.frames[2], "ab\n");
        assert_eq!(surface.frames[3], "ab\nc");
    }

    #[test]
    fn test_closure_surface() {
        let mut tl = timeline(&["xy"], 1, 1);
        let mut last = String::new();
        let mut present = |text: &str| last = text.to_string();

        tl.advance(ms(2), &mut present);
        assert_eq!(last, "xy");
    }

    #[test]
    fn test_loops_without_losing_characters() {
        let lines = ["$ lingo", "ok"];
        let mut tl = timeline(&lines, 1, 3);
        let mut surface = Recorder::default();

        // A cycle takes 17ms: 9 chars, two arming ticks, two 3ms pauses
        tl.advance(ms(170), &mut surface);
        let rendered = tl.rendered();
        let cycle = "$ lingo\nok\n";
        assert!(rendered.starts_with(&cycle.repeat(3)));
        assert!(cycle.repeat(200).starts_with(rendered));
    }

    #[test]
    fn test_short_pause_fires_between_slow_ticks() {
        let mut tl = timeline(&["a", "b"], 1_000, 100);
        let mut surface = Recorder::default();

        tl.advance(ms(2_000), &mut surface);
        assert_eq!(tl.rendered(), "a");
        assert_eq!(tl.pause_deadline(), Some(ms(2_100)));

        tl.advance(ms(100), &mut surface);
        assert_eq!(tl.rendered(), "a\n");
        assert_eq!(tl.now(), ms(2_100));

        tl.advance(ms(900), &mut surface);
        assert_eq!(surface.frames, vec!["a", "a\n", "a\nb"]);
    }

    #[test]
    fn test_separate_timer_sources() {
        // Interval every 1000ms, one-shot pause of 100ms scheduled when armed
        let tick_period = ms(1_000);
        let line_pause = ms(100);
        let mut tl = timeline(&["a", "b"], 1_000, 100);
        let mut frames: Vec<(Duration, String)> = Vec::new();
        let mut pending_pause: Option<Duration> = None;

        for n in 1..=3u32 {
            let tick_at = tick_period * n;
            if let Some(at) = pending_pause.take_if(|at| *at < tick_at) {
                tl.finish_pause(&mut |text: &str| frames.push((at, text.to_string())));
            }
            let outcome = tl.tick(&mut |text: &str| frames.push((tick_at, text.to_string())));
            if outcome == TickOutcome::PauseArmed {
                pending_pause = Some(tick_at + line_pause);
            }
        }

        assert_eq!(
            frames,
            vec![
                (ms(1_000), "a".to_string()),
                (ms(2_100), "a\n".to_string()),
                (ms(3_000), "a\nb".to_string()),
            ]
        );
    }

    #[test]
    fn test_direct_firing_after_stop() {
        let mut tl = timeline(&["a", "b"], 1, 1);
        let mut surface = Recorder::default();

        tl.tick(&mut surface);
        assert_eq!(tl.tick(&mut surface), TickOutcome::PauseArmed);
        tl.stop();

        assert_eq!(tl.tick(&mut surface), TickOutcome::Stopped);
        assert!(!tl.finish_pause(&mut surface));
        assert_eq!(surface.frames, vec!["a"]);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut tl = timeline(&["ab", "c"], 1, 50);
        let mut surface = Recorder::default();

        tl.advance(ms(3), &mut surface);
        assert!(tl.pause_deadline().is_some());
        let frames = surface.frames.len();

        tl.stop();
        assert!(tl.is_stopped());
        assert_eq!(tl.pause_deadline(), None);

        assert_eq!(tl.advance(ms(1_000), &mut surface), 0);
        assert_eq!(surface.frames.len(), frames);
        assert_eq!(tl.rendered(), "ab");
    }

    #[test]
    fn test_clock_moves_in_small_steps() {
        let mut coarse = timeline(&["hello", "world"], 18, 500);
        let mut fine = coarse.clone();
        let mut sink = |_: &str| {};

        coarse.advance(ms(2_000), &mut sink);
        for _ in 0..2_000 {
            fine.advance(ms(1), &mut sink);
        }
        assert_eq!(coarse.rendered(), fine.rendered());
        assert_eq!(coarse.now(), fine.now());
    }
}

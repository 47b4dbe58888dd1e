//! Typewriter animation engine
//!
//! Reveals a [`Script`] one character at a time, pausing at the end of every
//! line and looping forever. The engine only holds state; timers live
//! outside of it and call [`Typewriter::tick`] and
//! [`Typewriter::finish_pause`] when they fire.
//!
//! # Lifecycle
//!
//! ```text
//! Typing --char revealed--> Typing --line exhausted--> LinePause
//!   ^                                                      |
//!   +-------------------- pause elapsed -------------------+
//! ```
//!
//! ```
//! use lingo_landing::core::{Script, Typewriter, TypewriterConfig, TickOutcome};
//!
//! let script = Script::new(["hi"]).unwrap();
//! let mut tw = Typewriter::new(script, TypewriterConfig::default());
//!
//! assert_eq!(tw.tick(), TickOutcome::Typed('h'));
//! assert_eq!(tw.tick(), TickOutcome::Typed('i'));
//! assert_eq!(tw.tick(), TickOutcome::PauseArmed);
//! assert!(tw.finish_pause());
//! assert_eq!(tw.rendered(), "hi\n");
//! ```

use std::time::Duration;

use super::script::Script;

/// Default delay between two revealed characters (18ms)
pub const DEFAULT_TICK_PERIOD_MS: u64 = 18;

/// Default pause after a fully typed line (500ms)
pub const DEFAULT_LINE_PAUSE_MS: u64 = 500;

/// Default number of completed lines kept in the buffer
pub const DEFAULT_MAX_LINES: usize = 64;

/// Errors raised while setting up a typewriter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("typewriter script must contain at least one line")]
    EmptyScript,
}

/// Timing and retention settings for a [`Typewriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Time between two character reveals
    pub tick_period: Duration,
    /// Pause after a line is complete, before the line break
    pub line_pause: Duration,
    /// Completed lines kept in the rendered buffer
    pub max_lines: usize,
}

impl TypewriterConfig {
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        if !tick_period.is_zero() {
            self.tick_period = tick_period;
        }
        self
    }

    pub fn with_line_pause(mut self, line_pause: Duration) -> Self {
        self.line_pause = line_pause;
        self
    }

    /// Set the retention window. Values below 1 are raised to 1.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines.max(1);
        self
    }

    /// Apply `tickPeriod`, `linePause` (milliseconds) and `maxLines`
    /// overrides from a key lookup such as a URL query map.
    ///
    /// Missing or unparsable values keep the current setting. A zero tick
    /// period is ignored.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        let mut config = self;
        if let Some(ms) = number("tickPeriod") {
            config = config.with_tick_period(Duration::from_millis(ms));
        }
        if let Some(ms) = number("linePause") {
            config = config.with_line_pause(Duration::from_millis(ms));
        }
        if let Some(lines) = number("maxLines") {
            config = config.with_max_lines(usize::try_from(lines).unwrap_or(usize::MAX));
        }
        config
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(DEFAULT_TICK_PERIOD_MS),
            line_pause: Duration::from_millis(DEFAULT_LINE_PAUSE_MS),
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// Logical phase of the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Characters of the current line are still being revealed
    Typing,
    /// The line is fully revealed; waiting for the pause to elapse
    LinePause,
}

/// Snapshot of the playback cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Index into the script, always below the script length
    pub line_index: usize,
    /// Characters of the current line already revealed
    pub char_index: usize,
    /// Text shown to the user
    pub rendered: String,
}

/// Result of a single [`Typewriter::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A character was appended to the buffer
    Typed(char),
    /// The line just ran out; the caller must schedule the line pause
    PauseArmed,
    /// A pause is already pending, nothing changed
    Idle,
    /// The engine was disposed, nothing changed
    Stopped,
}

impl TickOutcome {
    /// Whether the rendered buffer changed
    pub fn mutated(&self) -> bool {
        matches!(self, TickOutcome::Typed(_))
    }
}

/// Scripted typewriter state machine
#[derive(Debug, Clone)]
pub struct Typewriter {
    script: Script,
    config: TypewriterConfig,
    state: PlaybackState,
    /// Byte offset of `char_index` inside the current line
    byte_offset: usize,
    /// Completed lines currently held in `state.rendered`
    completed_lines: usize,
    pause_armed: bool,
    disposed: bool,
}

impl Typewriter {
    pub fn new(script: Script, config: TypewriterConfig) -> Self {
        Self {
            script,
            config,
            state: PlaybackState::default(),
            byte_offset: 0,
            completed_lines: 0,
            pause_armed: false,
            disposed: false,
        }
    }

    /// Build an engine straight from raw lines
    pub fn from_lines<I, S>(lines: I, config: TypewriterConfig) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Script::new(lines)?, config))
    }

    /// Reveal the next character, or arm the line pause once the line is
    /// exhausted.
    ///
    /// Ticks that land while a pause is pending leave the state untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if self.disposed {
            return TickOutcome::Stopped;
        }

        let line = self.script.line(self.state.line_index);
        match line[self.byte_offset..].chars().next() {
            Some(ch) => {
                self.state.rendered.push(ch);
                self.state.char_index += 1;
                self.byte_offset += ch.len_utf8();
                TickOutcome::Typed(ch)
            }
            None if self.pause_armed => TickOutcome::Idle,
            None => {
                self.pause_armed = true;
                TickOutcome::PauseArmed
            }
        }
    }

    /// Complete the line pause: break the line and move to the next one.
    ///
    /// Returns `false` (and changes nothing) when no pause is pending or the
    /// engine was disposed.
    pub fn finish_pause(&mut self) -> bool {
        if self.disposed || !self.pause_armed {
            return false;
        }

        self.pause_armed = false;
        self.state.rendered.push('\n');
        self.completed_lines += 1;
        self.state.line_index = self.script.next_index(self.state.line_index);
        self.state.char_index = 0;
        self.byte_offset = 0;
        self.trim_to_window();
        true
    }

    /// Stop the engine. Pending pauses are dropped and every later call is
    /// a no-op.
    pub fn dispose(&mut self) {
        self.pause_armed = false;
        self.disposed = true;
    }

    fn trim_to_window(&mut self) {
        while self.completed_lines > self.config.max_lines {
            match self.state.rendered.find('\n') {
                Some(pos) => {
                    self.state.rendered.drain(..=pos);
                    self.completed_lines -= 1;
                }
                None => break,
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.byte_offset < self.script.line(self.state.line_index).len() {
            Phase::Typing
        } else {
            Phase::LinePause
        }
    }

    pub fn rendered(&self) -> &str {
        &self.state.rendered
    }

    pub fn line_index(&self) -> usize {
        self.state.line_index
    }

    pub fn char_index(&self) -> usize {
        self.state.char_index
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_pause_armed(&self) -> bool {
        self.pause_armed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }
}

//! Scripted terminal transcript
//!
//! A [`Script`] is the fixed, ordered list of lines the typewriter replays.
//! Playback is cyclic: once the last line has been typed, it starts over at
//! the first one.

use super::typewriter::TypewriterError;

/// Fake `lingo-i18n` CLI session shown on the landing page
pub const LINGO_TRANSCRIPT: &[&str] = &[
    "$ npx lingo-i18n translate",
    "🔗 Connecting to GitHub...",
    "📦 Scanning repo for i18n keys...",
    "🌐 Target languages: es, fr, de, ja",
    "⚙️ Building translation memory...",
    "🤖 Translating 124 keys...",
    "🧩 Context-aware suggestions applied",
    "🔁 Auto-sync enabled with GitHub App",
    "✅ Done in 58.3s — changes pushed",
];

/// Immutable, non-empty sequence of lines to type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// Build a script from any list of lines.
    ///
    /// Fails with [`TypewriterError::EmptyScript`] when no lines are given,
    /// since an empty script has no line to wrap around to.
    pub fn new<I, S>(lines: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(TypewriterError::EmptyScript);
        }
        Ok(Self { lines })
    }

    /// The transcript used by the landing page demo
    pub fn lingo_demo() -> Self {
        Self {
            lines: LINGO_TRANSCRIPT.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Number of lines (always at least one)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, wrapped modulo the script length
    pub fn line(&self, index: usize) -> &str {
        &self.lines[index % self.lines.len()]
    }

    /// Index of the line after `index`, wrapping back to 0
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.lines.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::lingo_demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_is_rejected() {
        let result = Script::new(Vec::<String>::new());
        assert_eq!(result, Err(TypewriterError::EmptyScript));
    }

    #[test]
    fn test_script_keeps_order() {
        let script = Script::new(["a", "b", "c"]).unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(script.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(!script.is_empty());
    }

    #[test]
    fn test_next_index_wraps() {
        let script = Script::new(["a", "b"]).unwrap();
        assert_eq!(script.next_index(0), 1);
        assert_eq!(script.next_index(1), 0);
    }

    #[test]
    fn test_line_lookup_wraps() {
        let script = Script::new(["first", "second"]).unwrap();
        assert_eq!(script.line(0), "first");
        assert_eq!(script.line(3), "second");
    }

    #[test]
    fn test_single_empty_line_is_allowed() {
        let script = Script::new([""]).unwrap();
        assert_eq!(script.len(), 1);
        assert_eq!(script.line(0), "");
    }

    #[test]
    fn test_lingo_demo_matches_transcript() {
        let script = Script::lingo_demo();
        assert_eq!(script.len(), LINGO_TRANSCRIPT.len());
        assert_eq!(script.line(0), "$ npx lingo-i18n translate");
        assert!(script.line(script.len() - 1).starts_with("✅ Done"));
        assert_eq!(Script::default(), script);
    }
}

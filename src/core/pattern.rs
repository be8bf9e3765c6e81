use std::fmt;

use rand::Rng;

use crate::core::cell::Color;

/// An ordered sequence of required cell colors, one per search step.
///
/// Patterns are read-only during search; the enumerator indexes them by
/// 1-based step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(Vec<Color>);

impl Pattern {
    #[inline]
    pub fn new(colors: Vec<Color>) -> Pattern {
        Pattern(colors)
    }

    /// Strict parse of a glyph string (`b`/`n` only).
    ///
    /// Returns the first rejected character on failure. User-supplied input
    /// should go through [`Pattern::scrub`] first.
    pub fn parse(s: &str) -> Result<Pattern, char> {
        s.chars()
            .map(|ch| Color::from_glyph(ch).ok_or(ch))
            .collect::<Result<Vec<Color>, char>>()
            .map(Pattern)
    }

    /// Cleanup for user-supplied pattern text: lowercase, keep only `b`/`n`.
    pub fn scrub(s: &str) -> String {
        s.trim()
            .chars()
            .flat_map(|ch| ch.to_lowercase())
            .filter(|ch| matches!(ch, 'b' | 'n'))
            .collect()
    }

    /// A uniform coin-flip pattern of length `n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Pattern {
        let colors = (0..n)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    Color::Light
                } else {
                    Color::Dark
                }
            })
            .collect();
        Pattern(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.glyph())?;
        }
        Ok(())
    }
}

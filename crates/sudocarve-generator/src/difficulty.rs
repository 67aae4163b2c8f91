//! Difficulty levels and their hole targets.

use std::{convert::Infallible, fmt, str::FromStr};

/// A puzzle difficulty level.
///
/// Each level maps to a target number of empty cells ("holes") that hole
/// carving aims for. The target is a goal, not a promise: when uniqueness
/// cannot be preserved near the target, the finished puzzle may have fewer
/// holes.
///
/// # Examples
///
/// ```
/// use sudocarve_generator::Difficulty;
///
/// assert_eq!(Difficulty::Hard.hole_target(), 54);
///
/// // Unrecognized names fall back to Medium, silently.
/// assert_eq!(Difficulty::from_name("EASY"), Difficulty::Easy);
/// assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 27 holes.
    Easy,
    /// 40 holes.
    #[default]
    Medium,
    /// 54 holes.
    Hard,
}

impl Difficulty {
    /// All levels from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the target number of empty cells for this level.
    #[must_use]
    pub const fn hole_target(self) -> usize {
        match self {
            Self::Easy => 27,
            Self::Medium => 40,
            Self::Hard => 54,
        }
    }

    /// Returns the level's lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Maps a level name to a difficulty, case-insensitively.
    ///
    /// Unrecognized names map to [`Difficulty::Medium`] without an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::from_name(s))
    }
}

//! Vote kind - the two recognized reaction emoji
//!
//! Clients decorate the base emoji freely (variation selectors, skin-tone
//! modifiers), so matching strips those code points before comparing
//! against the base glyphs. Anything that does not normalize to 👍 or 👎
//! is not a vote.

use serde::{Deserialize, Serialize};

/// Which vote set a reaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

const UPVOTE: &str = "\u{1F44D}"; // 👍
const DOWNVOTE: &str = "\u{1F44E}"; // 👎

impl VoteKind {
    /// Interpret a reaction annotation key as a vote.
    ///
    /// Returns `None` for any key that is not the thumbs-up or thumbs-down
    /// emoji once presentation variants are ignored.
    pub fn from_annotation_key(key: &str) -> Option<Self> {
        let base: String = key.chars().filter(|c| !is_presentation_char(*c)).collect();
        match base.as_str() {
            UPVOTE => Some(Self::Up),
            DOWNVOTE => Some(Self::Down),
            _ => None,
        }
    }

    /// Check if this is an upvote
    #[inline]
    pub fn is_upvote(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Code points that only alter emoji presentation, never identity
fn is_presentation_char(c: char) -> bool {
    matches!(
        c,
        // Variation selectors (text / emoji presentation)
        '\u{FE0E}' | '\u{FE0F}'
        // Zero-width joiner
        | '\u{200D}'
        // Fitzpatrick skin-tone modifiers
        | '\u{1F3FB}'..='\u{1F3FF}'
    )
}

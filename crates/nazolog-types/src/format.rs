//! The enumeration of mystery-event styles.
//!
//! The blog records events in one of eight fixed formats. The wire and
//! stored representation is the original Japanese label, so the serde
//! names are the labels themselves rather than the Rust identifiers.

use serde::{Deserialize, Serialize};

/// The style of a mystery-solving event.
///
/// Serialized to and from the Japanese labels used by the blog
/// (`ルーム型`, `ホール型`, ...). Stored documents with an unknown or
/// missing label normalize to [`EventFormat::Other`]; see
/// `nazolog-store`'s normalization routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventFormat {
    /// Escape-room style event held in a dedicated room.
    #[serde(rename = "ルーム型")]
    Room,
    /// Large-venue event played simultaneously by many teams in a hall.
    #[serde(rename = "ホール型")]
    Hall,
    /// Touring event solved while walking a neighborhood or station.
    #[serde(rename = "周遊型")]
    Touring,
    /// Takeaway kit solved at home.
    #[serde(rename = "持ち帰り")]
    Takeaway,
    /// Online event played over video call or browser.
    #[serde(rename = "オンライン")]
    Online,
    /// Puzzle event hosted at a cafe.
    #[serde(rename = "カフェ謎")]
    Cafe,
    /// Event delivered over the web or LINE messaging.
    #[serde(rename = "Web/LINE")]
    WebLine,
    /// Any other format.
    #[serde(rename = "その他")]
    Other,
}

impl EventFormat {
    /// All formats in display order, as offered by the admin form.
    pub const ALL: [Self; 8] = [
        Self::Room,
        Self::Hall,
        Self::Touring,
        Self::Takeaway,
        Self::Online,
        Self::Cafe,
        Self::WebLine,
        Self::Other,
    ];

    /// Return the Japanese label for this format.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Room => "ルーム型",
            Self::Hall => "ホール型",
            Self::Touring => "周遊型",
            Self::Takeaway => "持ち帰り",
            Self::Online => "オンライン",
            Self::Cafe => "カフェ謎",
            Self::WebLine => "Web/LINE",
            Self::Other => "その他",
        }
    }

    /// Parse a stored label, falling back to [`EventFormat::Other`].
    ///
    /// Unlike the serde implementation this never fails: legacy documents
    /// may carry labels that predate the current set, and readers must not
    /// break on them.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|format| format.label() == label)
            .unwrap_or(Self::Other)
    }
}

impl core::fmt::Display for EventFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

use chrono::{Datelike, NaiveDate};

use crate::config::SketchHost;

/// Inline style flags of a rich-text run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Annotations {
    /// Bold.
    #[serde(default)]
    pub bold: bool,
    /// Italic.
    #[serde(default)]
    pub italic: bool,
    /// Strikethrough.
    #[serde(default)]
    pub strikethrough: bool,
    /// Underline.
    #[serde(default)]
    pub underline: bool,
    /// Inline code.
    #[serde(default)]
    pub code: bool,
    /// Backend color name, `"default"` when unset.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "default".to_owned()
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

/// A run of uniformly styled text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RichTextItem {
    /// Text content.
    pub plain_text: String,
    /// Link target, if the run is a link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Style flags.
    #[serde(default)]
    pub annotations: Annotations,
}

impl RichTextItem {
    /// Unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            href: None,
            annotations: Annotations::default(),
        }
    }
}

/// Flattened body block of an entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Paragraph, heading, list item, quote and friends.
    Text {
        /// Styled runs.
        content: Vec<RichTextItem>,
    },
    /// Image with caption.
    Image {
        /// Image URL.
        url: String,
        /// Caption text (may be empty).
        caption: String,
    },
    /// Code listing.
    Code {
        /// Source text.
        text: String,
        /// Language tag as reported by the backend.
        language: String,
    },
    /// Link card.
    Bookmark {
        /// Target URL.
        url: String,
        /// Caption text (may be empty).
        caption: String,
    },
}

/// One published diary entry. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiaryEntry {
    /// Backend page id; assumed unique.
    pub id: String,
    /// Calendar day of the entry.
    pub date: NaiveDate,
    /// Identifier of the embedded sketch.
    pub sketch_id: String,
    /// Thumbnail URL (remote) or mirrored local path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Body blocks in document order.
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
}

impl DiaryEntry {
    /// `YY/MM/DD`, used for network and calendar node labels.
    pub fn display_date(&self) -> String {
        format_display_date(self.date)
    }

    /// `YY\nMM\nDD`, the stacked label of the detail page dates.
    pub fn stacked_date(&self) -> String {
        format!(
            "{:02}\n{:02}\n{:02}",
            self.date.year().rem_euclid(100),
            self.date.month(),
            self.date.day()
        )
    }

    /// Embed and editor links for this entry's sketch.
    pub fn sketch_links(&self, host: &SketchHost) -> SketchLinks {
        SketchLinks::new(host, &self.sketch_id)
    }
}

/// `YY/MM/DD` label for a day.
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// The two URLs a detail page builds for its sketch.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SketchLinks {
    /// Embeddable viewer.
    pub embed_url: String,
    /// Editable source.
    pub editor_url: String,
}

impl SketchLinks {
    /// Build links following the host's `/{user}/embed|sketches/{id}` convention.
    pub fn new(host: &SketchHost, sketch_id: &str) -> Self {
        let base = host.base_url.trim_end_matches('/');
        Self {
            embed_url: format!("{base}/{}/embed/{sketch_id}", host.user),
            editor_url: format!("{base}/{}/sketches/{sketch_id}", host.user),
        }
    }
}

/// Sort newest first. Ties keep their incoming order.
pub fn sort_newest_first(entries: &mut [DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;

//! Wire shapes of the Notion REST API and their mapping onto the diary model.
//!
//! Everything here is pure: the HTTP side lives in [`crate::content::source`].
//! Pages and blocks are decoded leniently from `serde_json::Value` so that one
//! malformed item is skipped instead of failing the whole listing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::PropertyNames,
    content::model::{Annotations, ContentBlock, RichTextItem},
};

/// One page of a cursor-paginated listing.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Paginated<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Paginated<T> {
    /// Cursor of the following page, if the backend says there is one.
    pub fn continuation(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct RawRichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Option<RawAnnotations>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct RawAnnotations {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strikethrough: Option<bool>,
    pub underline: Option<bool>,
    pub code: Option<bool>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawUrl {
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawFile {
    File { file: RawUrl },
    External { external: RawUrl },
}

impl RawFile {
    fn into_url(self) -> String {
        match self {
            Self::File { file } => file.url,
            Self::External { external } => external.url,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
struct RawDate {
    start: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawProperty {
    Date {
        date: Option<RawDate>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RawRichText>,
    },
    Files {
        #[serde(default)]
        files: Vec<Value>,
    },
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
struct RawPage {
    object: String,
    id: String,
    properties: Option<serde_json::Map<String, Value>>,
}

/// A block as returned by the children listing. The type-specific body sits
/// under a key equal to `kind`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub body: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawImage {
    #[serde(rename = "type")]
    kind: String,
    file: Option<RawUrl>,
    external: Option<RawUrl>,
    #[serde(default)]
    caption: Vec<RawRichText>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawCode {
    #[serde(default)]
    rich_text: Vec<RawRichText>,
    #[serde(default)]
    language: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawBookmark {
    url: String,
    #[serde(default)]
    caption: Vec<RawRichText>,
}

/// Entry fields read from page properties, before the body is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PageHeader {
    pub id: String,
    pub date: NaiveDate,
    pub sketch_id: String,
    pub thumbnail_url: Option<String>,
}

/// Map raw runs onto the model, defaulting missing annotations.
pub(crate) fn transform_rich_text(runs: &[RawRichText]) -> Vec<RichTextItem> {
    runs.iter()
        .map(|r| {
            let a = r.annotations.clone().unwrap_or_default();
            RichTextItem {
                plain_text: r.plain_text.clone(),
                href: r.href.clone(),
                annotations: Annotations {
                    bold: a.bold.unwrap_or(false),
                    italic: a.italic.unwrap_or(false),
                    strikethrough: a.strikethrough.unwrap_or(false),
                    underline: a.underline.unwrap_or(false),
                    code: a.code.unwrap_or(false),
                    color: a.color.unwrap_or_else(|| "default".to_owned()),
                },
            }
        })
        .collect()
}

fn join_plain(runs: &[RawRichText]) -> String {
    runs.iter().map(|r| r.plain_text.as_str()).collect()
}

/// Parse a backend date down to its day: `YYYY-MM-DD`, an RFC 3339
/// date-time, or a local date-time without an offset.
pub(crate) fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
                .ok()
                .map(|dt| dt.date())
        })
}

fn property(props: &serde_json::Map<String, Value>, name: &str) -> Option<RawProperty> {
    props
        .get(name)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

/// Read the entry header of a page, or `None` when the page is partial or lacks
/// the date or sketch id.
pub(crate) fn page_header(page: &Value, names: &PropertyNames) -> Option<PageHeader> {
    let page: RawPage = match serde_json::from_value(page.clone()) {
        Ok(p) => p,
        Err(err) => {
            tracing::debug!(%err, "skipping undecodable page object");
            return None;
        }
    };
    if page.object != "page" {
        return None;
    }
    let Some(props) = page.properties else {
        tracing::debug!(page = %page.id, "skipping partial page");
        return None;
    };

    let date = match property(&props, &names.date) {
        Some(RawProperty::Date {
            date: Some(RawDate { start: Some(start) }),
        }) => parse_entry_date(&start),
        _ => None,
    };
    let Some(date) = date else {
        tracing::debug!(page = %page.id, "skipping page without a usable date");
        return None;
    };

    let sketch_id = match property(&props, &names.sketch_id) {
        Some(RawProperty::RichText { rich_text }) => join_plain(&rich_text),
        _ => {
            tracing::debug!(page = %page.id, "skipping page without a sketch id property");
            return None;
        }
    };

    let thumbnail_url = match property(&props, &names.thumbnail) {
        Some(RawProperty::Files { files }) => files
            .into_iter()
            .next()
            .and_then(|f| serde_json::from_value::<RawFile>(f).ok())
            .map(RawFile::into_url),
        _ => None,
    };

    Some(PageHeader {
        id: page.id,
        date,
        sketch_id,
        thumbnail_url,
    })
}

/// Flatten one block. Unsupported types yield `None`.
pub(crate) fn map_block(block: &RawBlock) -> Option<ContentBlock> {
    let body = block.body.get(&block.kind)?;
    match block.kind.as_str() {
        "image" => {
            let image: RawImage = serde_json::from_value(body.clone()).ok()?;
            let url = match image.kind.as_str() {
                "file" => image.file?.url,
                _ => image.external?.url,
            };
            Some(ContentBlock::Image {
                url,
                caption: join_plain(&image.caption),
            })
        }
        "code" => {
            let code: RawCode = serde_json::from_value(body.clone()).ok()?;
            Some(ContentBlock::Code {
                text: join_plain(&code.rich_text),
                language: code.language,
            })
        }
        "bookmark" => {
            let bookmark: RawBookmark = serde_json::from_value(body.clone()).ok()?;
            Some(ContentBlock::Bookmark {
                url: bookmark.url,
                caption: join_plain(&bookmark.caption),
            })
        }
        _ => {
            let runs = body.get("rich_text")?;
            let runs: Vec<RawRichText> = serde_json::from_value(runs.clone()).ok()?;
            Some(ContentBlock::Text {
                content: transform_rich_text(&runs),
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/notion.rs"]
mod tests;

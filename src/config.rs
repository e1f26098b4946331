use crate::foundation::error::{DiaryError, DiaryResult};

/// Default Notion REST endpoint.
pub const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com";
/// Notion API version that exposes the data source endpoints.
pub const DEFAULT_NOTION_VERSION: &str = "2025-09-03";
/// Default sketch editor account.
pub const DEFAULT_SKETCH_USER: &str = "k1105";

/// Names of the database properties an entry is read from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PropertyNames {
    /// Required date property.
    pub date: String,
    /// Required rich-text property holding the sketch identifier.
    pub sketch_id: String,
    /// Optional files property holding the thumbnail.
    pub thumbnail: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            date: "Date".to_owned(),
            sketch_id: "p5jsSketchId".to_owned(),
            thumbnail: "thumbnail".to_owned(),
        }
    }
}

/// Settings for the Notion content backend.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NotionConfig {
    /// Integration token. Public integrations may omit it.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Data source to list entries from. Checked at fetch time.
    pub data_source_id: Option<String>,
    /// REST base URL, without trailing slash.
    pub api_base: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Page size for both the query and block listing endpoints (max 100).
    pub page_size: u32,
    /// How many levels of nested block children are flattened.
    pub max_block_depth: u32,
    /// Property names.
    pub properties: PropertyNames,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: None,
            data_source_id: None,
            api_base: DEFAULT_NOTION_API_BASE.to_owned(),
            version: DEFAULT_NOTION_VERSION.to_owned(),
            page_size: 100,
            max_block_depth: 2,
            properties: PropertyNames::default(),
        }
    }
}

impl NotionConfig {
    /// Data source id, or a fatal configuration error.
    pub fn require_data_source(&self) -> DiaryResult<&str> {
        match self.data_source_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(DiaryError::config("NOTION_DATA_SOURCE_ID is not set")),
        }
    }
}

/// Where sketches are hosted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SketchHost {
    /// Editor origin.
    pub base_url: String,
    /// Account that owns the sketches.
    pub user: String,
}

impl Default for SketchHost {
    fn default() -> Self {
        Self {
            base_url: "https://editor.p5js.org".to_owned(),
            user: DEFAULT_SKETCH_USER.to_owned(),
        }
    }
}

/// Process-wide configuration.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DiaryConfig {
    /// Content backend.
    pub notion: NotionConfig,
    /// Sketch embed host.
    pub sketch: SketchHost,
}

impl DiaryConfig {
    /// Read configuration from the process environment.
    ///
    /// Absent variables fall back to defaults; the data source id is only
    /// validated when a fetch is attempted.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        cfg.notion.token = non_empty("NOTION_TOKEN");
        cfg.notion.data_source_id = non_empty("NOTION_DATA_SOURCE_ID");
        if let Some(base) = non_empty("NOTION_API_BASE") {
            cfg.notion.api_base = base.trim_end_matches('/').to_owned();
        }
        if let Some(version) = non_empty("NOTION_VERSION") {
            cfg.notion.version = version;
        }
        if let Some(user) = non_empty("SKETCH_USER") {
            cfg.sketch.user = user;
        }
        cfg
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

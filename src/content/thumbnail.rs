use std::path::{Path, PathBuf};

use crate::{
    content::model::DiaryEntry,
    foundation::error::{DiaryError, DiaryResult},
};

/// Copies remote thumbnails into a local directory.
///
/// Hosted file URLs handed out by the backend expire, so published pages point
/// at a local copy instead. Any failure keeps the remote URL.
#[derive(Clone, Debug)]
pub struct ThumbnailMirror {
    client: reqwest::Client,
    dir: PathBuf,
}

impl ThumbnailMirror {
    /// Mirror writing into `dir` (created on demand).
    pub fn new(client: reqwest::Client, dir: impl AsRef<Path>) -> Self {
        Self {
            client,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Local file used for `entry_id`.
    pub fn local_path(&self, entry_id: &str) -> PathBuf {
        let safe: String = entry_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.png"))
    }

    /// Decode `bytes` and store them as PNG for `entry_id`.
    pub fn persist(&self, entry_id: &str, bytes: &[u8]) -> DiaryResult<PathBuf> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| DiaryError::content(format!("thumbnail is not a decodable image: {e}")))?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.local_path(entry_id);
        img.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| {
                DiaryError::content(format!("write thumbnail '{}': {e}", path.display()))
            })?;
        Ok(path)
    }

    async fn download(&self, url: &str) -> DiaryResult<Vec<u8>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Mirror one thumbnail, returning the local path or, on any failure, `url` unchanged.
    pub async fn resolve(&self, entry_id: &str, url: &str) -> String {
        let result = match self.download(url).await {
            Ok(bytes) => self.persist(entry_id, &bytes),
            Err(err) => Err(err),
        };
        match result {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(err) => {
                tracing::warn!(
                    entry = entry_id,
                    %url,
                    %err,
                    "thumbnail mirror failed, keeping remote url"
                );
                url.to_owned()
            }
        }
    }

    /// Copy of `entries` with every thumbnail mirrored (or left remote on failure).
    pub async fn mirror_all(&self, entries: &[DiaryEntry]) -> Vec<DiaryEntry> {
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut entry = entry.clone();
            if let Some(url) = entry.thumbnail_url.take() {
                entry.thumbnail_url = Some(self.resolve(&entry.id, &url).await);
            }
            out.push(entry);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/thumbnail.rs"]
mod tests;

use crate::content::model::{ContentBlock, DiaryEntry};

/// One numbered line of the detail page's editor-style body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DocumentLine {
    /// 1-based line number.
    pub number: usize,
    /// Line text; empty lines stay empty.
    pub text: String,
}

/// Render an entry body as numbered lines, headed by `/* {date}_diary.md */`.
pub fn document_lines(entry: &DiaryEntry) -> Vec<DocumentLine> {
    let mut raw = vec![format!("/* {}_diary.md */", entry.date.format("%Y-%m-%d"))];
    for block in &entry.content_blocks {
        match block {
            ContentBlock::Text { content } => {
                let text: String = content.iter().map(|r| r.plain_text.as_str()).collect();
                raw.extend(text.split('\n').map(str::to_owned));
            }
            ContentBlock::Code { text, language } => {
                raw.push(format!("```{language}"));
                raw.extend(text.split('\n').map(str::to_owned));
                raw.push("```".to_owned());
            }
            ContentBlock::Image { url, caption } => raw.push(format!("![{caption}]({url})")),
            ContentBlock::Bookmark { url, caption } if caption.is_empty() => {
                raw.push(format!("<{url}>"))
            }
            ContentBlock::Bookmark { url, caption } => raw.push(format!("[{caption}]({url})")),
        }
    }
    raw.into_iter()
        .enumerate()
        .map(|(i, text)| DocumentLine { number: i + 1, text })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/document.rs"]
mod tests;

use super::*;
use crate::content::model::RichTextItem;
use chrono::NaiveDate;

#[test]
fn header_then_numbered_body() {
    let entry = DiaryEntry {
        id: "1".to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
        sketch_id: "s".to_owned(),
        thumbnail_url: None,
        content_blocks: vec![
            ContentBlock::Text {
                content: vec![RichTextItem::plain("walked "), RichTextItem::plain("far\n")],
            },
            ContentBlock::Code {
                text: "noise(t)".to_owned(),
                language: "javascript".to_owned(),
            },
            ContentBlock::Bookmark {
                url: "https://x".to_owned(),
                caption: String::new(),
            },
        ],
    };
    let lines = document_lines(&entry);
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "/* 2025-09-10_diary.md */",
            "walked far",
            "",
            "```javascript",
            "noise(t)",
            "```",
            "<https://x>",
        ]
    );
    assert_eq!(lines[0].number, 1);
    assert_eq!(lines.last().unwrap().number, 7);
}

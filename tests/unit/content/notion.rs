use super::*;
use serde_json::json;

fn full_page(id: &str, date: Value, sketch: Value) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Date": date,
            "p5jsSketchId": sketch,
            "thumbnail": {
                "type": "files",
                "files": [
                    {"name": "t.png", "type": "external", "external": {"url": "https://cdn.example/t.png"}}
                ]
            }
        }
    })
}

fn date_prop(start: &str) -> Value {
    json!({"id": "d", "type": "date", "date": {"start": start, "end": null}})
}

fn sketch_prop(parts: &[&str]) -> Value {
    let runs: Vec<Value> = parts.iter().map(|p| json!({"plain_text": p})).collect();
    json!({"id": "s", "type": "rich_text", "rich_text": runs})
}

#[test]
fn header_reads_date_sketch_and_thumbnail() {
    let page = full_page("p1", date_prop("2025-09-10"), sketch_prop(&["Ab", "Cd"]));
    let header = page_header(&page, &PropertyNames::default()).unwrap();
    assert_eq!(header.id, "p1");
    assert_eq!(header.date, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
    assert_eq!(header.sketch_id, "AbCd");
    assert_eq!(header.thumbnail_url.as_deref(), Some("https://cdn.example/t.png"));
}

#[test]
fn header_reduces_datetimes_to_their_day() {
    let page = full_page(
        "p1",
        date_prop("2025-09-10T23:30:00.000+09:00"),
        sketch_prop(&["x"]),
    );
    let header = page_header(&page, &PropertyNames::default()).unwrap();
    assert_eq!(header.date, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
}

#[test]
fn local_datetimes_without_offset_are_accepted() {
    for raw in ["2025-09-10T10:00:00", "2025-09-10T10:00:00.250", "2025-09-10T10:00"] {
        assert_eq!(
            parse_entry_date(raw),
            NaiveDate::from_ymd_opt(2025, 9, 10),
            "{raw}"
        );
    }
    let page = full_page("p2", date_prop("2025-09-10T10:00:00"), sketch_prop(&["x"]));
    assert!(page_header(&page, &PropertyNames::default()).is_some());
    assert_eq!(parse_entry_date("10/09/2025"), None);
}

#[test]
fn pages_missing_required_fields_are_skipped() {
    let names = PropertyNames::default();
    let no_date = full_page(
        "p1",
        json!({"type": "date", "date": null}),
        sketch_prop(&["x"]),
    );
    assert!(page_header(&no_date, &names).is_none());

    let wrong_sketch_type = full_page(
        "p2",
        date_prop("2025-09-10"),
        json!({"type": "number", "number": 3}),
    );
    assert!(page_header(&wrong_sketch_type, &names).is_none());

    let partial = json!({"object": "page", "id": "p3"});
    assert!(page_header(&partial, &names).is_none());

    let not_a_page = json!({"object": "database", "id": "p4", "properties": {}});
    assert!(page_header(&not_a_page, &names).is_none());
}

#[test]
fn hosted_file_thumbnail_uses_file_url() {
    let mut page = full_page("p1", date_prop("2025-09-10"), sketch_prop(&["x"]));
    page["properties"]["thumbnail"] = json!({
        "type": "files",
        "files": [{"name": "a", "type": "file", "file": {"url": "https://s3.example/a", "expiry_time": "x"}}]
    });
    let header = page_header(&page, &PropertyNames::default()).unwrap();
    assert_eq!(header.thumbnail_url.as_deref(), Some("https://s3.example/a"));
}

fn block(v: Value) -> RawBlock {
    serde_json::from_value(v).unwrap()
}

#[test]
fn text_like_blocks_become_text() {
    let b = block(json!({
        "id": "b1",
        "type": "heading_2",
        "has_children": false,
        "heading_2": {"rich_text": [
            {"plain_text": "Hi", "annotations": {"bold": true, "color": "red"}},
            {"plain_text": " there", "href": "https://x"}
        ]}
    }));
    let ContentBlock::Text { content } = map_block(&b).unwrap() else {
        panic!("expected text");
    };
    assert_eq!(content.len(), 2);
    assert!(content[0].annotations.bold);
    assert_eq!(content[0].annotations.color, "red");
    assert_eq!(content[1].href.as_deref(), Some("https://x"));
    assert_eq!(content[1].annotations.color, "default");
}

#[test]
fn media_blocks_are_mapped() {
    let image = block(json!({
        "id": "b1", "type": "image",
        "image": {"type": "external", "external": {"url": "https://img"}, "caption": [{"plain_text": "cap"}]}
    }));
    assert_eq!(
        map_block(&image),
        Some(ContentBlock::Image {
            url: "https://img".to_owned(),
            caption: "cap".to_owned()
        })
    );

    let code = block(json!({
        "id": "b2", "type": "code",
        "code": {"rich_text": [{"plain_text": "let a"}, {"plain_text": " = 1;"}], "language": "javascript"}
    }));
    assert_eq!(
        map_block(&code),
        Some(ContentBlock::Code {
            text: "let a = 1;".to_owned(),
            language: "javascript".to_owned()
        })
    );

    let bookmark = block(json!({
        "id": "b3", "type": "bookmark",
        "bookmark": {"url": "https://link", "caption": []}
    }));
    assert_eq!(
        map_block(&bookmark),
        Some(ContentBlock::Bookmark {
            url: "https://link".to_owned(),
            caption: String::new()
        })
    );
}

#[test]
fn unsupported_blocks_are_dropped() {
    let divider = block(json!({"id": "b1", "type": "divider", "divider": {}}));
    assert!(map_block(&divider).is_none());
    let broken_image = block(json!({"id": "b2", "type": "image", "image": {"type": "file"}}));
    assert!(map_block(&broken_image).is_none());
}

#[test]
fn continuation_requires_has_more() {
    let done: Paginated<Value> = serde_json::from_value(
        json!({"results": [], "has_more": false, "next_cursor": "c"}),
    )
    .unwrap();
    assert_eq!(done.continuation(), None);
    let more: Paginated<Value> = serde_json::from_value(
        json!({"results": [], "has_more": true, "next_cursor": "c"}),
    )
    .unwrap();
    assert_eq!(more.continuation(), Some("c"));
}

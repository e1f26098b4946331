use chrono::NaiveDate;

use super::*;

fn entries() -> Vec<DiaryEntry> {
    (1..=6)
        .rev()
        .map(|d| DiaryEntry {
            id: format!("id{d}"),
            date: NaiveDate::from_ymd_opt(2025, 9, d).unwrap(),
            sketch_id: format!("sk{d}"),
            thumbnail_url: None,
            content_blocks: vec![],
        })
        .collect()
}

fn ids(w: &NeighborWindow) -> Vec<(Role, String)> {
    w.iter().map(|(r, e)| (r, e.id.clone())).collect()
}

#[test]
fn window_in_the_middle_has_all_roles() {
    let w = NeighborWindow::around(&entries(), "id3").unwrap();
    assert_eq!(
        ids(&w),
        vec![
            (Role::PrevPrev, "id1".to_string()),
            (Role::Prev, "id2".to_string()),
            (Role::Current, "id3".to_string()),
            (Role::Next, "id4".to_string()),
            (Role::NextNext, "id5".to_string()),
        ]
    );
}

#[test]
fn window_at_the_newest_entry_has_no_next() {
    let w = NeighborWindow::around(&entries(), "id6").unwrap();
    assert!(w.get(Role::Next).is_none());
    assert!(w.get(Role::NextNext).is_none());
    assert_eq!(w.get(Role::PrevPrev).unwrap().id, "id4");
    assert_eq!(w.current().unwrap().id, "id6");
}

#[test]
fn unknown_id_has_no_window() {
    assert!(NeighborWindow::around(&entries(), "nope").is_none());
}

#[test]
fn offsets_are_ordered() {
    let offsets: Vec<i8> = Role::ALL.iter().map(|r| r.offset()).collect();
    assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
}

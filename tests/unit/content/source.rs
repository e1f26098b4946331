use super::*;

#[tokio::test]
async fn notion_source_without_data_source_fails_fatally() {
    let source = NotionSource::new(NotionConfig::default()).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(err.is_config());
}

#[tokio::test]
async fn snapshot_source_sorts_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "1", "date": "2025-09-10", "sketch_id": "a"},
            {"id": "2", "date": "2025-10-05", "sketch_id": "b"},
            {"id": "3", "date": "2025-09-22", "sketch_id": "c"}
        ]"#,
    )
    .unwrap();

    let entries = SnapshotSource::new(&path).fetch_all().await.unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["2", "3", "1"]);
}

#[tokio::test]
async fn snapshot_source_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");
    std::fs::write(&path, "{").unwrap();
    let err = SnapshotSource::new(&path).fetch_all().await.unwrap_err();
    assert!(matches!(err, DiaryError::Serde(_)));
}

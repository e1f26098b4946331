use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(DiaryError::config("x").to_string().contains("configuration error:"));
    assert!(DiaryError::validation("x").to_string().contains("validation error:"));
    assert!(DiaryError::content("x").to_string().contains("content error:"));
    assert!(DiaryError::render("x").to_string().contains("render error:"));
    assert!(DiaryError::serde("x").to_string().contains("serialization error:"));
}

#[test]
fn shared_is_transparent_and_keeps_kind() {
    let err = DiaryError::Shared(Arc::new(DiaryError::config("NOTION_DATA_SOURCE_ID is not set")));
    assert!(err.to_string().contains("NOTION_DATA_SOURCE_ID"));
    assert!(err.is_config());
    assert!(!DiaryError::content("x").is_config());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DiaryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

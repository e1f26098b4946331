use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_env() {
    let cfg = DiaryConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg.notion.api_base, DEFAULT_NOTION_API_BASE);
    assert_eq!(cfg.notion.version, DEFAULT_NOTION_VERSION);
    assert_eq!(cfg.notion.page_size, 100);
    assert_eq!(cfg.sketch.user, "k1105");
    assert!(cfg.notion.token.is_none());
}

#[test]
fn missing_data_source_is_a_config_error() {
    let cfg = DiaryConfig::from_lookup(lookup(&[("NOTION_DATA_SOURCE_ID", "   ")]));
    let err = cfg.notion.require_data_source().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn env_overrides_are_applied() {
    let cfg = DiaryConfig::from_lookup(lookup(&[
        ("NOTION_TOKEN", "secret"),
        ("NOTION_DATA_SOURCE_ID", "ds-1"),
        ("NOTION_API_BASE", "http://localhost:9000/"),
        ("SKETCH_USER", "someone"),
    ]));
    assert_eq!(cfg.notion.token.as_deref(), Some("secret"));
    assert_eq!(cfg.notion.require_data_source().unwrap(), "ds-1");
    assert_eq!(cfg.notion.api_base, "http://localhost:9000");
    assert_eq!(cfg.sketch.user, "someone");
}

//! Integration tests for the pack store.

use std::collections::BTreeMap;
use std::sync::Arc;

use locpack::parser::Template;
use locpack::{LoadError, LocaleCode, LocaleInfo, LocalePack, PackStore, StoreError};

const EN: &str = r#"
var lang_en = {
    'languageName': 'English',
    'localizedLanguageName': null,
    'htmlLang': 'en',
    'status.ready': 'Ready',
    'status.addedFiles': 'Added {0} files.',
};
"#;

const ZH: &str = r#"
var lang_zh_hans = {
    'languageName': 'Chinese (Simplified)',
    'localizedLanguageName': '简体中文',
    'htmlLang': 'zh-Hans',
    'status.ready': '准备就绪',
};
"#;

fn pack(code: &str, name: &str, messages: &[(&str, &str)]) -> LocalePack {
    LocalePack::builder()
        .code(code)
        .display_name(name)
        .messages(
            messages
                .iter()
                .map(|(key, text)| (key.to_string(), Template::parse(text)))
                .collect::<BTreeMap<_, _>>(),
        )
        .build()
}

// =========================================================================
// Builder and Basic API
// =========================================================================

#[test]
fn store_default_locale_is_english() {
    let store = PackStore::new();
    assert_eq!(store.default_locale().as_str(), "en");
    assert!(store.is_empty());
}

#[test]
fn store_builder_sets_default_locale() {
    let store = PackStore::builder().default_locale("zh-Hans").build();
    assert_eq!(store.default_locale().as_str(), "zh-Hans");
}

#[test]
fn store_with_default_locale_shorthand() {
    let store = PackStore::with_default_locale("de");
    assert_eq!(store.default_locale().as_str(), "de");
}

// =========================================================================
// Registration
// =========================================================================

#[test]
fn register_str_returns_message_count() {
    let mut store = PackStore::new();
    let count = store.register_str("en", EN).unwrap();
    // Metadata keys are not messages.
    assert_eq!(count, 2);
    assert!(store.contains("en"));
}

#[test]
fn register_str_reads_metadata() {
    let mut store = PackStore::new();
    store.register_str("zh-Hans", ZH).unwrap();

    let pack = store.get("zh-Hans").unwrap();
    assert_eq!(pack.display_name(), "Chinese (Simplified)");
    assert_eq!(pack.localized_display_name(), Some("简体中文"));
    assert_eq!(pack.html_lang(), "zh-Hans");
    assert_eq!(pack.len(), 1);
}

#[test]
fn duplicate_registration_fails_and_keeps_first_pack() {
    let mut store = PackStore::new();
    store.register(pack("en", "English", &[("a", "first")])).unwrap();

    let err = store
        .register(pack("en", "English again", &[("a", "second"), ("b", "extra")]))
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::DuplicateLocale {
            code: LocaleCode::new("en")
        }
    );
    assert_eq!(store.len(), 1);
    let kept = store.get("en").unwrap();
    assert_eq!(kept.display_name(), "English");
    assert_eq!(kept.template("a").map(Template::source), Some("first"));
    assert!(!kept.contains_key("b"));
}

#[test]
fn duplicate_register_str_is_a_store_error() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();
    let err = store.register_str("en", EN).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Store(StoreError::DuplicateLocale { .. })
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn register_str_parse_error_reports_pseudo_path() {
    let mut store = PackStore::new();
    let err = store
        .register_str("en", "{ 'languageName': 'English', 'broken': }")
        .unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path.to_string_lossy(), "<en>");
            assert_eq!(line, 1);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(store.is_empty());
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn get_unknown_locale_fails_with_suggestions() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();
    store.register_str("zh-Hans", ZH).unwrap();

    let err = store.get("zh-hans").unwrap_err();
    assert_eq!(
        err,
        StoreError::UnknownLocale {
            code: "zh-hans".to_string(),
            suggestions: vec!["zh-Hans".to_string()],
        }
    );
}

#[test]
fn get_unknown_locale_without_near_miss_has_no_suggestions() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();

    let err = store.get("ja").unwrap_err();
    assert_eq!(err.to_string(), "unknown locale 'ja'");
}

#[test]
fn get_shared_returns_same_pack() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();

    let first = store.get_shared("en").unwrap();
    let second = store.get_shared("en").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(store.get_shared("fr").is_err());
}

#[test]
fn list_locales_follows_registration_order() {
    let mut store = PackStore::new();
    store.register_str("zh-Hans", ZH).unwrap();
    store.register_str("en", EN).unwrap();

    let listed: Vec<LocaleInfo> = store.list_locales().collect();
    assert_eq!(
        listed,
        vec![
            LocaleInfo {
                code: LocaleCode::new("zh-Hans"),
                name: "Chinese (Simplified)".to_string(),
                localized_name: Some("简体中文".to_string()),
            },
            LocaleInfo {
                code: LocaleCode::new("en"),
                name: "English".to_string(),
                localized_name: None,
            },
        ]
    );
    assert_eq!(listed[0].label(), "简体中文");
    assert_eq!(listed[1].label(), "English");
}

#[test]
fn list_locales_is_restartable() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();
    store.register_str("zh-Hans", ZH).unwrap();

    let first: Vec<LocaleInfo> = store.list_locales().collect();
    let second: Vec<LocaleInfo> = store.list_locales().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn list_locales_serializes_for_ui() {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();

    let listed: Vec<LocaleInfo> = store.list_locales().collect();
    let json = serde_json::to_string(&listed).unwrap();
    assert_eq!(
        json,
        r#"[{"code":"en","name":"English","localized_name":null}]"#
    );
}

// =========================================================================
// Freezing
// =========================================================================

#[test]
fn into_resolver_requires_default_locale() {
    let mut store = PackStore::new();
    store.register_str("zh-Hans", ZH).unwrap();

    let err = store.into_resolver().unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingDefaultLocale { ref code } if code.as_str() == "en"
    ));
}

#[test]
fn into_resolver_with_custom_default() {
    let mut store = PackStore::with_default_locale("zh-Hans");
    store.register_str("zh-Hans", ZH).unwrap();

    let resolver = store.into_resolver().unwrap();
    assert_eq!(resolver.default_locale().as_str(), "zh-Hans");
    assert_eq!(resolver.resolve("en", "status.ready", &[]), "准备就绪");
}

#[test]
fn builtin_store_has_english_and_chinese() {
    let store = PackStore::builtin().unwrap();
    let codes: Vec<&str> = store.codes().map(LocaleCode::as_str).collect();
    assert_eq!(codes, vec!["en", "zh-Hans"]);
}

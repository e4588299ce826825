//! Integration tests for message resolution and the fallback chain.

use std::sync::Arc;
use std::thread;

use locpack::{Diagnostic, FallbackStage, LocaleCode, PackStore, Resolver, Value, args};

const EN: &str = r#"{
    'languageName': 'English',
    'localizedLanguageName': null,
    'status.ready': 'Ready',
    'status.processing': 'Processing: {0}/{1} ({2})',
    'ui.moreFiles': '{0} items',
    'ui.logo': 'RMMV/MZ\nDecrypter',
    'log.success': 'Success: {0} -> {1}',
    'only.english': 'Only in English',
}"#;

const ZH: &str = r#"{
    'languageName': 'Chinese (Simplified)',
    'localizedLanguageName': '简体中文',
    'status.ready': '准备就绪',
    'status.processing': '正在处理: {0}/{1} ({2})',
    'ui.moreFiles': '{0} 项',
    'ui.logo': 'RMMV/MZ\n解密工具',
    'log.success': '成功: {0} -> {1}',
}"#;

fn resolver() -> Resolver {
    let mut store = PackStore::new();
    store.register_str("en", EN).unwrap();
    store.register_str("zh-Hans", ZH).unwrap();
    store.into_resolver().unwrap()
}

// =========================================================================
// Exact Locale
// =========================================================================

#[test]
fn resolves_in_requested_locale() {
    let resolver = resolver();
    assert_eq!(resolver.resolve("zh-Hans", "status.ready", &[]), "准备就绪");
    assert_eq!(resolver.resolve("en", "status.ready", &[]), "Ready");
}

#[test]
fn default_locale_returns_template_verbatim_without_placeholders() {
    let resolver = resolver();
    let pack = resolver.get("en").unwrap();
    for (key, template) in pack.messages() {
        if !template.has_placeholders() {
            assert_eq!(resolver.resolve("en", key, &[]), template.source());
        }
    }
}

#[test]
fn substitutes_positional_arguments() {
    let resolver = resolver();
    assert_eq!(
        resolver.resolve("en", "status.processing", &args![3, 10, "30%"]),
        "Processing: 3/10 (30%)"
    );
    assert_eq!(
        resolver.resolve("zh-Hans", "status.processing", &args![3, 10, "30%"]),
        "正在处理: 3/10 (30%)"
    );
}

#[test]
fn out_of_range_placeholder_is_left_literal() {
    let resolver = resolver();
    assert_eq!(resolver.resolve("en", "ui.moreFiles", &[]), "{0} items");

    let resolution = resolver.resolve_detailed("en", "ui.moreFiles", &[]);
    assert_eq!(resolution.stage, FallbackStage::ExactLocale);
    assert_eq!(
        resolution.diagnostics,
        vec![Diagnostic::PlaceholderIndexOutOfRange {
            key: "ui.moreFiles".to_string(),
            index: 0,
            supplied: 0,
        }]
    );
}

#[test]
fn partially_supplied_arguments_substitute_what_they_can() {
    let resolver = resolver();
    assert_eq!(
        resolver.resolve("en", "log.success", &args!["a.rpgmvp"]),
        "Success: a.rpgmvp -> {1}"
    );
}

#[test]
fn extra_arguments_are_ignored() {
    let resolver = resolver();
    let resolution = resolver.resolve_detailed("en", "ui.moreFiles", &args![4, "unused"]);
    assert_eq!(resolution.text, "4 items");
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn float_arguments_render_with_display() {
    let resolver = resolver();
    assert_eq!(
        resolver.resolve("en", "ui.moreFiles", &[Value::Float(2.5)]),
        "2.5 items"
    );
}

#[test]
fn embedded_newlines_are_preserved() {
    let resolver = resolver();
    assert_eq!(resolver.resolve("en", "ui.logo", &[]), "RMMV/MZ\nDecrypter");
    assert_eq!(resolver.resolve("zh-Hans", "ui.logo", &[]), "RMMV/MZ\n解密工具");
}

// =========================================================================
// Fallback Chain
// =========================================================================

#[test]
fn missing_translation_falls_back_to_default_locale() {
    let resolver = resolver();
    let resolution = resolver.resolve_detailed("zh-Hans", "only.english", &[]);

    assert_eq!(resolution.text, "Only in English");
    assert_eq!(resolution.stage, FallbackStage::DefaultLocale);
    assert_eq!(
        resolution.diagnostics,
        vec![Diagnostic::MissingTranslation {
            locale: "zh-Hans".to_string(),
            key: "only.english".to_string(),
            default_locale: LocaleCode::new("en"),
        }]
    );
}

#[test]
fn fallback_text_equals_default_locale_text() {
    let resolver = resolver();
    assert_eq!(
        resolver.resolve("zh-Hans", "only.english", &args![1]),
        resolver.resolve("en", "only.english", &args![1])
    );
}

#[test]
fn unregistered_locale_falls_back_to_default_locale() {
    let resolver = resolver();
    let resolution = resolver.resolve_detailed("fr", "status.ready", &[]);
    assert_eq!(resolution.text, "Ready");
    assert_eq!(resolution.stage, FallbackStage::DefaultLocale);
}

#[test]
fn unknown_key_renders_the_key_itself() {
    let resolver = resolver();
    for locale in ["en", "zh-Hans", "fr"] {
        let resolution = resolver.resolve_detailed(locale, "no.such.key", &[]);
        assert_eq!(resolution.text, "no.such.key");
        assert_eq!(resolution.stage, FallbackStage::RawKey);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::MissingKey {
                locale: locale.to_string(),
                key: "no.such.key".to_string(),
            }]
        );
    }
}

#[test]
fn missing_key_in_default_locale_skips_second_lookup() {
    let resolver = resolver();
    let resolution = resolver.resolve_detailed("en", "no.such.key", &[]);
    assert_eq!(resolution.stage, FallbackStage::RawKey);
    assert_eq!(resolution.diagnostics.len(), 1);
}

#[test]
fn every_default_key_resolves_non_empty_in_every_locale() {
    let resolver = resolver();
    let keys: Vec<String> = resolver
        .get("en")
        .unwrap()
        .keys()
        .map(str::to_string)
        .collect();

    for info in resolver.list_locales() {
        for key in &keys {
            let text = resolver.resolve(info.code.as_str(), key, &args![1, 2, 3]);
            assert!(!text.is_empty(), "{}/{key} rendered empty", info.code);
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let resolver = resolver();
    let first = resolver.resolve_detailed("zh-Hans", "only.english", &args![1]);
    let second = resolver.resolve_detailed("zh-Hans", "only.english", &args![1]);
    assert_eq!(first, second);
}

// =========================================================================
// Unformatted Lookup
// =========================================================================

#[test]
fn message_returns_unformatted_template() {
    let resolver = resolver();
    assert_eq!(
        resolver.message("en", "status.processing"),
        "Processing: {0}/{1} ({2})"
    );
    assert_eq!(resolver.message("zh-Hans", "only.english"), "Only in English");
    assert_eq!(resolver.message("en", "no.such.key"), "no.such.key");
}

#[test]
fn message_or_uses_supplied_default_for_missing_key() {
    let resolver = resolver();
    assert_eq!(resolver.message_or("en", "no.such.key", "fallback"), "fallback");
    assert_eq!(resolver.message_or("en", "status.ready", "fallback"), "Ready");
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = Arc::new(resolver());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.resolve("en", "ui.moreFiles", &args![i]))
        })
        .collect();

    let mut results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    results.sort();
    assert_eq!(results, vec!["0 items", "1 items", "2 items", "3 items"]);
}

#[test]
fn get_fails_loudly_for_unknown_locale() {
    let resolver = resolver();
    assert!(resolver.get("fr").is_err());
}

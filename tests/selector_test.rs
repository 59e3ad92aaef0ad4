use std::sync::Arc;

use styleset::base::capabilities::{PageCapabilities, RenderingEngine};
use styleset::base::error::StyleSetError;
use styleset::dom::memory::{MemoryCookieJar, MemoryDocument};
use styleset::dom::Document;
use styleset::selector::config::SelectorConfig;
use styleset::selector::switcher::StyleSheetSelector;

fn themed_page_with_jar(jar: MemoryCookieJar) -> Arc<MemoryDocument> {
    let document = Arc::new(MemoryDocument::with_jar(jar));
    document.add_link("stylesheet", "default", false);
    document.add_link("alternate stylesheet", "dark", true);
    document.add_link("alternate stylesheet", "high contrast", true);
    document
}

#[test]
fn test_preference_survives_navigation() {
    let jar = MemoryCookieJar::new();

    // First page visit: the visitor picks a theme, then navigates away.
    let first = themed_page_with_jar(jar.clone());
    let selector = StyleSheetSelector::new(
        first,
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    selector.on_ready();
    selector.registry().select("high contrast");
    selector.on_teardown();

    // Next page shares the jar, as navigation within one site does.
    let second = themed_page_with_jar(jar);
    let selector = StyleSheetSelector::new(
        second.clone(),
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    selector.on_ready();
    assert_eq!(selector.registry().active_title(), "high contrast");
}

#[test]
fn test_empty_active_title_persists_and_restores_to_nothing() {
    let jar = MemoryCookieJar::new();

    let first = themed_page_with_jar(jar.clone());
    let selector = StyleSheetSelector::new(
        first,
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    // Nothing selected ever becomes active on a page with defaults off.
    selector.registry().select("no such theme");
    selector.on_teardown();
    assert_eq!(selector.store().lookup("stylesheet"), Some(String::new()));

    let second = themed_page_with_jar(jar);
    let selector = StyleSheetSelector::new(
        second.clone(),
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    selector.on_ready();
    // The empty stored preference applies nothing; the page default wins.
    assert_eq!(selector.registry().active_title(), "default");
}

#[test]
fn test_round_trip_on_the_flagged_engine() {
    let jar = MemoryCookieJar::new();
    let caps = PageCapabilities::for_engine(RenderingEngine::WebKit);

    let first = themed_page_with_jar(jar.clone());
    let selector = StyleSheetSelector::new(first, &caps, SelectorConfig::default());
    selector.registry().select("dark");
    selector.on_teardown();

    let second = themed_page_with_jar(jar);
    let selector = StyleSheetSelector::new(second, &caps, SelectorConfig::default());
    selector.on_ready();
    assert_eq!(selector.registry().active_title(), "dark");
}

#[test]
fn test_custom_cookie_name_and_scope() {
    let jar = MemoryCookieJar::new();
    let config = SelectorConfig::builder()
        .cookie_name("site_theme")
        .expiry_days(365)
        .domain("example.com")
        .path("/")
        .build()
        .unwrap();

    let document = themed_page_with_jar(jar.clone());
    let selector =
        StyleSheetSelector::new(document.clone(), &PageCapabilities::default(), config);
    selector.registry().select("dark");
    selector.on_teardown();

    assert_eq!(selector.config().expiry_days, 365);
    assert_eq!(document.cookie(), "site_theme=dark");
    assert_eq!(selector.store().get("site_theme"), "dark");
    assert_eq!(selector.store().lookup("stylesheet"), None);
}

#[test]
fn test_forget_then_ready_leaves_page_defaults() {
    let jar = MemoryCookieJar::new();

    let first = themed_page_with_jar(jar.clone());
    let selector = StyleSheetSelector::new(
        first,
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    selector.registry().select("dark");
    selector.on_teardown();
    selector.forget();

    let second = themed_page_with_jar(jar);
    let selector = StyleSheetSelector::new(
        second.clone(),
        &PageCapabilities::default(),
        SelectorConfig::default(),
    );
    selector.on_ready();
    assert_eq!(selector.registry().active_title(), "default");
}

#[test]
fn test_disabled_cookies_disable_every_hook() {
    let caps = PageCapabilities {
        cookies_enabled: false,
        ..PageCapabilities::default()
    };
    let document = themed_page_with_jar(MemoryCookieJar::new());
    let selector = StyleSheetSelector::new(document.clone(), &caps, SelectorConfig::default());

    selector.registry().select("dark");
    selector.on_teardown();
    assert!(document.jar().is_empty());

    selector.forget();
    assert!(document.jar().is_empty());

    // A preference some other script wrote is not restored either.
    document.write_cookie("stylesheet=high contrast;Max-Age=3600");
    selector.on_ready();
    assert_eq!(selector.registry().active_title(), "dark");
}

#[test]
fn test_config_serde_defaults_via_public_api() {
    let config: SelectorConfig = serde_json::from_str(r#"{"expiry_days":7}"#).unwrap();
    assert_eq!(config.cookie_name, "stylesheet");
    assert_eq!(config.expiry_days, 7);
    assert_eq!(config.path, "/");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_rejects_unusable_values() {
    assert_eq!(
        SelectorConfig::builder().cookie_name("").build().unwrap_err(),
        StyleSetError::EmptyCookieName
    );
    assert!(matches!(
        SelectorConfig::builder()
            .cookie_name("bad;name")
            .build()
            .unwrap_err(),
        StyleSetError::InvalidCookieName(_)
    ));
    assert!(matches!(
        SelectorConfig::builder().path("relative").build().unwrap_err(),
        StyleSetError::InvalidCookiePath(_)
    ));

    // A deserialized config is validated the same way.
    let config: SelectorConfig = serde_json::from_str(r#"{"cookie_name":"a b"}"#).unwrap();
    assert!(config.validate().is_err());
}

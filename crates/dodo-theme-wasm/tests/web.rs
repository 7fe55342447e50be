//! Browser-based WASM tests.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use dodo_theme_wasm::ThemePreview;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("document root")
}

fn root_property(name: &str) -> String {
    root().style().get_property_value(name).unwrap_or_default()
}

fn reset_root() {
    let root = root();
    let _ = root.class_list().remove_1("dark");
    let _ = root.set_attribute("style", "");
}

#[wasm_bindgen_test]
fn applies_light_color_variables() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    let applied = preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "themeConfig": { "bgPrimary": "#ff0000", "textError": "#b91c1c" }
        }"##,
    );

    assert!(applied);
    assert_eq!(root_property("--bg-primary"), "#ff0000");
    // Fan-out roles write every mapped variable.
    assert_eq!(root_property("--text-error-primary"), "#b91c1c");
    assert_eq!(root_property("--border-error"), "#b91c1c");
}

#[wasm_bindgen_test]
fn ignores_messages_with_other_type_tags() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    let applied = preview.apply_json(
        r##"{ "type": "analytics-event", "themeConfig": { "bgPrimary": "#123456" } }"##,
    );

    assert!(!applied);
    assert_eq!(root_property("--bg-primary"), "");
}

#[wasm_bindgen_test]
fn rejects_invalid_color_values_per_field() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "themeConfig": {
                "bgPrimary": "var(--steal)",
                "textPrimary": "#111111"
            }
        }"##,
    );

    assert_eq!(root_property("--bg-primary"), "");
    assert_eq!(root_property("--text-primary"), "#111111");
}

#[wasm_bindgen_test]
fn dark_toggle_without_dark_value_keeps_previous_property() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{ "type": "dodo-theme-update", "theme": "light",
              "themeConfig": { "bgPrimary": "#ffffff" } }"##,
    );
    assert_eq!(root_property("--bg-primary"), "#ffffff");

    // Switch to dark with no dark_bgPrimary: the class flips but the
    // property keeps its previously applied value.
    preview.apply_json(r##"{ "type": "dodo-theme-update", "theme": "dark", "themeConfig": {} }"##);

    assert!(root().class_list().contains("dark"));
    assert_eq!(root_property("--bg-primary"), "#ffffff");
}

#[wasm_bindgen_test]
fn dark_mode_reads_dark_prefixed_keys() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "theme": "dark",
            "themeConfig": { "bgPrimary": "#ffffff", "dark_bgPrimary": "#0a0a0a" }
        }"##,
    );

    assert_eq!(root_property("--bg-primary"), "#0a0a0a");
}

#[wasm_bindgen_test]
fn applies_shared_scalar_tables() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "themeConfig": { "radius": "8px", "fontSize": "xl", "fontWeight": "bold" }
        }"##,
    );

    assert_eq!(root_property("--radius"), "8px");
    assert_eq!(root_property("--base-font-size"), "18px");
    assert_eq!(root_property("--font-weight-body"), "700");
}

#[wasm_bindgen_test]
fn rejects_unknown_scalar_presets() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "themeConfig": { "radius": "8", "fontSize": "enormous" }
        }"##,
    );

    assert_eq!(root_property("--radius"), "");
    assert_eq!(root_property("--base-font-size"), "");
}

#[wasm_bindgen_test]
fn loads_font_link_and_family_for_valid_url() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");
    let url = "https://fonts.googleapis.com/css2?family=Lora:wght@400;700";

    preview.apply_json(&format!(
        r##"{{ "type": "dodo-theme-update", "themeConfig": {{ "fontPrimaryUrl": "{url}" }} }}"##
    ));

    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let link = document
        .get_element_by_id("dodo-font-primary")
        .expect("font link created");
    assert_eq!(link.get_attribute("href").as_deref(), Some(url));
    assert_eq!(root_property("--font-gabarito"), "'Lora', sans-serif");
    assert_eq!(root_property("--font-primary"), "'Lora', sans-serif");
}

#[wasm_bindgen_test]
fn rejects_non_https_font_url() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");

    preview.apply_json(
        r##"{
            "type": "dodo-theme-update",
            "themeConfig": { "fontSecondaryUrl": "javascript:alert(1)" }
        }"##,
    );

    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    assert!(document.get_element_by_id("dodo-font-secondary").is_none());
    assert_eq!(root_property("--font-inter"), "");
}

#[wasm_bindgen_test]
fn reapplying_identical_payload_is_idempotent() {
    reset_root();
    let preview = ThemePreview::new().expect("preview");
    let payload = r##"{
        "type": "dodo-theme-update",
        "theme": "dark",
        "themeConfig": {
            "dark_bgPrimary": "#0a0a0a",
            "radius": "4px",
            "fontSize": "sm"
        }
    }"##;

    preview.apply_json(payload);
    let first = (
        root_property("--bg-primary"),
        root_property("--radius"),
        root_property("--base-font-size"),
        root().class_list().contains("dark"),
    );

    preview.apply_json(payload);
    let second = (
        root_property("--bg-primary"),
        root_property("--radius"),
        root_property("--base-font-size"),
        root().class_list().contains("dark"),
    );

    assert_eq!(first, second);
    assert_eq!(first.0, "#0a0a0a");
}

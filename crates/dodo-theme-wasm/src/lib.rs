#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # dodo-theme-wasm
//!
//! Live storefront theme preview, compiled to WebAssembly.
//!
//! The storefront editor embeds the storefront in an iframe and pushes
//! theme changes to it via `postMessage`. This crate is the receiving
//! side: it decodes `"dodo-theme-update"` messages and applies them
//! directly to the live DOM (root CSS custom properties, the dark-mode
//! class, custom font `<link>` elements, and the storefront branding
//! elements), then acknowledges with a `"dodo-theme-applied"` message to
//! the parent window.
//!
//! The sender is whatever happens to be the parent frame, so every value
//! is re-checked here with the same validators the server-render path
//! uses ([`dodo_theme`]): this handler has no persisted validation stage
//! in front of it, and a compromised parent frame is exactly the threat
//! this boundary defends against. Messages with any other `type` tag are
//! ignored silently.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { attachThemePreview } from 'dodo-theme-wasm';
//!
//! async function main() {
//!     await init();
//!     attachThemePreview();
//! }
//!
//! main();
//! ```

use dodo_theme::{
    flat_key, font_family_from_url, is_valid_color, is_valid_font_url, is_valid_radius,
    sanitize_css, ColorRole, FontSize, FontWeight, RADIUS_VARIABLES,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlLinkElement, MessageEvent};

/// `type` tag of inbound theme update messages.
pub const THEME_UPDATE_TYPE: &str = "dodo-theme-update";
/// `type` tag of the acknowledgement posted back to the parent.
pub const THEME_APPLIED_TYPE: &str = "dodo-theme-applied";

/// Element id of the primary custom font stylesheet link.
const FONT_PRIMARY_LINK_ID: &str = "dodo-font-primary";
/// Element id of the secondary custom font stylesheet link.
const FONT_SECONDARY_LINK_ID: &str = "dodo-font-secondary";

/// Element ids the branding patch writes to.
const STOREFRONT_NAME_ID: &str = "storefront-name";
const STOREFRONT_LOGO_ID: &str = "storefront-logo";
const STOREFRONT_BANNER_ID: &str = "storefront-banner";

/// Initialize the module.
///
/// Sets up the panic hook for readable errors in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// An inbound editor message, as decoded from the `postMessage` payload.
///
/// `theme_config` values stay raw [`Value`]s so one wrong-typed entry
/// skips that entry, not the whole map.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeUpdateMessage {
    #[serde(rename = "type")]
    kind: String,
    theme: Option<String>,
    #[serde(rename = "themeConfig")]
    theme_config: Option<BTreeMap<String, Value>>,
    storefront: Option<StorefrontPatch>,
}

/// Branding fields riding along with a theme update. Orthogonal to
/// theming but part of the same message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StorefrontPatch {
    name: Option<String>,
    logo: Option<String>,
    banner: Option<String>,
}

fn decode_update(json: &str) -> Option<ThemeUpdateMessage> {
    let msg: ThemeUpdateMessage = serde_json::from_str(json).ok()?;
    (msg.kind == THEME_UPDATE_TYPE).then_some(msg)
}

fn get_str<'a>(cfg: &'a BTreeMap<String, Value>, key: &str) -> Option<&'a str> {
    cfg.get(key).and_then(Value::as_str)
}

/// True when `value` is free of attribute-breaking characters.
fn is_safe_attr(value: &str) -> bool {
    !value
        .chars()
        .any(|c| matches!(c, '<' | '>' | '"' | '\'' | '{' | '}'))
}

/// The live theme applier for the preview iframe.
#[wasm_bindgen]
pub struct ThemePreview {
    document: Document,
}

#[wasm_bindgen]
impl ThemePreview {
    /// Create an applier bound to the current document.
    ///
    /// # Errors
    /// Fails when no window or document is available.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ThemePreview, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        Ok(Self { document })
    }

    /// Handle a raw `message` event.
    ///
    /// Non-matching or undecodable payloads are ignored silently; a
    /// matching payload is applied and acknowledged to the parent.
    #[wasm_bindgen(js_name = "handleMessage")]
    pub fn handle_message(&self, event: &MessageEvent) {
        let Ok(json) = js_sys::JSON::stringify(&event.data()) else {
            return;
        };
        self.apply_json(&String::from(json));
    }

    /// Decode and apply an update from JSON text.
    ///
    /// Returns true when the message carried the expected `type` tag and
    /// was applied.
    #[wasm_bindgen(js_name = "applyJson")]
    pub fn apply_json(&self, json: &str) -> bool {
        let Some(msg) = decode_update(json) else {
            return false;
        };
        self.apply(&msg);
        post_ack();
        true
    }
}

impl ThemePreview {
    fn apply(&self, msg: &ThemeUpdateMessage) {
        let Some(root) = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        // Toggle dark / light first; color lookup below follows the
        // resulting mode.
        match msg.theme.as_deref() {
            Some("dark") => {
                let _ = root.class_list().add_1("dark");
            }
            Some("light") => {
                let _ = root.class_list().remove_1("dark");
            }
            _ => {}
        }
        let is_dark = root.class_list().contains("dark");

        if let Some(cfg) = &msg.theme_config {
            self.apply_theme_config(&root, cfg, is_dark);
        }
        if let Some(patch) = &msg.storefront {
            self.apply_storefront(patch);
        }
    }

    /// Write the mode-appropriate theme values as inline root style
    /// properties. Each value passes the same check the server-side
    /// validator applies, then the defensive sanitizer; an invalid or
    /// absent value leaves its property untouched.
    fn apply_theme_config(&self, root: &HtmlElement, cfg: &BTreeMap<String, Value>, is_dark: bool) {
        let style = root.style();

        for role in ColorRole::ALL {
            let value = if is_dark {
                get_str(cfg, &role.as_dark_flat_key())
            } else {
                get_str(cfg, role.as_flat_str())
            };
            let Some(value) = value else { continue };
            if !is_valid_color(value) {
                continue;
            }
            let safe = sanitize_css(value);
            for var in role.css_variables() {
                let _ = style.set_property(var, &safe);
            }
        }

        if let Some(radius) = get_str(cfg, flat_key::RADIUS) {
            if is_valid_radius(radius) {
                let safe = sanitize_css(radius);
                for var in RADIUS_VARIABLES {
                    let _ = style.set_property(var, &safe);
                }
            }
        }

        if let Some(size) = get_str(cfg, flat_key::FONT_SIZE).and_then(FontSize::parse) {
            let _ = style.set_property("--base-font-size", size.px());
        }
        if let Some(weight) = get_str(cfg, flat_key::FONT_WEIGHT).and_then(FontWeight::parse) {
            let _ = style.set_property("--font-weight-body", weight.css_weight());
        }

        let fonts = [
            (
                flat_key::FONT_PRIMARY_URL,
                FONT_PRIMARY_LINK_ID,
                ["--font-gabarito", "--font-primary"],
            ),
            (
                flat_key::FONT_SECONDARY_URL,
                FONT_SECONDARY_LINK_ID,
                ["--font-inter", "--font-secondary"],
            ),
        ];
        for (key, link_id, family_vars) in fonts {
            let Some(url) = get_str(cfg, key) else { continue };
            if !is_valid_font_url(url) {
                continue;
            }
            self.load_font(link_id, url);
            if let Some(family) = font_family_from_url(url) {
                for var in family_vars {
                    let _ = style.set_property(var, &family);
                }
            }
        }
    }

    /// Create or retarget the stylesheet `<link>` for a custom font.
    ///
    /// Links are keyed by fixed element ids, so re-applying the same URL
    /// is a no-op and a changed URL swaps the stylesheet in place.
    fn load_font(&self, id: &str, url: &str) {
        if let Some(existing) = self.document.get_element_by_id(id) {
            if let Ok(link) = existing.dyn_into::<HtmlLinkElement>() {
                if link.href() != url {
                    link.set_href(url);
                }
            }
            return;
        }

        let Ok(link) = self
            .document
            .create_element("link")
            .map(|el| el.unchecked_into::<HtmlLinkElement>())
        else {
            return;
        };
        link.set_id(id);
        link.set_rel("stylesheet");
        link.set_href(url);
        if let Some(head) = self.document.head() {
            let _ = head.append_child(&link);
        }
    }

    /// Apply the branding patch to the fixed storefront elements.
    ///
    /// The name is written as text content (no markup context); image
    /// sources get the attribute character check before assignment.
    fn apply_storefront(&self, patch: &StorefrontPatch) {
        if let Some(name) = &patch.name {
            if let Some(el) = self.document.get_element_by_id(STOREFRONT_NAME_ID) {
                el.set_text_content(Some(name));
            }
        }

        let images = [
            (&patch.logo, STOREFRONT_LOGO_ID),
            (&patch.banner, STOREFRONT_BANNER_ID),
        ];
        for (value, id) in images {
            let Some(src) = value else { continue };
            if !is_safe_attr(src) {
                continue;
            }
            if let Some(img) = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                img.set_src(src);
            }
        }
    }
}

/// Post the applied acknowledgement to the parent window, if embedded.
fn post_ack() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(parent)) = window.parent() else {
        return;
    };
    if js_sys::Object::is(parent.as_ref(), window.as_ref()) {
        return;
    }

    let ack = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &ack,
        &JsValue::from_str("type"),
        &JsValue::from_str(THEME_APPLIED_TYPE),
    );
    let _ = parent.post_message(&ack, "*");
}

/// Bind a [`ThemePreview`] to the window's `message` events.
///
/// The listener lives for the page lifetime; the editor detaches by
/// tearing down the iframe, which drops the whole realm.
///
/// # Errors
/// Fails when no window or document is available.
#[wasm_bindgen(js_name = "attachThemePreview")]
pub fn attach_theme_preview() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let preview = ThemePreview::new()?;

    let closure = Closure::<dyn Fn(MessageEvent)>::new(move |event: MessageEvent| {
        preview.handle_message(&event);
    });
    window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

//! # dodo-theme
//!
//! Merchant theme validation, sanitization, and CSS synthesis for
//! storefront rendering.
//!
//! A storefront's `theme_config` lets a merchant recolor and reshape the
//! customer-facing page. The config is *untrusted*: it is stored data
//! that could have been tampered with, or a live-preview message from an
//! arbitrary parent window, yet its values end up inside CSS text and
//! HTML attributes the browser executes. This crate is the pipeline
//! between the two:
//!
//! ```text
//! raw config ──► validate ──► flatten ──► synthesize ──► CSS text (SSR)
//!                                   └────► live DOM writes (dodo-theme-wasm)
//! ```
//!
//! Both consumption paths share the same validated representation, so
//! preview and production rendering cannot diverge in what is allowed
//! through.
//!
//! ## Quick start
//!
//! ```rust
//! use dodo_theme::{render_head, ThemeConfig};
//!
//! let config = ThemeConfig::from_json(
//!     r##"{
//!         "light": { "bg_primary": "#ffffff", "text_primary": "#111111" },
//!         "dark":  { "bg_primary": "#0a0a0a" },
//!         "radius": "8px"
//!     }"##,
//! )?;
//!
//! let head = render_head(&config);
//! assert!(head.contains("--bg-primary: #ffffff"));
//! # Ok::<(), dodo_theme::ThemeDecodeError>(())
//! ```
//!
//! ## Failure policy
//!
//! Nothing in this crate is fatal. Fields that fail validation are
//! dropped one at a time with a `tracing` warning; input that is not an
//! object at all renders the default theme. The worst outcome of hostile
//! input is "default theme instead of custom theme", never a broken
//! page or attacker-controlled markup.

mod color;
mod config;
mod css;
mod mapping;
mod sanitize;
mod validate;

pub use color::is_valid_color;
pub use config::{FontSize, FontWeight, ThemeConfig, ThemeDecodeError, ThemeModeConfig};
pub use css::{
    extract_font_urls, font_family_from_url, font_vars_css, render_head, synthesize, FontUrls,
};
pub use mapping::{flat_key, flatten, ColorRole, FlatThemeConfig, RADIUS_VARIABLES};
pub use sanitize::{sanitize_css, STRIPPED_CHARS};
pub use validate::{
    is_valid_font_url, is_valid_pay_button_text, is_valid_radius, validate, validate_with_report,
    FieldRejection, ValidatedThemeConfig, ValidationReport, PAY_BUTTON_TEXT_MAX,
};

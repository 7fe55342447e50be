//! Semantic key tables and the flattening choke point.
//!
//! Two closed tables drive everything the synthesizers emit:
//!
//! - [`ColorRole`] renames the API's snake_case mode fields into flat
//!   camelCase keys ([`ColorRole::as_flat_str`], dark keys get a `dark_`
//!   prefix) and maps each role to its CSS custom properties
//!   ([`ColorRole::css_variables`]).
//! - [`flatten`] is the single path from a validated configuration to the
//!   flat representation both renderers consume. Only table keys can ever
//!   appear in its output, so no key outside the closed set reaches CSS
//!   generation even if a validator bug were to admit one.
//!
//! Both tables are exhaustive `match`es over the role enum: adding a CSS
//! variable is a type-checked table update, not a string edit.

use crate::sanitize::sanitize_css;
use crate::validate::ValidatedThemeConfig;
use std::collections::BTreeMap;

/// The sixteen color roles a storefront theme can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    BgPrimary,
    BgSecondary,
    BorderPrimary,
    BorderSecondary,
    ButtonPrimary,
    ButtonPrimaryHover,
    ButtonSecondary,
    ButtonSecondaryHover,
    ButtonTextPrimary,
    ButtonTextSecondary,
    InputFocusBorder,
    TextError,
    TextPlaceholder,
    TextPrimary,
    TextSecondary,
    TextSuccess,
}

impl ColorRole {
    /// Every role, in emission order.
    pub const ALL: [Self; 16] = [
        Self::BgPrimary,
        Self::BgSecondary,
        Self::BorderPrimary,
        Self::BorderSecondary,
        Self::ButtonPrimary,
        Self::ButtonPrimaryHover,
        Self::ButtonSecondary,
        Self::ButtonSecondaryHover,
        Self::ButtonTextPrimary,
        Self::ButtonTextSecondary,
        Self::InputFocusBorder,
        Self::TextError,
        Self::TextPlaceholder,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextSuccess,
    ];

    /// The snake_case field name used by the storefront API.
    #[must_use]
    pub const fn as_snake_str(self) -> &'static str {
        match self {
            Self::BgPrimary => "bg_primary",
            Self::BgSecondary => "bg_secondary",
            Self::BorderPrimary => "border_primary",
            Self::BorderSecondary => "border_secondary",
            Self::ButtonPrimary => "button_primary",
            Self::ButtonPrimaryHover => "button_primary_hover",
            Self::ButtonSecondary => "button_secondary",
            Self::ButtonSecondaryHover => "button_secondary_hover",
            Self::ButtonTextPrimary => "button_text_primary",
            Self::ButtonTextSecondary => "button_text_secondary",
            Self::InputFocusBorder => "input_focus_border",
            Self::TextError => "text_error",
            Self::TextPlaceholder => "text_placeholder",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::TextSuccess => "text_success",
        }
    }

    /// The flat camelCase key (light mode; dark keys add a `dark_` prefix).
    #[must_use]
    pub const fn as_flat_str(self) -> &'static str {
        match self {
            Self::BgPrimary => "bgPrimary",
            Self::BgSecondary => "bgSecondary",
            Self::BorderPrimary => "borderPrimary",
            Self::BorderSecondary => "borderSecondary",
            Self::ButtonPrimary => "buttonPrimary",
            Self::ButtonPrimaryHover => "buttonPrimaryHover",
            Self::ButtonSecondary => "buttonSecondary",
            Self::ButtonSecondaryHover => "buttonSecondaryHover",
            Self::ButtonTextPrimary => "buttonTextPrimary",
            Self::ButtonTextSecondary => "buttonTextSecondary",
            Self::InputFocusBorder => "inputFocusBorder",
            Self::TextError => "textError",
            Self::TextPlaceholder => "textPlaceholder",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextSuccess => "textSuccess",
        }
    }

    /// The CSS custom properties this role writes. Some roles fan out to
    /// more than one variable (an error text color also colors error
    /// borders, button text colors also cover their hover states).
    #[must_use]
    pub const fn css_variables(self) -> &'static [&'static str] {
        match self {
            Self::BgPrimary => &["--bg-primary"],
            Self::BgSecondary => &["--bg-secondary"],
            Self::BorderPrimary => &["--border-primary"],
            Self::BorderSecondary => &["--border-secondary"],
            Self::ButtonPrimary => &["--button-primary-bg"],
            Self::ButtonPrimaryHover => &["--button-primary-bg-hover"],
            Self::ButtonSecondary => &["--button-secondary-bg"],
            Self::ButtonSecondaryHover => &["--button-secondary-bg-hover"],
            Self::ButtonTextPrimary => {
                &["--button-primary-text", "--button-primary-fg-hover"]
            }
            Self::ButtonTextSecondary => {
                &["--button-secondary-text", "--button-secondary-text-hover"]
            }
            Self::InputFocusBorder => &["--border-brand"],
            Self::TextError => &["--text-error-primary", "--border-error"],
            Self::TextPlaceholder => &["--text-placeholder"],
            Self::TextPrimary => &["--text-primary"],
            Self::TextSecondary => &["--text-secondary"],
            Self::TextSuccess => &["--text-success-primary"],
        }
    }

    /// The dark-mode flat key, e.g. `dark_bgPrimary`.
    #[must_use]
    pub fn as_dark_flat_key(self) -> String {
        format!("dark_{}", self.as_flat_str())
    }
}

/// CSS custom properties written from the validated radius value.
pub const RADIUS_VARIABLES: &[&str] = &["--radius"];

/// Flat keys for the scalar (non-color) fields.
pub mod flat_key {
    pub const FONT_SIZE: &str = "fontSize";
    pub const FONT_WEIGHT: &str = "fontWeight";
    pub const RADIUS: &str = "radius";
    pub const FONT_PRIMARY_URL: &str = "fontPrimaryUrl";
    pub const FONT_SECONDARY_URL: &str = "fontSecondaryUrl";
}

/// The flattened, validated configuration: flat camelCase key → value.
///
/// Every value has passed its field validator; CSS-bound values have
/// additionally been through the sanitizer (the hard-validated font URLs
/// are stored verbatim, since stripping could turn one valid URL into a
/// different one). Nothing downstream re-validates, though CSS emission
/// re-sanitizes what it interpolates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatThemeConfig {
    entries: BTreeMap<String, String>,
}

impl FlatThemeConfig {
    /// Look up a flat key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// True when no field survived flattening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of flat entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: impl Into<String>, value: &str) {
        self.entries.insert(key.into(), sanitize_css(value));
    }

    /// Insert without sanitizing. Only for hard-validated values whose
    /// character set the validator already pins down (the font URLs,
    /// which legitimately contain `;` in their weight lists and are
    /// never interpolated into CSS text).
    fn insert_raw(&mut self, key: impl Into<String>, value: &str) {
        self.entries.insert(key.into(), value.to_string());
    }
}

/// Flatten a validated configuration into the representation both
/// synthesis paths consume.
///
/// Light-mode roles keep their camelCase key (`bgPrimary`); dark-mode
/// roles get the `dark_` prefix (`dark_bgPrimary`). Scalar fields use the
/// [`flat_key`] constants. `pay_button_text` is deliberately absent: the
/// flat map feeds CSS emission only, and the button label is consumed by
/// the checkout UI instead.
#[must_use]
pub fn flatten(validated: &ValidatedThemeConfig) -> FlatThemeConfig {
    let mut flat = FlatThemeConfig::default();

    if let Some(light) = &validated.light {
        for (role, value) in light {
            flat.insert(role.as_flat_str(), value);
        }
    }
    if let Some(dark) = &validated.dark {
        for (role, value) in dark {
            flat.insert(role.as_dark_flat_key(), value);
        }
    }

    if let Some(size) = validated.font_size {
        flat.insert(flat_key::FONT_SIZE, size.as_str());
    }
    if let Some(weight) = validated.font_weight {
        flat.insert(flat_key::FONT_WEIGHT, weight.as_str());
    }
    if let Some(radius) = &validated.radius {
        flat.insert(flat_key::RADIUS, radius);
    }
    if let Some(url) = &validated.font_primary_url {
        flat.insert_raw(flat_key::FONT_PRIMARY_URL, url);
    }
    if let Some(url) = &validated.font_secondary_url {
        flat.insert_raw(flat_key::FONT_SECONDARY_URL, url);
    }

    flat
}

//! Theme configuration wire types.
//!
//! [`ThemeConfig`] mirrors the `theme_config` object returned by
//! `GET /storefront/{slug}`. It is the *untrusted* shape: every field is
//! optional, scalar fields stay raw strings, and nothing here is safe to
//! interpolate into CSS until it has passed [`validate`](crate::validate).
//!
//! `font_size` / `font_weight` deliberately deserialize as plain strings
//! rather than as the [`FontSize`] / [`FontWeight`] enums: a hard serde
//! enum would reject the whole object on one unknown value, and the
//! validation policy is field-by-field drop, never whole-object failure.

use crate::mapping::ColorRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-mode color overrides, keyed by the storefront API's snake_case
/// field names. One instance each for `light` and `dark`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeModeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_primary_hover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_secondary_hover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_focus_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_success: Option<String>,
}

impl ThemeModeConfig {
    /// Look up the raw value for a color role.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        let field = match role {
            ColorRole::BgPrimary => &self.bg_primary,
            ColorRole::BgSecondary => &self.bg_secondary,
            ColorRole::BorderPrimary => &self.border_primary,
            ColorRole::BorderSecondary => &self.border_secondary,
            ColorRole::ButtonPrimary => &self.button_primary,
            ColorRole::ButtonPrimaryHover => &self.button_primary_hover,
            ColorRole::ButtonSecondary => &self.button_secondary,
            ColorRole::ButtonSecondaryHover => &self.button_secondary_hover,
            ColorRole::ButtonTextPrimary => &self.button_text_primary,
            ColorRole::ButtonTextSecondary => &self.button_text_secondary,
            ColorRole::InputFocusBorder => &self.input_focus_border,
            ColorRole::TextError => &self.text_error,
            ColorRole::TextPlaceholder => &self.text_placeholder,
            ColorRole::TextPrimary => &self.text_primary,
            ColorRole::TextSecondary => &self.text_secondary,
            ColorRole::TextSuccess => &self.text_success,
        };
        field.as_deref()
    }
}

/// Base font size presets merchants can pick from.
///
/// The emitted pixel value always comes from [`FontSize::px`], never from
/// client input, so the CSS length literal is always one of six known
/// strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl FontSize {
    /// Parse a raw preset name; `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xxl),
            _ => None,
        }
    }

    /// The wire name of this preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// The pixel value written to `--base-font-size`.
    #[must_use]
    pub const fn px(self) -> &'static str {
        match self {
            Self::Xs => "12px",
            Self::Sm => "13px",
            Self::Md => "14px",
            Self::Lg => "16px",
            Self::Xl => "18px",
            Self::Xxl => "20px",
        }
    }
}

/// Body font weight presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "extraBold")]
    ExtraBold,
}

impl FontWeight {
    /// Parse a raw preset name; `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "normal" => Some(Self::Normal),
            "medium" => Some(Self::Medium),
            "bold" => Some(Self::Bold),
            "extraBold" => Some(Self::ExtraBold),
            _ => None,
        }
    }

    /// The wire name of this preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Bold => "bold",
            Self::ExtraBold => "extraBold",
        }
    }

    /// The numeric value written to `--font-weight-body`.
    #[must_use]
    pub const fn css_weight(self) -> &'static str {
        match self {
            Self::Normal => "400",
            Self::Medium => "500",
            Self::Bold => "700",
            Self::ExtraBold => "900",
        }
    }
}

/// The merchant theme configuration as stored and served.
///
/// Read once per render; validation always produces a new, smaller
/// structure ([`ValidatedThemeConfig`](crate::ValidatedThemeConfig))
/// rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeModeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeModeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_primary_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_secondary_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_button_text: Option<String>,
}

impl ThemeConfig {
    /// Decode a theme configuration from JSON text.
    ///
    /// This only checks JSON well-formedness and field types; field values
    /// remain unvalidated until [`validated`](Self::validated) runs.
    ///
    /// # Errors
    /// Returns `ThemeDecodeError` if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ThemeDecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the full validation pipeline over this configuration.
    ///
    /// Returns `None` when nothing at all survives, which renders the
    /// same as no customization being present.
    #[must_use]
    pub fn validated(&self) -> Option<crate::ValidatedThemeConfig> {
        let value = serde_json::to_value(self).ok()?;
        crate::validate(&value)
    }
}

/// Error decoding a stored theme configuration.
#[derive(Error, Debug)]
pub enum ThemeDecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Config validation: per-field keep/drop over untrusted input.
//!
//! The entry point is [`validate`] (or [`validate_with_report`] when the
//! caller wants the rejection list): it walks an arbitrary JSON value,
//! applies one validator per field, and drops invalid fields
//! *individually*. A single malformed field (say, a future schema field
//! set through the merchant dashboard) must never blank out an otherwise
//! valid theme, so nothing here fails the whole object. The only
//! whole-object outcome is `None`, meaning "nothing usable survived",
//! which renders identically to "no customization present".
//!
//! Each drop emits one `tracing` warning naming the field and the
//! rejected value, never the surrounding object, which may hold valid
//! values worth keeping out of logs.

use crate::color::is_valid_color;
use crate::config::{FontSize, FontWeight};
use crate::mapping::ColorRole;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;
use url::Url;

/// Maximum accepted length for the pay button label.
pub const PAY_BUTTON_TEXT_MAX: usize = 100;

/// Accepts `0` or `<number>(px|rem|em|%)`. Bare non-zero numbers and any
/// other suffix are rejected.
#[must_use]
pub fn is_valid_radius(raw: &str) -> bool {
    if raw == "0" {
        return true;
    }
    ["px", "rem", "em", "%"]
        .iter()
        .any(|unit| raw.strip_suffix(unit).is_some_and(is_unsigned_number))
}

fn is_unsigned_number(s: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        None => all_digits(s),
        Some((int, frac)) => all_digits(int) && all_digits(frac),
    }
}

/// Accepts only well-formed HTTPS URLs free of attribute-breaking
/// characters.
///
/// Both checks are mandatory: URL well-formedness alone does not defend
/// the attribute context the URL is placed into, and the character check
/// alone does not block protocol tricks (`javascript:` fails the scheme
/// check).
#[must_use]
pub fn is_valid_font_url(raw: &str) -> bool {
    if raw
        .chars()
        .any(|c| matches!(c, '<' | '>' | '"' | '\'' | '{' | '}'))
    {
        return false;
    }
    Url::parse(raw).is_ok_and(|url| url.scheme() == "https")
}

/// Accepts the pay button label: at most [`PAY_BUTTON_TEXT_MAX`] characters
/// and none of `< > { }`. No partial form is safe for free text, so this
/// is a hard accept/reject rather than a sanitizing transform.
#[must_use]
pub fn is_valid_pay_button_text(raw: &str) -> bool {
    raw.chars().count() <= PAY_BUTTON_TEXT_MAX
        && !raw.chars().any(|c| matches!(c, '<' | '>' | '{' | '}'))
}

/// A field dropped during validation, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    /// Dotted field path, e.g. `dark.text_primary`.
    pub field: String,
    /// The rejected raw value (JSON-rendered when it was not a string).
    pub value: String,
}

/// Everything dropped while validating one configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub rejections: Vec<FieldRejection>,
}

impl ValidationReport {
    /// True when no field was dropped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    fn reject(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        warn!(
            theme.field = %field,
            theme.value = %value,
            "invalid theme config value dropped"
        );
        self.rejections.push(FieldRejection { field, value });
    }
}

/// A theme configuration that passed validation.
///
/// Invariant: every value in here has passed its field-specific validator;
/// mode maps are only present when at least one of their colors survived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedThemeConfig {
    pub light: Option<BTreeMap<ColorRole, String>>,
    pub dark: Option<BTreeMap<ColorRole, String>>,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub radius: Option<String>,
    pub font_primary_url: Option<String>,
    pub font_secondary_url: Option<String>,
    pub pay_button_text: Option<String>,
}

impl ValidatedThemeConfig {
    fn is_empty(&self) -> bool {
        self.light.is_none()
            && self.dark.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.radius.is_none()
            && self.font_primary_url.is_none()
            && self.font_secondary_url.is_none()
            && self.pay_button_text.is_none()
    }
}

/// Validate an untrusted value, discarding the rejection report.
#[must_use]
pub fn validate(raw: &Value) -> Option<ValidatedThemeConfig> {
    validate_with_report(raw).0
}

/// Validate an untrusted value.
///
/// Non-object input yields `(None, empty report)`: absence of theming,
/// not an error. Otherwise fields are validated independently; the result
/// is `None` only when nothing at all was retained.
#[must_use]
pub fn validate_with_report(raw: &Value) -> (Option<ValidatedThemeConfig>, ValidationReport) {
    let mut report = ValidationReport::default();
    let Some(obj) = raw.as_object() else {
        return (None, report);
    };

    let validated = ValidatedThemeConfig {
        light: validate_mode(obj.get("light"), "light", &mut report),
        dark: validate_mode(obj.get("dark"), "dark", &mut report),
        font_size: scalar_str(obj, "font_size", &mut report)
            .and_then(|s| parse_or_reject(s, "font_size", FontSize::parse, &mut report)),
        font_weight: scalar_str(obj, "font_weight", &mut report)
            .and_then(|s| parse_or_reject(s, "font_weight", FontWeight::parse, &mut report)),
        radius: scalar_str(obj, "radius", &mut report)
            .and_then(|s| accept_or_reject(s, "radius", is_valid_radius, &mut report)),
        font_primary_url: scalar_str(obj, "font_primary_url", &mut report).and_then(|s| {
            accept_or_reject(s, "font_primary_url", is_valid_font_url, &mut report)
        }),
        font_secondary_url: scalar_str(obj, "font_secondary_url", &mut report).and_then(|s| {
            accept_or_reject(s, "font_secondary_url", is_valid_font_url, &mut report)
        }),
        pay_button_text: scalar_str(obj, "pay_button_text", &mut report).and_then(|s| {
            accept_or_reject(s, "pay_button_text", is_valid_pay_button_text, &mut report)
        }),
    };

    if validated.is_empty() {
        (None, report)
    } else {
        (Some(validated), report)
    }
}

/// Validate one mode object. A mode survives only if at least one color
/// validated; a mode that is missing or not an object is treated as
/// absent without a diagnostic, matching the top-level structural policy.
fn validate_mode(
    value: Option<&Value>,
    mode: &str,
    report: &mut ValidationReport,
) -> Option<BTreeMap<ColorRole, String>> {
    let obj = value?.as_object()?;
    let mut clean = BTreeMap::new();

    for role in ColorRole::ALL {
        match obj.get(role.as_snake_str()) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                if is_valid_color(s) {
                    clean.insert(role, s.clone());
                } else {
                    report.reject(format!("{mode}.{}", role.as_snake_str()), s.as_str());
                }
            }
            Some(other) => {
                report.reject(format!("{mode}.{}", role.as_snake_str()), other.to_string());
            }
        }
    }

    (!clean.is_empty()).then_some(clean)
}

/// Fetch a top-level scalar as a string. Present non-string, non-null
/// values are rejected with a diagnostic.
fn scalar_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    report: &mut ValidationReport,
) -> Option<&'a str> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            report.reject(field, other.to_string());
            None
        }
    }
}

fn parse_or_reject<T>(
    raw: &str,
    field: &str,
    parse: impl Fn(&str) -> Option<T>,
    report: &mut ValidationReport,
) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        report.reject(field, raw);
    }
    parsed
}

fn accept_or_reject(
    raw: &str,
    field: &str,
    accept: impl Fn(&str) -> bool,
    report: &mut ValidationReport,
) -> Option<String> {
    if accept(raw) {
        Some(raw.to_string())
    } else {
        report.reject(field, raw);
        None
    }
}

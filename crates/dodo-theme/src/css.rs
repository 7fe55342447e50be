//! CSS synthesis for server rendering.
//!
//! [`synthesize`] turns a flattened configuration into the CSS text blob
//! injected at server-render time, structured as three declaration
//! blocks:
//!
//! ```text
//! :root { shared vars }  :root:not(.dark) { light colors }  .dark { dark colors }
//! ```
//!
//! Later blocks override the stylesheet's defaults through normal cascade
//! order, which is why mode blocks follow `:root`. Empty blocks are
//! omitted entirely.
//!
//! Every value is re-sanitized at emission even though it already passed
//! validation: the validator and the synthesizer are maintained
//! separately and must each be safe alone.

use crate::config::{FontSize, FontWeight, ThemeConfig};
use crate::mapping::{flat_key, ColorRole, FlatThemeConfig, RADIUS_VARIABLES};
use crate::sanitize::sanitize_css;
use crate::validate::is_valid_font_url;
use tracing::{debug, warn};
use url::Url;

/// Which mode block a color declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Light,
    Dark,
}

/// Generate the complete CSS text for SSR injection.
///
/// Returns an empty string when the flat config carries nothing, which
/// callers treat as "emit no style element".
#[must_use]
pub fn synthesize(flat: &FlatThemeConfig) -> String {
    if flat.is_empty() {
        return String::new();
    }
    debug!(theme.fields = flat.len(), "synthesizing session theme CSS");

    let mut blocks: Vec<String> = Vec::with_capacity(3);

    let shared = shared_declarations(flat);
    if !shared.is_empty() {
        blocks.push(format!(":root {{ {shared} }}"));
    }

    let light = mode_declarations(flat, Mode::Light);
    if !light.is_empty() {
        blocks.push(format!(":root:not(.dark) {{ {light} }}"));
    }

    let dark = mode_declarations(flat, Mode::Dark);
    if !dark.is_empty() {
        blocks.push(format!(".dark {{ {dark} }}"));
    }

    blocks.join(" ")
}

/// Mode-agnostic variables: base font size, body weight, radius.
///
/// Font size and weight always emit, falling back to the `md`/`medium`
/// defaults; their values come from the closed enum tables, never from
/// the raw client string.
fn shared_declarations(flat: &FlatThemeConfig) -> String {
    let mut vars: Vec<String> = Vec::new();

    let size = flat
        .get(flat_key::FONT_SIZE)
        .and_then(FontSize::parse)
        .unwrap_or_default();
    vars.push(format!("--base-font-size: {}", size.px()));

    let weight = flat
        .get(flat_key::FONT_WEIGHT)
        .and_then(FontWeight::parse)
        .unwrap_or_default();
    vars.push(format!("--font-weight-body: {}", weight.css_weight()));

    if let Some(radius) = flat.get(flat_key::RADIUS) {
        let safe = sanitize_css(radius);
        for var in RADIUS_VARIABLES {
            vars.push(format!("{var}: {safe}"));
        }
    }

    vars.join("; ")
}

/// Color variables for one mode block.
fn mode_declarations(flat: &FlatThemeConfig, mode: Mode) -> String {
    let mut vars: Vec<String> = Vec::new();

    for role in ColorRole::ALL {
        let value = match mode {
            Mode::Light => flat.get(role.as_flat_str()),
            Mode::Dark => flat.get(&role.as_dark_flat_key()),
        };
        let Some(value) = value else { continue };

        let safe = sanitize_css(value);
        for var in role.css_variables() {
            vars.push(format!("{var}: {safe}"));
        }
    }

    vars.join("; ")
}

/// Validated custom-font stylesheet URLs extracted from a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontUrls {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Extract and validate the two font URLs from a raw configuration.
///
/// Invalid URLs are dropped with a diagnostic, independently of each
/// other and of the rest of the config.
#[must_use]
pub fn extract_font_urls(config: &ThemeConfig) -> FontUrls {
    FontUrls {
        primary: checked_font_url(config.font_primary_url.as_deref(), "font_primary_url"),
        secondary: checked_font_url(config.font_secondary_url.as_deref(), "font_secondary_url"),
    }
}

fn checked_font_url(raw: Option<&str>, field: &str) -> Option<String> {
    let raw = raw?;
    if is_valid_font_url(raw) {
        Some(raw.to_string())
    } else {
        warn!(
            theme.field = %field,
            theme.value = %raw,
            "invalid theme config value dropped"
        );
        None
    }
}

/// Derive a CSS `font-family` value from a font stylesheet URL.
///
/// Reads the `family` query parameter the way font CDNs encode it
/// (`?family=Open+Sans:wght@400;700`), takes the name before any `:`
/// axis list, and re-sanitizes the result before it becomes CSS.
///
/// ```rust
/// use dodo_theme::font_family_from_url;
///
/// let family = font_family_from_url(
///     "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700",
/// );
/// assert_eq!(family.as_deref(), Some("'Open Sans', sans-serif"));
/// ```
#[must_use]
pub fn font_family_from_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let family = url
        .query_pairs()
        .find(|(key, _)| key == "family")
        .map(|(_, value)| value.into_owned())?;

    let name = family.split(':').next().unwrap_or_default().replace('+', " ");
    let safe = sanitize_css(name.trim());
    if safe.is_empty() {
        return None;
    }
    Some(format!("'{safe}', sans-serif"))
}

/// Build the `:root` block overriding the app font variables.
///
/// The primary URL replaces the display face (`--font-gabarito`), the
/// secondary the body face (`--font-inter`); both also write the generic
/// `--font-primary` / `--font-secondary` variables.
#[must_use]
pub fn font_vars_css(fonts: &FontUrls) -> String {
    let mut vars: Vec<String> = Vec::new();

    if let Some(family) = fonts.primary.as_deref().and_then(font_family_from_url) {
        vars.push(format!("--font-gabarito: {family}"));
        vars.push(format!("--font-primary: {family}"));
    }
    if let Some(family) = fonts.secondary.as_deref().and_then(font_family_from_url) {
        vars.push(format!("--font-inter: {family}"));
        vars.push(format!("--font-secondary: {family}"));
    }

    if vars.is_empty() {
        String::new()
    } else {
        format!(":root {{ {} }}", vars.join("; "))
    }
}

/// Render the SSR head fragment for a storefront's theme.
///
/// Emits, in order: `<link rel="preload">` for each custom font (so the
/// fetch starts before the stylesheet link is parsed), the stylesheet
/// links themselves, and one inline `<style>` carrying the font variable
/// overrides plus the synthesized theme CSS. Everything renders before
/// themed content, so there is no flash of unstyled content.
///
/// Returns an empty string when validation retains nothing: the page then
/// renders with its default stylesheet only.
#[must_use]
pub fn render_head(config: &ThemeConfig) -> String {
    let Some(validated) = config.validated() else {
        return String::new();
    };

    let fonts = extract_font_urls(config);
    let flat = crate::mapping::flatten(&validated);

    let theme_css = synthesize(&flat);
    let font_css = font_vars_css(&fonts);
    let inline: Vec<&str> = [font_css.as_str(), theme_css.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    let mut head = String::new();
    for url in [&fonts.primary, &fonts.secondary].into_iter().flatten() {
        head.push_str(&format!("<link rel=\"preload\" href=\"{url}\" as=\"style\">\n"));
    }
    for url in [&fonts.primary, &fonts.secondary].into_iter().flatten() {
        head.push_str(&format!("<link rel=\"stylesheet\" href=\"{url}\">\n"));
    }
    if !inline.is_empty() {
        head.push_str(&format!("<style>{}</style>\n", inline.join(" ")));
    }

    head
}

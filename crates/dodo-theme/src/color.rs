//! CSS color acceptance.
//!
//! The storefront API lets merchants submit any CSS color value for the
//! sixteen color roles. [`is_valid_color`] accepts the forms the stylesheet
//! can actually use (named colors, hex notations, and the functional
//! notations) and rejects everything else, including custom-property
//! references (`var(--x)`), which would let one role read outside the
//! closed variable set.
//!
//! The check is a grammar check, not a full parse: component ranges are
//! not enforced (`rgb(999, 0, 0)` passes, exactly as it does in a real
//! stylesheet, where out-of-range components clamp rather than error).

/// Functional notations accepted by [`is_valid_color`].
///
/// `oklch`/`oklab` are listed explicitly: the original grammar the API
/// documented did not cover them, so they ride on the same
/// argument-character check as the rest.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch",
];

/// The CSS named colors, plus `transparent` and `currentcolor`.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure",
    "beige", "bisque", "black", "blanchedalmond", "blue", "blueviolet",
    "brown", "burlywood", "cadetblue", "chartreuse", "chocolate", "coral",
    "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen",
    "darkgrey", "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange",
    "darkorchid", "darkred", "darksalmon", "darkseagreen", "darkslateblue",
    "darkslategray", "darkslategrey", "darkturquoise", "darkviolet",
    "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue",
    "firebrick", "floralwhite", "forestgreen", "fuchsia",
    "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green",
    "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen",
    "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue",
    "lightslategray", "lightslategrey", "lightsteelblue", "lightyellow",
    "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin",
    "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise",
    "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "rebeccapurple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray",
    "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "transparent", "turquoise", "violet", "wheat",
    "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Returns true if `raw` is a syntactically acceptable CSS color value.
///
/// Accepted forms:
/// - named colors (`red`, `rebeccapurple`, `transparent`, `currentcolor`)
/// - hex notation with 3, 4, 6, or 8 digits (`#f00`, `#ff000080`)
/// - functional notation for `rgb`/`rgba`/`hsl`/`hsla`/`hwb`/`lab`/`lch`/
///   `oklab`/`oklch`, with arguments limited to numbers, separators, and
///   unit keywords
///
/// Everything else is rejected, notably `var(...)` references, `url(...)`,
/// `calc(...)`, and any value carrying context-breaking characters.
#[must_use]
pub fn is_valid_color(raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return false;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8)
            && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = value.to_ascii_lowercase();

    if let Some(open) = lower.find('(') {
        let name = lower[..open].trim_end();
        let Some(args) = lower[open + 1..].strip_suffix(')') else {
            return false;
        };
        return COLOR_FUNCTIONS.contains(&name) && is_valid_function_args(args);
    }

    NAMED_COLORS.contains(&lower.as_str())
}

/// Argument check for functional color notation.
///
/// Allows numeric components, the `% / , . + -` separators, whitespace,
/// the degree sign, and lowercase keywords (`deg`, `turn`, `none`). The
/// set excludes parentheses and quotes, so nested functions and string
/// payloads never pass.
fn is_valid_function_args(args: &str) -> bool {
    !args.trim().is_empty()
        && args.chars().all(|c| {
            c.is_ascii_digit()
                || c.is_ascii_lowercase()
                || c.is_ascii_whitespace()
                || matches!(c, '.' | ',' | '%' | '/' | '+' | '-' | '°')
        })
}

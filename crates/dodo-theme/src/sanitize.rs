//! Defensive sanitization for values interpolated into CSS text.
//!
//! Merchant theme values end up inside a `<style>` element and inside
//! inline style properties. [`sanitize_css`] strips the characters that
//! would let a value terminate a CSS declaration, close the surrounding
//! `<style>` tag, or escape an HTML attribute. Stripping is used instead
//! of escaping because CSS custom-property values have no escape syntax
//! that survives this context: a stripped value stays syntactically valid
//! CSS even when semantically altered.

/// Characters removed by [`sanitize_css`].
///
/// `<` `>` close or open markup, `"` `'` `` ` `` break attribute quoting,
/// `;` `{` `}` terminate CSS declarations and blocks, `\` starts CSS
/// escape sequences.
pub const STRIPPED_CHARS: &[char] = &['<', '>', '"', '\'', '`', ';', '{', '}', '\\'];

/// Strip every context-breaking character from `value`.
///
/// Total function: never fails, and is idempotent:
/// `sanitize_css(sanitize_css(x)) == sanitize_css(x)` for all inputs.
///
/// # Example
///
/// ```rust
/// use dodo_theme::sanitize_css;
///
/// assert_eq!(sanitize_css("#ff0000"), "#ff0000");
/// assert_eq!(sanitize_css("red; } </style>"), "red  /style");
/// ```
#[must_use]
pub fn sanitize_css(value: &str) -> String {
    value.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_clean_values_through() {
        assert_eq!(sanitize_css("#ff0000"), "#ff0000");
        assert_eq!(sanitize_css("rgb(255, 0, 0)"), "rgb(255, 0, 0)");
        assert_eq!(sanitize_css("0.5rem"), "0.5rem");
        assert_eq!(sanitize_css(""), "");
    }

    #[test]
    fn strips_every_listed_character() {
        for &c in STRIPPED_CHARS {
            let input = format!("a{c}b");
            assert_eq!(sanitize_css(&input), "ab", "failed to strip {c:?}");
        }
    }

    #[test]
    fn neutralizes_style_breakout() {
        let hostile = "red;}</style><script>alert(1)</script>";
        let safe = sanitize_css(hostile);
        for &c in STRIPPED_CHARS {
            assert!(!safe.contains(c));
        }
        assert_eq!(safe, "red/stylescriptalert(1)/script");
    }

    #[test]
    fn idempotent() {
        let inputs = ["plain", "a;b{c}d", "\\'\"`<>", "oklch(0.7 0.1 200)"];
        for input in inputs {
            let once = sanitize_css(input);
            assert_eq!(sanitize_css(&once), once);
        }
    }
}

#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

use dodo_theme::{
    is_valid_color, is_valid_radius, sanitize_css, validate, STRIPPED_CHARS,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// =============================================================================
// sanitize_css invariants
// =============================================================================

proptest! {
    #[test]
    fn sanitize_never_panics(s in "\\PC{0,200}") {
        let _ = sanitize_css(&s);
    }

    #[test]
    fn sanitize_output_contains_no_stripped_chars(s in "\\PC{0,200}") {
        let out = sanitize_css(&s);
        for &c in STRIPPED_CHARS {
            prop_assert!(!out.contains(c), "{c:?} survived in {out:?}");
        }
    }

    #[test]
    fn sanitize_is_idempotent(s in "\\PC{0,200}") {
        let once = sanitize_css(&s);
        prop_assert_eq!(sanitize_css(&once), once);
    }

    #[test]
    fn sanitize_preserves_clean_input(s in "[a-zA-Z0-9#(),./% -]{0,100}") {
        prop_assert_eq!(sanitize_css(&s), s);
    }
}

// =============================================================================
// validator totality and consistency
// =============================================================================

proptest! {
    #[test]
    fn color_check_never_panics(s in "\\PC{0,100}") {
        let _ = is_valid_color(&s);
    }

    // A value the color validator accepts is already free of
    // context-breaking characters, so the emission-time sanitizer is a
    // no-op on it. Both layers must hold independently; this pins the
    // overlap.
    #[test]
    fn accepted_colors_are_sanitize_fixpoints(s in "\\PC{0,100}") {
        if is_valid_color(&s) {
            prop_assert_eq!(sanitize_css(&s), s);
        }
    }

    #[test]
    fn accepted_radii_are_sanitize_fixpoints(s in "\\PC{0,40}") {
        if is_valid_radius(&s) {
            prop_assert_eq!(sanitize_css(&s), s);
        }
    }

    #[test]
    fn well_formed_radii_accepted(n in 0u32..10_000, unit in prop::sample::select(vec!["px", "rem", "em", "%"])) {
        let radius = format!("{}{}", n, unit);
        prop_assert!(is_valid_radius(&radius));
    }

    #[test]
    fn bare_numbers_rejected_except_zero(n in 1u32..10_000) {
        prop_assert!(!is_valid_radius(&n.to_string()));
    }
}

// =============================================================================
// validate totality over arbitrary JSON
// =============================================================================

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "\\PC{0,30}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::from),
            prop::collection::btree_map("[a-z_]{0,20}", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn validate_never_panics(value in arb_json()) {
        let _ = validate(&value);
    }

    // Whatever survives validation is safe to interpolate: no retained
    // color value carries a context-breaking character.
    #[test]
    fn retained_values_are_clean(value in arb_json()) {
        if let Some(validated) = validate(&value) {
            let modes = [validated.light.as_ref(), validated.dark.as_ref()];
            for mode in modes.into_iter().flatten() {
                for color in mode.values() {
                    for &c in STRIPPED_CHARS {
                        prop_assert!(!color.contains(c));
                    }
                }
            }
        }
    }
}

// =============================================================================
// structural edge cases (non-random, kept with the properties they anchor)
// =============================================================================

#[test]
fn validate_handles_deep_nesting_without_recursing() {
    // Modes are looked up one level deep only; deeper nesting is inert.
    let raw = json!({ "light": { "bg_primary": { "bg_primary": "#fff" } } });
    assert_eq!(validate(&raw), None);
}

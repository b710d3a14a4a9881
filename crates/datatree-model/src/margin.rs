//! Indentation and button style tokens.
//!
//! Nesting depth maps onto a fixed progression of margin classes; depths past
//! the end of the table all reuse the terminal class, so arbitrarily deep
//! trees never grow new class names.

/// Indentation classes for nesting depth 0..N, shallowest first.
pub const MARGIN_CLASSES: [&str; 5] = [
    "slds-m-left--large",
    "slds-m-left--xx-large",
    "margin-nested",
    "margin-nested-5th",
    "margin-nested-nth",
];

/// Terminal class reused for every level deeper than the table covers.
pub const DEEPEST_MARGIN_CLASS: &str = "margin-nested-nth";

/// Shared expand-button style.
pub const BUTTON_CLASS: &str =
    "slds-button slds-button_icon slds-button_icon-x-small slds-m-right_x-small";

/// Prefix hiding the expand button on nodes with nothing to expand.
pub const HIDDEN_BUTTON_PREFIX: &str = "hideBtn ";

/// The margin class one level deeper than `current`.
///
/// Unknown classes and the last table entry both resolve to
/// [`DEEPEST_MARGIN_CLASS`].
#[must_use]
pub fn next_margin_class(current: &str) -> &'static str {
    match MARGIN_CLASSES.iter().position(|class| *class == current) {
        Some(i) if i + 1 < MARGIN_CLASSES.len() => MARGIN_CLASSES[i + 1],
        _ => DEEPEST_MARGIN_CLASS,
    }
}

/// The margin class `depth` levels below `base`.
///
/// Depth 0 is `base` itself; each deeper level advances the progression once.
#[must_use]
pub fn margin_class_for_depth(base: &str, depth: usize) -> &str {
    let mut class = base;
    for _ in 0..depth {
        class = next_margin_class(class);
    }
    class
}

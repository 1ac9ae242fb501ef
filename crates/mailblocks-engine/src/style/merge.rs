//! Tailwind conflict resolution.
//!
//! Classes are walked from last to first. Each class claims its conflict
//! group (scoped by variants and `!`), plus any narrower groups it overrides,
//! and an earlier class whose group is already claimed is dropped. Classes
//! that belong to no known group only conflict with exact duplicates.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static COLOR_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:inherit|current|transparent|black|white|",
        r"(?:slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)",
        r"-(?:50|[1-9]00|950))(?:/\d{1,3})?$",
        r"|^\[(?:#[0-9a-fA-F]{3,8}|(?:rgba?|hsla?)\([^\]]*\))\]$",
    ))
    .expect("color pattern is valid")
});

static LENGTH_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\d+(?:\.\d+)?(?:px|rem|em|%)\]$").expect("length pattern is valid")
});

static BORDER_WIDTH_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0|2|4|8|\[\d+(?:\.\d+)?px\])$").expect("border width pattern is valid")
});

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const TEXT_TRANSFORM: &[&str] = &["uppercase", "lowercase", "capitalize", "normal-case"];
const TEXT_DECORATION: &[&str] = &["underline", "overline", "line-through", "no-underline"];
const FONT_STYLE: &[&str] = &["italic", "not-italic"];
const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Utilities whose group is simply their prefix, longest first so that
/// `rounded-tl-lg` is matched by `rounded-tl` before `rounded-t`.
const PREFIX_GROUPS: &[&str] = &[
    "pointer-events",
    "justify-items",
    "justify-self",
    "rounded-ss",
    "rounded-se",
    "rounded-es",
    "rounded-ee",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
    "overflow-x",
    "overflow-y",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-s",
    "rounded-e",
    "inset-x",
    "inset-y",
    "space-x",
    "space-y",
    "justify",
    "opacity",
    "overflow",
    "tracking",
    "leading",
    "rounded",
    "cursor",
    "bottom",
    "select",
    "gap-x",
    "gap-y",
    "inset",
    "items",
    "min-w",
    "max-w",
    "min-h",
    "max-h",
    "right",
    "self",
    "left",
    "size",
    "top",
    "gap",
    "px",
    "py",
    "ps",
    "pe",
    "pt",
    "pr",
    "pb",
    "pl",
    "mx",
    "my",
    "ms",
    "me",
    "mt",
    "mr",
    "mb",
    "ml",
    "p",
    "m",
    "w",
    "h",
    "z",
];

/// Groups that remove earlier classes from narrower groups
const OVERRIDES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl", "ps", "pe"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml", "ms", "me"]),
    ("my", &["mt", "mb"]),
    ("inset", &["inset-x", "inset-y", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("gap", &["gap-x", "gap-y"]),
    ("size", &["w", "h"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-s",
            "rounded-e",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
];

/// Split `md:hover:!p-2` into (sorted variant key, utility).
fn split_modifiers(class: &str) -> (String, &str) {
    let mut depth = 0usize;
    let mut last_colon = None;
    let mut variants = Vec::new();
    let mut start = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                variants.push(&class[start..i]);
                start = i + 1;
                last_colon = Some(i);
            }
            _ => {}
        }
    }
    let mut base = match last_colon {
        Some(i) => &class[i + 1..],
        None => class,
    };

    let important = if let Some(stripped) = base.strip_prefix('!') {
        base = stripped;
        true
    } else if let Some(stripped) = base.strip_suffix('!') {
        base = stripped;
        true
    } else {
        false
    };

    variants.sort_unstable();
    let mut key = variants.join(":");
    if important {
        key.push('!');
    }
    (key, base)
}

fn in_set(value: &str, set: &[&str]) -> bool {
    set.contains(&value)
}

/// `prefix` or `prefix-<value>`; returns the value (empty for the bare prefix)
fn strip_utility<'a>(utility: &'a str, prefix: &str) -> Option<&'a str> {
    if utility == prefix {
        return Some("");
    }
    utility.strip_prefix(prefix)?.strip_prefix('-')
}

/// `lg`, `[14px]`, optionally with a line-height suffix as in `lg/7` or `sm/[20px]`
fn is_font_size(value: &str) -> bool {
    let size = match value.split_once('/') {
        Some((size, line_height))
            if (!line_height.is_empty() && line_height.bytes().all(|b| b.is_ascii_digit()))
                || LENGTH_VALUE.is_match(line_height) =>
        {
            size
        }
        Some(_) => return false,
        None => value,
    };
    in_set(size, FONT_SIZES) || LENGTH_VALUE.is_match(size)
}

fn border_group(value: &str) -> Option<&'static str> {
    const SIDES: &[(&str, &str, &str)] = &[
        ("x", "border-w-x", "border-color-x"),
        ("y", "border-w-y", "border-color-y"),
        ("t", "border-w-t", "border-color-t"),
        ("r", "border-w-r", "border-color-r"),
        ("b", "border-w-b", "border-color-b"),
        ("l", "border-w-l", "border-color-l"),
    ];

    for &(side, width_group, color_group) in SIDES {
        if let Some(rest) = strip_utility(value, side) {
            if rest.is_empty() || BORDER_WIDTH_VALUE.is_match(rest) {
                return Some(width_group);
            }
            if COLOR_VALUE.is_match(rest) {
                return Some(color_group);
            }
            return None;
        }
    }

    if value.is_empty() || BORDER_WIDTH_VALUE.is_match(value) {
        Some("border-w")
    } else if in_set(value, BORDER_STYLES) {
        Some("border-style")
    } else if COLOR_VALUE.is_match(value) {
        Some("border-color")
    } else {
        None
    }
}

/// Conflict group of a utility with variants and `!` already removed
fn class_group(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    let exact: &[(&[&str], &'static str)] = &[
        (DISPLAY, "display"),
        (POSITION, "position"),
        (VISIBILITY, "visibility"),
        (TEXT_TRANSFORM, "text-transform"),
        (TEXT_DECORATION, "text-decoration"),
        (FONT_STYLE, "font-style"),
        (FLEX_DIRECTION, "flex-direction"),
    ];
    for &(set, group) in exact {
        if in_set(utility, set) {
            return Some(group);
        }
    }

    if let Some(value) = strip_utility(utility, "text") {
        return if is_font_size(value) {
            Some("font-size")
        } else if in_set(value, TEXT_ALIGNS) {
            Some("text-align")
        } else if COLOR_VALUE.is_match(value) {
            Some("text-color")
        } else {
            None
        };
    }
    if let Some(value) = strip_utility(utility, "font") {
        return if in_set(value, FONT_WEIGHTS) {
            Some("font-weight")
        } else if value.is_empty() {
            None
        } else {
            Some("font-family")
        };
    }
    if let Some(value) = strip_utility(utility, "bg") {
        return COLOR_VALUE.is_match(value).then_some("bg-color");
    }
    if let Some(value) = strip_utility(utility, "ring-offset") {
        return if COLOR_VALUE.is_match(value) {
            Some("ring-offset-color")
        } else {
            Some("ring-offset-w")
        };
    }
    if let Some(value) = strip_utility(utility, "ring") {
        return if value.is_empty() || BORDER_WIDTH_VALUE.is_match(value) || value == "1" {
            Some("ring-w")
        } else if COLOR_VALUE.is_match(value) {
            Some("ring-color")
        } else {
            None
        };
    }
    if let Some(value) = strip_utility(utility, "border") {
        return border_group(value);
    }
    if let Some(value) = strip_utility(utility, "shadow") {
        return (value.is_empty() || in_set(value, SHADOW_SIZES)).then_some("shadow");
    }

    PREFIX_GROUPS
        .iter()
        .find(|prefix| match strip_utility(utility, prefix) {
            // Bare `p` or `w` is not a utility; bare `rounded` is
            Some("") => prefix.starts_with("rounded"),
            Some(_) => true,
            None => false,
        })
        .copied()
}

fn overridden_by(group: &str) -> &'static [&'static str] {
    OVERRIDES
        .iter()
        .find(|(broad, _)| *broad == group)
        .map(|(_, narrow)| *narrow)
        .unwrap_or(&[])
}

/// Resolve conflicts between classes, keeping the order of the survivors.
pub fn merge_classes<'a>(classes: &[&'a str]) -> Vec<&'a str> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());

    for &class in classes.iter().rev() {
        let (modifiers, utility) = split_modifiers(class);
        let Some(group) = class_group(utility) else {
            if claimed.insert(format!("{modifiers}|={utility}")) {
                kept.push(class);
            }
            continue;
        };

        if !claimed.insert(format!("{modifiers}|{group}")) {
            continue;
        }
        for narrow in overridden_by(group) {
            claimed.insert(format!("{modifiers}|{narrow}"));
        }
        kept.push(class);
    }

    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn merge(input: &str) -> String {
        let classes: Vec<&str> = input.split_whitespace().collect();
        merge_classes(&classes).join(" ")
    }

    #[rstest]
    #[case("p-2 p-4", "p-4")]
    #[case("px-2 p-4", "p-4")]
    #[case("p-4 px-2", "p-4 px-2")]
    #[case("pt-1 py-2 pb-3", "py-2 pb-3")]
    #[case("m-2 -m-4", "-m-4")]
    #[case("bg-red-500 bg-[#fff]", "bg-[#fff]")]
    #[case("bg-blue-500/50 bg-transparent", "bg-transparent")]
    #[case("text-sm text-lg", "text-lg")]
    #[case("text-sm text-red-500", "text-sm text-red-500")]
    #[case("text-red-500 text-[#333] text-center", "text-[#333] text-center")]
    #[case("text-[14px] text-base", "text-base")]
    #[case("font-bold font-mono font-light", "font-mono font-light")]
    #[case("border border-2 border-red-500", "border-2 border-red-500")]
    #[case("border-t-4 border-2", "border-2")]
    #[case("border-2 border-t-4", "border-2 border-t-4")]
    #[case("border-solid border-dashed", "border-dashed")]
    #[case("rounded-t-lg rounded-md", "rounded-md")]
    #[case("rounded rounded-full", "rounded-full")]
    #[case("rounded-tl-lg rounded-t", "rounded-t")]
    #[case("rounded-md rounded-s-lg", "rounded-md rounded-s-lg")]
    #[case("rounded-s-lg rounded-md", "rounded-md")]
    #[case("rounded-ss-lg rounded-es-sm rounded-s", "rounded-s")]
    #[case("rounded-e rounded-se-lg rounded-ee-md", "rounded-e rounded-se-lg rounded-ee-md")]
    #[case("rounded-ss-lg rounded-e-md", "rounded-ss-lg rounded-e-md")]
    #[case("justify-items-center justify-center", "justify-items-center justify-center")]
    #[case(
        "justify-self-end justify-between justify-self-start",
        "justify-between justify-self-start"
    )]
    #[case("justify-start justify-center", "justify-center")]
    #[case("text-lg/7 text-sm", "text-sm")]
    #[case("text-sm text-base/[22px]", "text-base/[22px]")]
    #[case("text-lg/7 text-red-500/50", "text-lg/7 text-red-500/50")]
    #[case("ring ring-2 ring-blue-500 ring-red-500", "ring-2 ring-red-500")]
    #[case("ring-offset-2 ring-offset-white ring-offset-4", "ring-offset-white ring-offset-4")]
    #[case("block flex hidden", "hidden")]
    #[case("relative absolute", "absolute")]
    #[case("w-4 h-4 size-8", "size-8")]
    #[case("overflow-x-auto overflow-hidden", "overflow-hidden")]
    #[case("shadow shadow-lg", "shadow-lg")]
    fn test_conflicts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(merge(input), expected);
    }

    #[rstest]
    #[case("hover:p-2 p-4", "hover:p-2 p-4")]
    #[case("hover:p-2 hover:p-4", "hover:p-4")]
    #[case("md:hover:p-2 hover:md:p-4", "hover:md:p-4")]
    #[case("!p-2 p-4", "!p-2 p-4")]
    #[case("!p-2 !p-4", "!p-4")]
    #[case("p-2! !p-4", "!p-4")]
    #[case("[&>p]:m-2 [&>p]:m-4", "[&>p]:m-4")]
    fn test_variants_and_important_scope_conflicts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(merge(input), expected);
    }

    #[rstest]
    #[case("email-block email-block", "email-block")]
    #[case("a b a", "b a")]
    #[case("text-ellipsis text-wrap", "text-ellipsis text-wrap")]
    #[case("bg-cover bg-center", "bg-cover bg-center")]
    #[case("p w", "p w")]
    fn test_unknown_classes_only_drop_exact_duplicates(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(merge(input), expected);
    }
}

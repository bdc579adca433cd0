//! English inflection for resolved keys
//!
//! Keys derived from type keys, item keys and collection names are
//! pluralized before use, and collection names are underscored first.
//! The [`Inflector`] trait is the seam; [`EnglishInflector`] is the rule
//! set used unless another one is injected.

/// Pluralization and underscore capability
pub trait Inflector: Send + Sync {
    /// Plural form of `word`
    fn pluralize(&self, word: &str) -> String;

    /// Lower snake case form of `word` (`"BlogPost"` -> `"blog_post"`)
    fn underscore(&self, word: &str) -> String;
}

/// Words with identical singular and plural forms
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// (singular, plural) pairs that no suffix rule covers
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Default English rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let lower = word.to_ascii_lowercase();
        let last = last_word(&lower);
        if UNCOUNTABLE.contains(&last) {
            return word.to_string();
        }

        let plural = irregular(word, &lower).unwrap_or_else(|| apply_rules(word, &lower));
        if is_shouting(word) {
            plural.to_ascii_uppercase()
        } else {
            plural
        }
    }

    fn underscore(&self, word: &str) -> String {
        let chars: Vec<char> = word.replace("::", "/").chars().collect();
        let mut out = String::with_capacity(chars.len() + 4);

        for (i, &c) in chars.iter().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars
                    .get(i + 1)
                    .map(|n| n.is_ascii_lowercase())
                    .unwrap_or(false);
                let boundary = prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower);
                if boundary {
                    out.push('_');
                }
            }
            match c {
                '-' => out.push('_'),
                _ => out.push(c.to_ascii_lowercase()),
            }
        }

        out
    }
}

/// Last whitespace/path separated word of an already lowercased string
fn last_word(lower: &str) -> &str {
    lower
        .rsplit(|c: char| c.is_whitespace() || c == '/' || c == '-')
        .next()
        .unwrap_or(lower)
}

fn is_shouting(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
        && !word.chars().any(|c| c.is_ascii_lowercase())
}

/// Keep the first `keep` bytes of `word` and append `suffix`
fn splice(word: &str, keep: usize, suffix: &str) -> String {
    let mut out = String::with_capacity(keep + suffix.len());
    out.push_str(&word[..keep]);
    out.push_str(suffix);
    out
}

fn irregular(word: &str, lower: &str) -> Option<String> {
    for (singular, plural) in IRREGULAR {
        for (from, to) in [(singular, plural), (plural, plural)] {
            let whole = lower == *from;
            let segment = lower.ends_with(from)
                && lower[..lower.len() - from.len()].ends_with('_');
            if whole || segment {
                // Keep the caller's casing for the first letter of the word.
                let start = lower.len() - from.len();
                return Some(splice(word, start + 1, &to[1..]));
            }
        }
    }
    None
}

fn apply_rules(word: &str, lower: &str) -> String {
    let len = lower.len();
    let before = |suffix: &str| -> Option<char> {
        lower
            .strip_suffix(suffix)
            .and_then(|stem| stem.chars().next_back())
    };

    if lower.ends_with("quiz") {
        return splice(word, len, "zes");
    }
    if lower == "oxen" {
        return word.to_string();
    }
    if lower == "ox" {
        return splice(word, len, "en");
    }
    if lower == "mice" || lower == "lice" {
        return word.to_string();
    }
    if lower == "mouse" || lower == "louse" {
        return splice(word, 1, "ice");
    }
    for stem in ["matr", "vert", "ind"] {
        for tail in ["ix", "ex"] {
            if lower.ends_with(&format!("{stem}{tail}")) {
                return splice(word, len - 2, "ices");
            }
        }
    }
    if ["x", "ch", "ss", "sh"].iter().any(|s| lower.ends_with(s)) {
        return splice(word, len, "es");
    }
    if lower.ends_with("quy") {
        return splice(word, len - 1, "ies");
    }
    if let Some(prev) = before("y") {
        if !"aeiouy".contains(prev) {
            return splice(word, len - 1, "ies");
        }
    }
    if lower.ends_with("hive") {
        return splice(word, len, "s");
    }
    if let Some(prev) = before("fe") {
        if prev != 'f' {
            return splice(word, len - 2, "ves");
        }
    }
    if let Some(prev) = before("f") {
        if prev == 'l' || prev == 'r' {
            return splice(word, len - 1, "ves");
        }
    }
    if lower.ends_with("sis") {
        return splice(word, len - 3, "ses");
    }
    if let Some(prev) = before("a") {
        if prev == 't' || prev == 'i' {
            return word.to_string();
        }
    }
    if let Some(prev) = before("um") {
        if prev == 't' || prev == 'i' {
            return splice(word, len - 2, "a");
        }
    }
    if lower.ends_with("buffalo") || lower.ends_with("tomato") {
        return splice(word, len, "es");
    }
    if lower.ends_with("bus") {
        return splice(word, len, "es");
    }
    if lower.ends_with("alias") || lower.ends_with("status") {
        return splice(word, len, "es");
    }
    if lower.ends_with("octopi") || lower.ends_with("viri") {
        return word.to_string();
    }
    if lower.ends_with("octopus") || lower.ends_with("virus") {
        return splice(word, len - 2, "i");
    }
    if lower == "axis" || lower == "testis" {
        return splice(word, len - 2, "es");
    }
    if lower.ends_with('s') {
        return word.to_string();
    }
    splice(word, len, "s")
}

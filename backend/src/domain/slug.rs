//! URL-safe slugs derived from usernames.
//!
//! A slug is the username transliterated to ASCII, lowercased, with every run
//! of characters outside `[a-z0-9]` collapsed into a single hyphen and no
//! leading or trailing hyphens. Apostrophes separate words (`"O'Neil"`
//! becomes `"o-neil"`) and thousands separators inside numbers are dropped
//! (`"1,000"` becomes `"1000"`).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const SEPARATOR: &str = "-";

static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();

fn disallowed_regex() -> &'static Regex {
    DISALLOWED_RE.get_or_init(|| {
        // Hyphens are allowed through so the collapse below sees them.
        Regex::new("[^-a-z0-9]+")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

static DUPLICATE_DASH_RE: OnceLock<Regex> = OnceLock::new();

fn duplicate_dash_regex() -> &'static Regex {
    DUPLICATE_DASH_RE.get_or_init(|| {
        Regex::new("-{2,}")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

/// Derived, URL-safe form of a username.
///
/// # Examples
/// ```
/// use backend::domain::Slug;
///
/// assert_eq!(Slug::derive("Jane Doe").as_ref(), "jane-doe");
/// assert_eq!(Slug::derive("  Zoë  Ångström! ").as_ref(), "zoe-angstrom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Compute the slug for `value`.
    pub fn derive(value: &str) -> Self {
        let separated = value.replace('\'', SEPARATOR);
        let ascii = deunicode::deunicode(&separated).to_lowercase();
        // Transliteration can reintroduce apostrophes; those are dropped.
        let unquoted: String = ascii.chars().filter(|ch| *ch != '\'').collect();
        let joined = strip_digit_group_commas(&unquoted);
        let replaced = disallowed_regex().replace_all(&joined, SEPARATOR);
        let collapsed = duplicate_dash_regex().replace_all(&replaced, SEPARATOR);
        Self(collapsed.trim_matches('-').to_owned())
    }

    /// Rehydrate a slug that was derived earlier and stored.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drop commas that sit between two digits.
fn strip_digit_group_commas(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|(index, ch)| {
            if **ch != ',' || *index == 0 {
                return true;
            }
            let before = chars.get(index - 1).is_some_and(char::is_ascii_digit);
            let after = chars.get(index + 1).is_some_and(char::is_ascii_digit);
            !(before && after)
        })
        .map(|(_, ch)| *ch)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_valid_slug(value: &str) -> bool {
        !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
    }

    #[rstest]
    #[case("Jane Doe", "jane-doe")]
    #[case("jane_doe", "jane-doe")]
    #[case("  Leading and trailing  ", "leading-and-trailing")]
    #[case("Already-a-slug", "already-a-slug")]
    #[case("many   ---   dashes", "many-dashes")]
    #[case("O'Neil", "o-neil")]
    #[case("Zoë Ångström", "zoe-angstrom")]
    #[case("Straße", "strasse")]
    #[case("Łukasz", "lukasz")]
    #[case("Владимир", "vladimir")]
    #[case("李雷", "li-lei")]
    #[case("O’Neil", "oneil")]
    #[case("Agent 007", "agent-007")]
    #[case("Paid 1,000 credits", "paid-1000-credits")]
    #[case("a, b", "a-b")]
    #[case("!!!", "")]
    fn derive_matches_expected_slug(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Slug::derive(input).as_str(), expected);
    }

    #[rstest]
    #[case("Jane Doe")]
    #[case("Ünïcödé   Nåme")]
    #[case("--weird__input--")]
    fn derived_slugs_are_valid(#[case] input: &str) {
        let slug = Slug::derive(input);
        assert!(is_valid_slug(slug.as_str()), "invalid slug {slug}");
    }

    #[rstest]
    fn derive_is_deterministic() {
        assert_eq!(Slug::derive("Jane Doe"), Slug::derive("Jane Doe"));
    }

    #[rstest]
    #[case("-leading")]
    #[case("trailing-")]
    #[case("double--dash")]
    #[case("Upper")]
    #[case("space here")]
    fn rejects_malformed_slugs(#[case] value: &str) {
        assert!(!is_valid_slug(value));
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let value = serde_json::to_value(Slug::derive("Jane Doe")).expect("serialise slug");
        assert_eq!(value, serde_json::json!("jane-doe"));
    }
}

//! Go identifier validation.
//!
//! Declared names end up as Go type names and constant suffixes, so they have
//! to satisfy the Go identifier grammar.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Go reserved keywords.
const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns true if `name` is a Go keyword.
#[must_use]
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Returns true if `name` is a valid, non-keyword Go identifier.
///
/// A Go identifier starts with a letter and continues with letters or
/// digits. Go letters are `_` and the Unicode `L` categories; Go digits are
/// `Nd` only, so marks, letter numbers and superscripts are rejected.
#[must_use]
pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !is_go_letter(first) {
        return false;
    }

    chars.all(|c| is_go_letter(c) || is_go_digit(c)) && !is_go_keyword(name)
}

fn is_go_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

fn is_go_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

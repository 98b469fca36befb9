// src/domain/identifiers.rs
//
// Sequential, prefixed record identifiers ("R-00001", "I-00001").

use once_cell::sync::Lazy;
use regex::Regex;

static RECIPE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^R-\d{5}$").unwrap());
static INVENTORY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^I-\d{5}$").unwrap());

/// Which entity an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Recipe,
    Inventory,
}

impl IdKind {
    pub fn prefix(self) -> char {
        match self {
            IdKind::Recipe => 'R',
            IdKind::Inventory => 'I',
        }
    }

    /// True when `id` is exactly `<prefix>-` followed by five digits
    pub fn matches(self, id: &str) -> bool {
        match self {
            IdKind::Recipe => RECIPE_ID.is_match(id),
            IdKind::Inventory => INVENTORY_ID.is_match(id),
        }
    }
}

/// Format `n` as a zero-padded identifier for `kind`.
/// Numbers wider than five digits are written out in full.
pub fn format_id(kind: IdKind, n: u64) -> String {
    format!("{}-{:05}", kind.prefix(), n)
}

/// Numeric suffix of an identifier, if it carries the right prefix
pub fn parse_id_number(kind: IdKind, id: &str) -> Option<u64> {
    id.strip_prefix(kind.prefix())
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|digits| digits.parse().ok())
}

/// Next identifier after the highest numeric suffix in `ids`.
/// Gaps left by deletions are never refilled.
pub fn next_id<'a>(kind: IdKind, ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids
        .into_iter()
        .filter_map(|id| parse_id_number(kind, id))
        .max()
        .unwrap_or(0);
    format_id(kind, max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_five_digits() {
        assert_eq!(format_id(IdKind::Recipe, 1), "R-00001");
        assert_eq!(format_id(IdKind::Inventory, 42), "I-00042");
        assert_eq!(format_id(IdKind::Recipe, 0), "R-00000");
    }

    #[test]
    fn test_format_does_not_truncate_large_numbers() {
        assert_eq!(format_id(IdKind::Recipe, 123456), "R-123456");
    }

    #[test]
    fn test_matches_requires_exact_shape() {
        assert!(IdKind::Recipe.matches("R-00001"));
        assert!(!IdKind::Recipe.matches("I-00001"));
        assert!(!IdKind::Recipe.matches("R-0001"));
        assert!(!IdKind::Inventory.matches("I-000012"));
    }

    #[test]
    fn test_next_id_skips_gaps() {
        assert_eq!(next_id(IdKind::Recipe, Vec::<&str>::new()), "R-00001");
        assert_eq!(next_id(IdKind::Recipe, ["R-00001", "R-00004"]), "R-00005");
        assert_eq!(next_id(IdKind::Inventory, ["I-00002", "bogus"]), "I-00003");
    }
}

// File: ./src/model/sort.rs
// Sort criteria for the list view and the collation used by "description"
use crate::model::item::Item;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order the items were added in
    #[default]
    Input,
    /// Alphabetical
    Description,
    /// Unpacked items first
    #[value(alias = "status")]
    Packed,
    /// Smallest quantity first
    Quantity,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Input,
        SortBy::Description,
        SortBy::Packed,
        SortBy::Quantity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
            SortBy::Quantity => "quantity",
        }
    }

    /// Text shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by status",
            SortBy::Quantity => "Sort by quantity",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Ordering between two items under this criterion. `Input` treats
    /// everything as equal so a stable sort keeps insertion order.
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortBy::Input => Ordering::Equal,
            SortBy::Description => collate(&a.description, &b.description),
            SortBy::Packed => a.packed.cmp(&b.packed),
            SortBy::Quantity => a.quantity.cmp(&b.quantity),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human ordering for descriptions, strongest difference first: base
/// letters compared case-insensitively with accents removed, then accents
/// (unaccented first), then case (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> Vec<char> {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let primary = base(a).cmp(&base(b));
    if primary != Ordering::Equal {
        return primary;
    }

    let accented = |s: &str| -> Vec<char> { s.nfd().flat_map(char::to_lowercase).collect() };
    let secondary = accented(a).cmp(&accented(b));
    if secondary != Ordering::Equal {
        return secondary;
    }

    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return ca.cmp(&cb),
        }
    }
    a.nfd().count().cmp(&b.nfd().count())
}

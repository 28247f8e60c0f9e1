// File: ./src/stats.rs
use crate::model::Item;

/// Progress summary derived from the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stats {
    Empty,
    Progress { count: usize, packed: usize, percent: u8 },
    /// Rounded percentage reached 100, even if a few items are still out.
    AllPacked { count: usize, packed: usize },
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let count = items.len();
        if count == 0 {
            return Stats::Empty;
        }
        let packed = items.iter().filter(|i| i.packed).count();
        let percent = percent_of(packed, count);
        if percent == 100 {
            return Stats::AllPacked { count, packed };
        }
        Stats::Progress {
            count,
            packed,
            percent,
        }
    }

    pub fn count(&self) -> usize {
        match *self {
            Stats::Empty => 0,
            Stats::Progress { count, .. } | Stats::AllPacked { count, .. } => count,
        }
    }

    pub fn packed(&self) -> usize {
        match *self {
            Stats::Empty => 0,
            Stats::Progress { packed, .. } | Stats::AllPacked { packed, .. } => packed,
        }
    }

    /// `None` for an empty list; there is no meaningful percentage then.
    pub fn percent(&self) -> Option<u8> {
        match *self {
            Stats::Empty => None,
            Stats::Progress { percent, .. } => Some(percent),
            Stats::AllPacked { .. } => Some(100),
        }
    }

    pub fn message(&self) -> String {
        match *self {
            Stats::Empty => "Start adding some items to your packing list 🚀".to_string(),
            Stats::AllPacked { .. } => "You got everything! Ready to go ✈️".to_string(),
            Stats::Progress {
                count,
                packed,
                percent,
            } => format!(
                "💼 You have {} items on your list, and you already packed {} ({}%)",
                count, packed, percent
            ),
        }
    }
}

// Integer round-half-up of part / whole * 100.
fn percent_of(part: usize, whole: usize) -> u8 {
    let scaled = (part * 200 + whole) / (whole * 2);
    scaled.min(100) as u8
}

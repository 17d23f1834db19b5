use std::collections::BTreeSet;

use bgworld_disasm::{TableEntry, WorldListing};
use serde::Serialize;
use tracing::debug;

/// Listing inspector for developer tooling.
///
/// Read-only statistics over a decoded listing, for spotting odd files
/// without reading the whole report.
pub struct ListingInspector;

impl ListingInspector {
    /// Produce a summary of the listing.
    pub fn summary(listing: &WorldListing) -> ListingSummary {
        let entries = &listing.entries;
        let distinct_offsets: BTreeSet<i32> = entries.iter().map(|e| e.offset).collect();
        let longest = entries
            .iter()
            .max_by(|a, b| a.values.len().cmp(&b.values.len()).then(b.index.cmp(&a.index)));

        let summary = ListingSummary {
            rows: listing.header.rows,
            cols: listing.header.cols,
            entry_count: entries.len(),
            value_count: listing.value_count(),
            empty_arrays: entries.iter().filter(|e| e.values.is_empty()).count(),
            distinct_offsets: distinct_offsets.len(),
            longest_entry: longest.map(|e| e.index),
            longest_len: longest.map_or(0, |e| e.values.len()),
            max_value: entries.iter().flat_map(|e| e.values.iter()).copied().max(),
        };
        debug!(%summary, "inspected listing");
        summary
    }

    /// Entries whose arrays contain `value`.
    pub fn entries_containing(listing: &WorldListing, value: i16) -> Vec<&TableEntry> {
        listing
            .entries
            .iter()
            .filter(|e| e.values.contains(&value))
            .collect()
    }
}

/// Summary of a decoded listing for the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    pub rows: i32,
    pub cols: i32,
    pub entry_count: usize,
    pub value_count: usize,
    pub empty_arrays: usize,
    /// Entries pointing at the same array count once.
    pub distinct_offsets: usize,
    /// Lowest index among the longest arrays.
    pub longest_entry: Option<i64>,
    pub longest_len: usize,
    pub max_value: Option<i16>,
}

impl std::fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Listing: grid={}x{} entries={} values={} empty={} distinct_offsets={}",
            self.rows,
            self.cols,
            self.entry_count,
            self.value_count,
            self.empty_arrays,
            self.distinct_offsets
        )?;
        if let Some(index) = self.longest_entry {
            write!(f, " longest=#{index}({})", self.longest_len)?;
        }
        if let Some(max) = self.max_value {
            write!(f, " max_value={max}")?;
        }
        Ok(())
    }
}

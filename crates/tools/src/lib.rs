//! Developer Tooling: summaries over decoded world listings.
//!
//! # Invariants
//! - Tools only read decoded listings; they never touch raw bytes.

mod inspector;

pub use inspector::{ListingInspector, ListingSummary};

pub fn crate_info() -> &'static str {
    "bgworld-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}

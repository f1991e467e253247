//! Runtime support for code generated by persistgen.
//!
//! Generated code refers to this crate by absolute path (`::persistgen_runtime::Uuid`, etc.), so a crate
//! using `#[managed]` depends on `persistgen_runtime` directly. The attribute itself is re-exported here.
//!
//! ```ignore
//! use persistgen_runtime::managed;
//!
//! #[managed(enable_audit)]
//! #[derive(Debug, Clone)]
//! pub struct Order {
//!     #[persisted(set_all_actions)]
//!     _reference: String,
//! }
//!
//! let working = Order { created_by: "alice".into(), ..Order::default() };
//! let stored = working.map_to_authority_insert(Order::default());
//! assert_eq!(stored.created_by, "alice");
//! ```
//!
//! `#[managed]` must be placed before `#[derive(...)]`.

pub use chrono::{DateTime, Utc};
pub use persistgen_derive::managed;
pub use uuid::Uuid;

/// Current UTC time, as stamped by the generated lifecycle mappers.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_utc_is_monotonic_enough() {
        let before = Utc::now();
        let now = now_utc();
        assert!(now >= before);
    }
}

//! Bit-level storage for visited-state tracking.

mod membership;

pub use membership::{MembershipSet, MAX_LEN};

//! The five page features.
//!
//! Each module exposes `FEATURE` (its name in diagnostics), a `bind` function
//! that queries its elements once and subscribes handlers, and the pure
//! handler logic those subscriptions call. Features share no state and may be
//! bound in any order.

pub mod contact;
pub mod filter;
pub mod navigation;
pub mod sidebar;
pub mod testimonials;

//! Content statistics
//!
//! This module turns a parsed page into a `PageStatistics` record and folds
//! records from a whole crawl into an `AggregateStatistics`. Everything here
//! is pure: no I/O, no logging, no shared state.

mod aggregate;
mod page;
mod text;

pub use aggregate::{aggregate, AggregateStatistics};
pub use page::{compute_statistics, PageStatistics};
pub use text::{tokenize, visible_fragments};

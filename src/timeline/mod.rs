//! Timeline aggregation over canonical commits and change requests.
//!
//! The invocation time is always passed in, so results depend only on the
//! arguments.

mod build;
mod event;
mod range;


pub use build::build_timeline;
pub use event::{DescriptionStyle, EventKind, TimelineEvent};
pub use range::{EventFilter, TimeRange};

//! Clinic staffing and intake toolkit.
//!
//! Two independent in-memory structures, no shared state:
//! - [`HierarchyTree`]: binary tree of staff names with name-keyed insertion
//!   and pre/in/post-order traversals.
//! - [`IntakeQueue`]: array-backed min-heap serving patients by urgency.
//!
//! Neither structure is synchronized; each instance belongs to its caller.

pub mod cli;
pub mod errors;
pub mod hierarchy;
pub mod intake;
pub mod util;

pub use errors::{TriageError, TriageResult};
pub use hierarchy::{HierarchyTree, Side, StaffNode};
pub use intake::{IntakeQueue, Patient, URGENCY_MAX, URGENCY_MIN};

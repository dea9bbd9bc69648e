//! Scheduling domain models.
//!
//! Provides the data types exchanged with the simulation engine: the
//! caller's process descriptors, the completed-process records carrying
//! metrics, and the execution timeline.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Gantt chart |
//! |--------------|---------------|-------------|
//! | Process | Job / CPU burst | Row label |
//! | CompletedProcess | Process table entry | Metrics table |
//! | Bar | Execution slice | Bar segment |
//! | Timeline | Gantt chart | Whole chart |

mod process;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use timeline::{Bar, Timeline};

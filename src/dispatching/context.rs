//! Ready-process view handed to dispatching rules.

use crate::models::Process;

/// A process that has arrived and still has work left.
///
/// `index` is the process's position in the caller's input list; it is
/// the final tie-breaker, so equal scores resolve to the first process
/// found in input order.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position in the input process list.
    pub index: usize,
    /// The process descriptor.
    pub process: &'a Process,
    /// CPU time still required.
    pub remaining_time: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(index: usize, process: &'a Process, remaining_time: i64) -> Self {
        Self {
            index,
            process,
            remaining_time,
        }
    }
}

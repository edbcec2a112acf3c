//! Capped result collection with early termination.

use std::ops::ControlFlow;

use super::types::SearchResult;

/// Collects hits until `cap` is reached.
///
/// Once full, the next offered hit is dropped, the result is marked
/// truncated and `offer` returns `Break`. Callers break out of every
/// enclosing loop on `Break`. If enumeration runs dry while the accumulator
/// is merely full, nothing further existed and the result is not truncated.
#[derive(Debug)]
pub struct ResultAccumulator<T> {
    hits: Vec<T>,
    cap: usize,
    truncated: bool,
}

impl<T> ResultAccumulator<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            hits: Vec::with_capacity(cap.min(1024)),
            cap,
            truncated: false,
        }
    }

    pub fn offer(&mut self, hit: T) -> ControlFlow<()> {
        if self.hits.len() >= self.cap {
            self.truncated = true;
            return ControlFlow::Break(());
        }
        self.hits.push(hit);
        ControlFlow::Continue(())
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn finish(self) -> SearchResult<T> {
        SearchResult {
            hits: self.hits,
            truncated: self.truncated,
        }
    }
}

//! Test utilities and component fixtures for Tandem development.
//!
//! Provides a [`GrowthRecorder`] that captures growth notifications and
//! small `Copy` component types for exercising buffers and stores.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use tandem_core::GrowthCallback;

pub use fixtures::{entities, Health, Position};

/// Records every capacity a storage reports through its growth callback.
///
/// Clone the recorder freely; all clones share one log.
#[derive(Clone, Debug, Default)]
pub struct GrowthRecorder {
    log: Rc<RefCell<Vec<usize>>>,
}

impl GrowthRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A boxed callback that appends to this recorder's log.
    pub fn callback(&self) -> GrowthCallback {
        let log = Rc::clone(&self.log);
        Box::new(move |capacity| log.borrow_mut().push(capacity))
    }

    /// Capacities seen so far, in notification order.
    pub fn capacities(&self) -> Vec<usize> {
        self.log.borrow().clone()
    }

    /// Number of notifications received.
    pub fn count(&self) -> usize {
        self.log.borrow().len()
    }

    /// Most recent capacity, if any growth happened.
    pub fn last(&self) -> Option<usize> {
        self.log.borrow().last().copied()
    }
}

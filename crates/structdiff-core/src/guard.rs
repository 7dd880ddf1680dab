//! Cycle detection shared by the match, render, and diff walks.
//!
//! A [`Trail`] records the containers currently being descended on one side
//! of a walk, plus the key path that led there. Entering a container that is
//! already open means the graph loops back on itself. A container reached
//! twice through different branches (a shared, acyclic sub-value) is fine:
//! it is closed again before the second branch opens it.
use std::collections::HashSet;

use tracing::debug;

use crate::error::{DiffError, Side};
use crate::value::{Container, Key};

/// One step in a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Key(Key),
    Prototype,
}

#[derive(Debug)]
pub(crate) struct Trail {
    side: Side,
    open: HashSet<usize>,
    path: Vec<Segment>,
}

impl Trail {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            open: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// Marks `container` as being descended.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::CyclicValue`] if `container` is already open.
    pub(crate) fn enter(&mut self, container: &Container) -> Result<(), DiffError> {
        if self.open.insert(container.identity()) {
            return Ok(());
        }
        let path = self.path();
        debug!(side = %self.side, %path, "cycle detected");
        Err(DiffError::CyclicValue {
            side: self.side,
            path,
        })
    }

    pub(crate) fn leave(&mut self, container: &Container) {
        self.open.remove(&container.identity());
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.path.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.path.pop();
    }

    /// Renders the current path as `$`, `$.name`, `$[3]`, `$.<prototype>`.
    pub(crate) fn path(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Key(Key::Index(index)) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
                Segment::Key(Key::Name(name)) => {
                    out.push('.');
                    out.push_str(name);
                }
                Segment::Prototype => out.push_str(".<prototype>"),
            }
        }
        out
    }
}

//! Single-selection "active" groups.
//!
//! Filter buttons and nav link/page pairs each form a group in which at most
//! one member carries the active class. Changes are total resets (clear all,
//! then set one) rather than incremental toggles.

use std::cell::Cell;

use crate::dom::Element;
use crate::error::BindError;
use crate::markers::ACTIVE_CLASS;

pub fn deactivate_all<E: Element>(group: &[E]) -> Result<(), BindError> {
    group.iter().try_for_each(|member| member.remove_class(ACTIVE_CLASS))
}

/// Clear the whole group, then activate `group[index]` if it exists.
pub fn activate_only<E: Element>(group: &[E], index: usize) -> Result<(), BindError> {
    deactivate_all(group)?;
    match group.get(index) {
        Some(member) => member.add_class(ACTIVE_CLASS),
        None => Ok(()),
    }
}

/// Indices of members currently marked active.
pub fn active_indices<E: Element>(group: &[E]) -> Vec<usize> {
    group
        .iter()
        .enumerate()
        .filter(|(_, member)| member.has_class(ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

/// Remembers the last clicked member so only it needs clearing on the next click.
///
/// Starts at the first member, so an initially marked first button is cleared
/// correctly on the first click elsewhere.
#[derive(Debug, Default)]
pub struct LastActive {
    index: Cell<usize>,
}

impl LastActive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.index.get()
    }

    /// Move the active class from the previous member to `group[index]`.
    pub fn move_to<E: Element>(&self, group: &[E], index: usize) -> Result<(), BindError> {
        if let Some(previous) = group.get(self.index.get()) {
            previous.remove_class(ACTIVE_CLASS)?;
        }
        if let Some(member) = group.get(index) {
            member.add_class(ACTIVE_CLASS)?;
            self.index.set(index);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

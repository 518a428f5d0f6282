// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle-based registry of stacking scopes.
//!
//! Use this when scopes are created and torn down by code that cannot hold a
//! borrow of the scope itself (for example across a portal boundary). The owner
//! registers a scope and hands out the [`ScopeHandle`]; consumers look labels up
//! through the handle; the owner disposes the scope on teardown.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, error};

use crate::error::StackingError;
use crate::scope::StackingScope;

/// Identifier for a scope in a [`StackingRegistry`] (generational).
///
/// A handle becomes stale when its scope is disposed. Reusing the slot bumps
/// the generation, so a stale handle never aliases a newer scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScopeHandle(u32, u32);

impl ScopeHandle {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    scope: Option<StackingScope>,
}

/// Arena of stacking scopes addressed by [`ScopeHandle`].
#[derive(Clone, Debug, Default)]
pub struct StackingRegistry {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
}

impl StackingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level scope.
    ///
    /// # Errors
    ///
    /// Propagates label list errors from [`StackingScope::new`].
    pub fn register<I, S>(&mut self, labels: I) -> Result<ScopeHandle, StackingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scope = StackingScope::new(labels)?;
        Ok(self.insert(scope))
    }

    /// Register a scope nested under `parent` at the parent's depth for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`StackingError::UnknownScope`] for a stale parent, otherwise
    /// propagates errors from [`StackingScope::nested`].
    pub fn register_nested<I, S>(
        &mut self,
        parent: ScopeHandle,
        label: &str,
        labels: I,
    ) -> Result<ScopeHandle, StackingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scope = self.scope(parent)?.nested(label, labels)?;
        Ok(self.insert(scope))
    }

    /// Borrow the scope behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`StackingError::UnknownScope`] for a stale or disposed handle.
    pub fn scope(&self, handle: ScopeHandle) -> Result<&StackingScope, StackingError> {
        self.slots
            .get(handle.idx())
            .filter(|slot| slot.generation == handle.1)
            .and_then(|slot| slot.scope.as_ref())
            .ok_or_else(|| {
                error!(?handle, "stacking lookup through a dead scope handle");
                StackingError::UnknownScope
            })
    }

    /// Depth of `label` in the scope behind `handle`.
    ///
    /// # Errors
    ///
    /// [`StackingError::UnknownScope`] for a dead handle,
    /// [`StackingError::UnregisteredLabel`] for an unknown label.
    pub fn lookup(&self, handle: ScopeHandle, label: &str) -> Result<u32, StackingError> {
        self.scope(handle)?.depth(label)
    }

    /// Whether `handle` still refers to a live scope.
    pub fn is_alive(&self, handle: ScopeHandle) -> bool {
        self.slots
            .get(handle.idx())
            .is_some_and(|slot| slot.generation == handle.1 && slot.scope.is_some())
    }

    /// Dispose the scope behind `handle`, returning it. Disposing twice is a no-op.
    pub fn dispose(&mut self, handle: ScopeHandle) -> Option<StackingScope> {
        if !self.is_alive(handle) {
            return None;
        }
        let slot = &mut self.slots[handle.idx()];
        let scope = slot.scope.take();
        self.free_list.push(handle.idx());
        debug!(?handle, "disposed stacking scope");
        scope
    }

    /// Number of live scopes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// True when no scopes are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, scope: StackingScope) -> ScopeHandle {
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            slot.scope = Some(scope);
            idx
        } else {
            self.slots.push(Slot {
                generation: 1,
                scope: Some(scope),
            });
            self.slots.len() - 1
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ScopeHandle stores 32-bit slot indices."
        )]
        let slot = idx as u32;
        ScopeHandle(slot, self.slots[idx].generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = StackingRegistry::new();
        let scope = registry.register(["menu", "tooltip"]).unwrap();
        assert_eq!(registry.lookup(scope, "menu"), Ok(1));
        assert_eq!(registry.lookup(scope, "tooltip"), Ok(2));
        assert_eq!(
            registry.lookup(scope, "dialog"),
            Err(StackingError::UnregisteredLabel {
                label: "dialog".into()
            })
        );
    }

    #[test]
    fn sibling_scopes_reuse_depths() {
        let mut registry = StackingRegistry::new();
        let a = registry.register(["menu"]).unwrap();
        let b = registry.register(["toast", "menu"]).unwrap();
        assert_eq!(registry.lookup(a, "menu"), Ok(1));
        assert_eq!(registry.lookup(b, "toast"), Ok(1));
        assert_eq!(registry.lookup(b, "menu"), Ok(2));
        assert!(registry.lookup(a, "toast").is_err());
    }

    #[test]
    fn nested_registration() {
        let mut registry = StackingRegistry::new();
        let page = registry.register(["header", "modal"]).unwrap();
        let modal = registry.register_nested(page, "modal", ["menu"]).unwrap();
        assert_eq!(registry.scope(modal).unwrap().root_style().z_index, Some(2));
        assert!(registry.lookup(modal, "header").is_err());
        assert!(registry.register_nested(page, "footer", ["x"]).is_err());
    }

    #[test]
    fn disposed_handles_go_stale() {
        let mut registry = StackingRegistry::new();
        let first = registry.register(["menu"]).unwrap();
        assert!(registry.dispose(first).is_some());
        assert!(registry.dispose(first).is_none(), "second dispose is a no-op");
        assert_eq!(registry.lookup(first, "menu"), Err(StackingError::UnknownScope));

        // The slot is reused with a new generation.
        let second = registry.register(["menu"]).unwrap();
        assert_ne!(first, second);
        assert!(!registry.is_alive(first));
        assert!(registry.is_alive(second));
        assert_eq!(registry.lookup(first, "menu"), Err(StackingError::UnknownScope));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failed_registration_leaves_registry_untouched() {
        let mut registry = StackingRegistry::new();
        assert!(registry.register(["a", "a"]).is_err());
        assert!(registry.is_empty());
    }
}

// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single stacking scope: labels mapped to 1-based depths.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, error};

use crate::error::StackingError;

/// An isolated namespace assigning depths to labeled overlay roots.
///
/// The nth label receives depth `n + 1`. The label list is fixed for the life of
/// the scope; a different list means a different scope.
///
/// Scopes do not see each other's labels, including their parent's. Each scope
/// root establishes its own stacking context (see [`StackingScope::root_style`]),
/// so equal depths in different scopes never compete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackingScope {
    labels: Vec<String>,
    root_z_index: Option<u32>,
}

impl StackingScope {
    /// Create a top-level scope from an ordered label list.
    ///
    /// # Errors
    ///
    /// Returns [`StackingError::EmptyLabel`] or [`StackingError::DuplicateLabel`]
    /// when the list is malformed.
    pub fn new<I, S>(labels: I) -> Result<Self, StackingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_root(labels, None)
    }

    /// Create a scope nested inside `self`, whose root sits at this scope's depth
    /// for `label`.
    ///
    /// The child does not inherit any of this scope's labels.
    ///
    /// # Errors
    ///
    /// Returns [`StackingError::UnregisteredLabel`] if `label` is not registered
    /// here, or any error [`StackingScope::new`] can return for `labels`.
    pub fn nested<I, S>(&self, label: &str, labels: I) -> Result<Self, StackingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let z = self.depth(label)?;
        Self::with_root(labels, Some(z))
    }

    fn with_root<I, S>(labels: I, root_z_index: Option<u32>) -> Result<Self, StackingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if label.is_empty() {
                error!("empty stacking label");
                return Err(StackingError::EmptyLabel);
            }
            if out.contains(&label) {
                error!(%label, "duplicate stacking label");
                return Err(StackingError::DuplicateLabel { label });
            }
            out.push(label);
        }
        debug!(labels = out.len(), ?root_z_index, "created stacking scope");
        Ok(Self {
            labels: out,
            root_z_index,
        })
    }

    /// Depth for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`StackingError::UnregisteredLabel`] when `label` is not in this
    /// scope. There is no default depth.
    pub fn depth(&self, label: &str) -> Result<u32, StackingError> {
        match self.labels.iter().position(|l| l == label) {
            Some(i) => Ok(depth_at(i)),
            None => {
                error!(%label, "stacking label is not registered in this scope");
                Err(StackingError::UnregisteredLabel {
                    label: label.into(),
                })
            }
        }
    }

    /// Depth for an optional label; an unlabeled overlay has no depth.
    ///
    /// # Errors
    ///
    /// Same as [`StackingScope::depth`] when a label is given.
    pub fn depth_of(&self, label: Option<&str>) -> Result<Option<u32>, StackingError> {
        label.map(|l| self.depth(l)).transpose()
    }

    /// Whether `label` is registered here.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels with their depths, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), depth_at(i)))
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no labels are registered.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Style for the element that roots this scope.
    pub fn root_style(&self) -> RootStyle {
        RootStyle {
            z_index: self.root_z_index,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Label lists never approach u32::MAX entries."
)]
fn depth_at(index: usize) -> u32 {
    index as u32 + 1
}

/// Style applied to a scope's root element.
///
/// The root always isolates, so depths assigned inside it never interleave with
/// depths outside. A nested scope's root also carries its depth in the parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RootStyle {
    /// Z-index of the root within the enclosing scope, if the root is labeled.
    pub z_index: Option<u32>,
}

impl fmt::Display for RootStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("isolation: isolate;")?;
        if let Some(z) = self.z_index {
            write!(f, " z-index: {z};")?;
        }
        Ok(())
    }
}

// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking errors.
//!
//! All of these are configuration mistakes. There is no fallback depth.

use alloc::string::String;

use thiserror::Error;

/// Errors from building or querying stacking scopes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackingError {
    /// The label is not registered in the scope it was looked up in.
    #[error("label `{label}` is not registered in this stacking scope")]
    UnregisteredLabel {
        /// The missing label.
        label: String,
    },
    /// The same label appeared twice in one scope's label list.
    #[error("label `{label}` is registered more than once")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
    /// A label was the empty string.
    #[error("stacking labels must not be empty")]
    EmptyLabel,
    /// The scope handle is stale or the scope was disposed.
    #[error("stacking scope handle does not refer to a live scope")]
    UnknownScope,
}

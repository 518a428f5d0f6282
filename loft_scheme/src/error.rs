// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheme errors.

use alloc::string::String;

use thiserror::Error;

/// Errors from creating a [`SchemeScope`](crate::SchemeScope).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// The scope id cannot be used as a CSS class name.
    #[error("scope id `{id}` must be non-empty ASCII alphanumerics, `-` or `_`")]
    InvalidScopeId {
        /// The rejected id.
        id: String,
    },
}

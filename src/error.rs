// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by the expense sync layer. Transport details are
/// flattened into the message; callers never see the underlying client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("You must be logged in")]
    AuthRequired,

    #[error("Session is still loading")]
    SessionLoading,

    #[error("Failed to load expenses: {0}")]
    RemoteReadFailure(String),

    #[error("Failed to save expense: {0}")]
    RemoteWriteFailure(String),

    #[error("{0}")]
    ValidationFailure(String),
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Source of the signed-in identity.
pub trait SessionProvider {
    fn user_id(&self) -> Option<&str>;

    /// True while the identity is still being resolved.
    fn is_loading(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
    loading: bool,
}

impl Session {
    /// A blank id counts as signed out.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let id = user_id.into();
        let id = id.trim().to_string();
        Session {
            user_id: if id.is_empty() { None } else { Some(id) },
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn loading() -> Self {
        Session {
            user_id: None,
            loading: true,
        }
    }
}

impl SessionProvider for Session {
    fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

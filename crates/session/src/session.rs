// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The administrator session context.
//!
//! One explicit object with a defined lifecycle — hydrate on boot, persist
//! after changes, clear on 401 or logout — instead of ad hoc storage reads
//! scattered across the code that consumes it.

use crate::store::{SessionStore, StoreError};
use std::collections::HashMap;
use tracing::{debug, info};

/// Storage keys, unchanged from the original local-storage layout.
const KEY_TOKEN: &str = "token";
const KEY_INSTITUTION_NAME: &str = "nombre_institucion";
const KEY_INSTITUTION_ID: &str = "id_institucion";
const KEY_ROLE: &str = "rol";
const KEY_REDIRECT: &str = "redirectAfterLogin";
const AVATAR_KEY_PREFIX: &str = "avatar_url:";

/// The hydrated session for one administrator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    token: Option<String>,
    institution_name: Option<String>,
    institution_id: Option<i64>,
    role: Option<String>,
    avatar_urls: HashMap<i64, String>,
    redirect_after_login: Option<String>,
}

impl Session {
    /// Hydrates a session from a store at boot.
    ///
    /// Unparseable institution ids in the store are treated as absent
    /// rather than failing the boot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself cannot be read.
    pub fn hydrate(store: &dyn SessionStore) -> Result<Self, StoreError> {
        let entries: HashMap<String, String> = store.load()?;

        let mut avatar_urls: HashMap<i64, String> = HashMap::new();
        for (key, value) in &entries {
            if let Some(id) = key.strip_prefix(AVATAR_KEY_PREFIX)
                && let Ok(id) = id.parse::<i64>()
            {
                avatar_urls.insert(id, value.clone());
            }
        }

        let session: Self = Self {
            token: entries.get(KEY_TOKEN).cloned(),
            institution_name: entries.get(KEY_INSTITUTION_NAME).cloned(),
            institution_id: entries
                .get(KEY_INSTITUTION_ID)
                .and_then(|v| v.parse().ok()),
            role: entries.get(KEY_ROLE).cloned(),
            avatar_urls,
            redirect_after_login: entries.get(KEY_REDIRECT).cloned(),
        };

        debug!(
            authenticated = session.token.is_some(),
            institution = ?session.institution_name,
            "Session hydrated"
        );
        Ok(session)
    }

    /// Persists the session to a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn persist(&self, store: &dyn SessionStore) -> Result<(), StoreError> {
        let mut entries: HashMap<String, String> = HashMap::new();
        if let Some(token) = &self.token {
            entries.insert(KEY_TOKEN.to_string(), token.clone());
        }
        if let Some(name) = &self.institution_name {
            entries.insert(KEY_INSTITUTION_NAME.to_string(), name.clone());
        }
        if let Some(id) = self.institution_id {
            entries.insert(KEY_INSTITUTION_ID.to_string(), id.to_string());
        }
        if let Some(role) = &self.role {
            entries.insert(KEY_ROLE.to_string(), role.clone());
        }
        if let Some(redirect) = &self.redirect_after_login {
            entries.insert(KEY_REDIRECT.to_string(), redirect.clone());
        }
        for (id, url) in &self.avatar_urls {
            entries.insert(format!("{AVATAR_KEY_PREFIX}{id}"), url.clone());
        }
        store.save(&entries)
    }

    /// Clears the session, both in memory and in the store.
    ///
    /// Runs on explicit logout and whenever the server answers 401; the
    /// avatar cache is wiped with everything else.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&mut self, store: &dyn SessionStore) -> Result<(), StoreError> {
        *self = Self::default();
        store.save(&HashMap::new())?;
        info!("Session cleared");
        Ok(())
    }

    /// Returns whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Sets the bearer token.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Returns the institution display name, if known.
    #[must_use]
    pub fn institution_name(&self) -> Option<&str> {
        self.institution_name.as_deref()
    }

    /// Sets the institution display name.
    pub fn set_institution_name(&mut self, name: String) {
        self.institution_name = Some(name);
    }

    /// Returns the institution id, if known.
    #[must_use]
    pub const fn institution_id(&self) -> Option<i64> {
        self.institution_id
    }

    /// Sets the institution id.
    pub const fn set_institution_id(&mut self, id: i64) {
        self.institution_id = Some(id);
    }

    /// Returns the administrator role, if known.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Sets the administrator role.
    pub fn set_role(&mut self, role: String) {
        self.role = Some(role);
    }

    /// Returns the cached avatar URL for an institution.
    #[must_use]
    pub fn avatar_url(&self, institution_id: i64) -> Option<&str> {
        self.avatar_urls.get(&institution_id).map(String::as_str)
    }

    /// Caches an avatar URL for an institution.
    pub fn cache_avatar_url(&mut self, institution_id: i64, url: String) {
        self.avatar_urls.insert(institution_id, url);
    }

    /// Sets the one-shot post-login redirect path.
    pub fn set_redirect_after_login(&mut self, path: String) {
        self.redirect_after_login = Some(path);
    }

    /// Takes the one-shot post-login redirect path, leaving it empty.
    pub fn take_redirect_after_login(&mut self) -> Option<String> {
        self.redirect_after_login.take()
    }
}

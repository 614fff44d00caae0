// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory notification feed.
//!
//! Events arriving over the live stream are informational and never
//! authoritative; the feed deduplicates them by id before prepending so a
//! reconnect replaying recent events cannot produce duplicates. Read-state
//! changes are optimistic and idempotent: flipping an already-read
//! notification is a no-op, so a mark-all fired twice settles identically.

use serde::{Deserialize, Serialize};

/// One notification, as pushed by the server or fetched from the list
/// endpoint. Field names follow the Spanish wire vocabulary, with the
/// historical variants accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Server-assigned identifier, the deduplication key.
    #[serde(alias = "id_notificacion")]
    pub id: i64,
    /// Short title.
    #[serde(rename = "titulo", alias = "title", default)]
    pub title: String,
    /// Body text.
    #[serde(rename = "mensaje", alias = "message", default)]
    pub message: String,
    /// Category tag (e.g. "academico"), if the server sent one.
    #[serde(rename = "tipo", alias = "kind", default)]
    pub kind: Option<String>,
    /// Whether the administrator has read it.
    #[serde(rename = "leida", alias = "is_read", alias = "read", default)]
    pub read: bool,
    /// Creation timestamp (ISO 8601, as reported).
    #[serde(rename = "fecha", alias = "created_at", default)]
    pub created_at: Option<String>,
}

/// The notification list held by the notifications view.
///
/// Newest first: live events are prepended, the seed list is taken in the
/// order the server returned it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replaces the feed with the list-endpoint response.
    pub fn replace_all(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Returns the notifications, newest first.
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Prepends a live event unless its id is already present.
    ///
    /// Returns `true` if the notification was added. The caller only
    /// triggers side effects (sound, desktop notification) on `true`.
    pub fn push(&mut self, notification: Notification) -> bool {
        if self.items.iter().any(|n| n.id == notification.id) {
            return false;
        }
        self.items.insert(0, notification);
        true
    }

    /// Returns how many notifications are unread.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks one notification read. Idempotent.
    ///
    /// Returns `true` if the read flag actually changed (the caller only
    /// fires the network call on a change).
    pub fn mark_read(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Marks every notification read. Idempotent.
    ///
    /// Returns the number of notifications that changed; a second call
    /// before the first request settles changes nothing and is safe.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed: usize = 0;
        for n in &mut self.items {
            if !n.read {
                n.read = true;
                changed += 1;
            }
        }
        changed
    }
}

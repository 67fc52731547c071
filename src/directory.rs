//! Guest Directory & Search Index
//!
//! Built once from the final guest list and read-only for the rest of
//! the session. Answers three queries:
//! - fuzzy name search (diacritic/case-insensitive substring match),
//! - tablemates (same table, excluding the queried guest),
//! - direct lookup by id.
//!
//! Search returns every match; capping to a display limit is the
//! caller's concern.

use std::collections::HashMap;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::data::{self, GuestRecord, LoaderConfig};
use crate::error::LoadError;
use crate::utils::normalization::normalize_for_search;

/// Read-only lookup structures over the loaded guest list.
#[derive(Debug)]
pub struct GuestDirectory {
    /// All guests in source order; the index maps below point into it.
    guests: Vec<GuestRecord>,
    /// id → position. Duplicate ids keep the last record, matching the
    /// original list's map construction.
    by_id: FxHashMap<String, usize>,
    /// table label → positions, insertion order preserved per table.
    by_table: HashMap<String, Vec<usize>>,
}

impl GuestDirectory {
    /// Build the directory. Total: never fails, even on one guest.
    pub fn build(guests: Vec<GuestRecord>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_table: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, guest) in guests.iter().enumerate() {
            by_id.insert(guest.id.clone(), index);
            by_table.entry(guest.table.clone()).or_default().push(index);
        }

        tracing::info!(
            guests = guests.len(),
            tables = by_table.len(),
            "guest directory built"
        );

        Self {
            guests,
            by_id,
            by_table,
        }
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// All guests in source order.
    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    /// Direct lookup by identifier.
    pub fn get(&self, id: &str) -> Option<&GuestRecord> {
        self.by_id.get(id).map(|&index| &self.guests[index])
    }

    /// Fuzzy name search.
    ///
    /// An empty or whitespace-only query returns no matches. Otherwise a
    /// guest matches when its normalized `search_key` contains the
    /// normalized query as a substring, so mid-name fragments work.
    /// Ordering is two-tier: guests whose name starts with the query
    /// come first, then the rest, each tier sorted by folded name with
    /// display name as the tiebreak.
    pub fn search(&self, query: &str) -> Vec<&GuestRecord> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let needle = normalize_for_search(trimmed);
        let mut matches: Vec<&GuestRecord> = self
            .guests
            .iter()
            .filter(|guest| guest.search_key.contains(&needle))
            .collect();

        matches.sort_by(|a, b| {
            let a_prefix = a.search_key.starts_with(&needle);
            let b_prefix = b.search_key.starts_with(&needle);
            b_prefix
                .cmp(&a_prefix)
                .then_with(|| a.search_key.cmp(&b.search_key))
                .then_with(|| a.name.cmp(&b.name))
        });

        matches
    }

    /// Everyone sharing the guest's table, excluding the guest itself.
    /// Order matches first appearance in the source.
    pub fn tablemates(&self, guest: &GuestRecord) -> Vec<&GuestRecord> {
        self.by_table
            .get(&guest.table)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&index| &self.guests[index])
                    .filter(|mate| mate.id != guest.id)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

enum SessionState {
    Uninitialized,
    Loading,
    Ready(GuestDirectory),
    Failed(LoadError),
}

/// One lookup session: `Uninitialized → Loading → Ready | Failed`.
///
/// Both outcomes are terminal. A failed session is not retried in
/// place; recovery means constructing a fresh session. Queries are only
/// possible through [`Session::directory`], so no caller can observe a
/// partially built directory.
pub struct Session {
    config: LoaderConfig,
    state: SessionState,
}

impl Session {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            state: SessionState::Uninitialized,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Uninitialized => SessionPhase::Uninitialized,
            SessionState::Loading => SessionPhase::Loading,
            SessionState::Ready(_) => SessionPhase::Ready,
            SessionState::Failed(_) => SessionPhase::Failed,
        }
    }

    /// The directory, once and only once the session is ready.
    pub fn directory(&self) -> Option<&GuestDirectory> {
        match &self.state {
            SessionState::Ready(directory) => Some(directory),
            _ => None,
        }
    }

    /// The terminal failure, if the load failed.
    pub fn failure(&self) -> Option<&LoadError> {
        match &self.state {
            SessionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Run the one-shot load from a guest list file.
    ///
    /// Effective only from `Uninitialized`; on a terminal session this
    /// reports the outcome of the first load instead of reloading. The
    /// `&mut` borrow is held across the await, so `Loading` is never
    /// observable from outside.
    pub async fn initialize(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        match &self.state {
            SessionState::Uninitialized => {}
            SessionState::Loading | SessionState::Ready(_) => return Ok(()),
            SessionState::Failed(err) => return Err(err.clone()),
        }

        self.state = SessionState::Loading;

        match data::load_guest_list(path, &self.config).await {
            Ok(guests) => {
                self.state = SessionState::Ready(GuestDirectory::build(guests));
                Ok(())
            }
            Err(err) => {
                tracing::error!(%err, "guest directory initialization failed");
                self.state = SessionState::Failed(err.clone());
                Err(err)
            }
        }
    }
}

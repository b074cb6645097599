//! The show as seen by a running session.
//!
//! [`ShowManager`] owns the current show and an injected store. Changes are
//! gated on the editor role and written through as a full snapshot after
//! every successful mutation. A failed write is logged and leaves the
//! manager non-durable; the in-memory show stays authoritative.

use ring_ingest::parse_import;
use ring_model::Show;
use ring_persistence::{KeyValueStore, load_snapshot, save_snapshot};

use crate::access::Session;
use crate::board::Board;
use crate::error::{ManagerError, Result};
use crate::{editor, navigation};

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub areas: usize,
    pub classes: usize,
    pub discarded_lines: usize,
}

/// Current show plus write-through persistence.
#[derive(Debug)]
pub struct ShowManager<S> {
    store: S,
    key: String,
    show: Show,
    durable: bool,
}

impl<S: KeyValueStore> ShowManager<S> {
    /// Load the show stored under `key`.
    ///
    /// Falls back to the default show when nothing is stored or the stored
    /// record cannot be read.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let show = match load_snapshot(&store, &key) {
            Ok(Some(snapshot)) => Show::from_snapshot(snapshot),
            Ok(None) => {
                tracing::info!(key = %key, "no stored show, starting with the default");
                Show::default()
            }
            Err(error) => {
                tracing::warn!(key = %key, %error, "could not read stored show, starting with the default");
                Show::default()
            }
        };
        Self {
            store,
            key,
            show,
            durable: true,
        }
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn board(&self) -> Board {
        Board::from_show(&self.show)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// False if the most recent write failed.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Replace the whole show with parsed import text.
    pub fn import(&mut self, session: &Session, text: &str) -> Result<ImportSummary> {
        session.require_editor()?;
        let parsed = parse_import(text)?;
        let summary = ImportSummary {
            areas: parsed.show.areas.len(),
            classes: parsed.show.class_count(),
            discarded_lines: parsed.discarded_lines,
        };
        self.show = parsed.show;
        tracing::info!(
            user = session.user(),
            areas = summary.areas,
            classes = summary.classes,
            discarded_lines = summary.discarded_lines,
            "imported show"
        );
        self.persist();
        Ok(summary)
    }

    pub fn advance(&mut self, session: &Session, area: &str) -> Result<usize> {
        self.mutate(session, |show| navigation::advance(show, area))
    }

    pub fn retreat(&mut self, session: &Session, area: &str) -> Result<usize> {
        self.mutate(session, |show| navigation::retreat(show, area))
    }

    pub fn jump_to(&mut self, session: &Session, area: &str, index: usize) -> Result<usize> {
        self.mutate(session, |show| navigation::jump_to(show, area, index))
    }

    pub fn rename_area(&mut self, session: &Session, old_name: &str, new_name: &str) -> Result<()> {
        self.mutate(session, |show| editor::rename_area(show, old_name, new_name))
    }

    pub fn remove_area(&mut self, session: &Session, name: &str) -> Result<()> {
        self.mutate(session, |show| editor::remove_area(show, name))
    }

    pub fn rename_class(
        &mut self,
        session: &Session,
        area: &str,
        index: usize,
        new_name: &str,
    ) -> Result<()> {
        self.mutate(session, |show| {
            editor::rename_class(show, area, index, new_name)
        })
    }

    pub fn remove_class(&mut self, session: &Session, area: &str, index: usize) -> Result<String> {
        self.mutate(session, |show| editor::remove_class(show, area, index))
    }

    fn mutate<T, E>(
        &mut self,
        session: &Session,
        operation: impl FnOnce(&mut Show) -> std::result::Result<T, E>,
    ) -> Result<T>
    where
        ManagerError: From<E>,
    {
        session.require_editor()?;
        let value = operation(&mut self.show)?;
        self.persist();
        Ok(value)
    }

    fn persist(&mut self) {
        match save_snapshot(&self.store, &self.key, &self.show.to_snapshot()) {
            Ok(()) => self.durable = true,
            Err(error) => {
                self.durable = false;
                tracing::warn!(
                    key = %self.key,
                    %error,
                    "failed to save show; changes are kept for this session only"
                );
            }
        }
    }
}

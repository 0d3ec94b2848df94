//! The application shell's state container: the single live document, the
//! render preferences and the score derived from the document.
//!
//! Every mutation runs the same pipeline, synchronously:
//! 1. apply a pure document operation
//! 2. recompute the score
//! 3. queue a fire-and-forget write of the new blob

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::document::{self, encode_document};
use crate::models::preferences::{RenderPreferences, TemplateId};
use crate::models::resume::ResumeDocument;
use crate::render::{self, RenderedLayout};
use crate::scoring::{self, ScoreResult};
use crate::storage::preferences::{load_preferences, persist_preferences};
use crate::storage::{KeyValueStore, WriteQueue, DOCUMENT_KEY};

pub struct Session {
    writes: WriteQueue,
    document: ResumeDocument,
    preferences: RenderPreferences,
    score: ScoreResult,
    updated_at: DateTime<Utc>,
}

/// What callers see after each settle.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub document: ResumeDocument,
    pub score: ScoreResult,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        document: ResumeDocument,
        preferences: RenderPreferences,
    ) -> Self {
        let score = scoring::score(&document);
        Self {
            writes: WriteQueue::spawn(store),
            document,
            preferences,
            score,
            updated_at: Utc::now(),
        }
    }

    /// Loads document and preferences from the store. Never fails.
    pub async fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let document = document::initialize(store.as_ref()).await;
        let preferences = load_preferences(store.as_ref()).await;
        let session = Self::new(store, document, preferences);
        debug!(
            "Session restored (template: {}, score: {})",
            session.preferences.template_id, session.score.score
        );
        session
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn preferences(&self) -> &RenderPreferences {
        &self.preferences
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            document: self.document.clone(),
            score: self.score.clone(),
            updated_at: self.updated_at,
        }
    }

    /// Runs one mutation through the mutate → rescore → persist pipeline.
    pub fn apply<F>(&mut self, mutation: F) -> SessionSnapshot
    where
        F: FnOnce(&ResumeDocument) -> ResumeDocument,
    {
        let next = mutation(&self.document);
        if next == self.document {
            debug!("Mutation left the document unchanged");
            return self.snapshot();
        }

        self.document = next;
        self.score = scoring::score(&self.document);
        self.updated_at = Utc::now();
        debug!("Document updated, score now {}", self.score.score);

        match encode_document(&self.document) {
            Ok(blob) => self.writes.push(DOCUMENT_KEY, blob),
            Err(e) => warn!("Skipping persist, document failed to encode: {e}"),
        }

        self.snapshot()
    }

    pub fn set_preferences(&mut self, preferences: RenderPreferences) -> RenderPreferences {
        if preferences != self.preferences {
            self.preferences = preferences;
            persist_preferences(&self.writes, &self.preferences);
        }
        self.preferences.clone()
    }

    /// Renders with the stored preferences, optionally overridden per call.
    pub fn render(
        &self,
        template: Option<TemplateId>,
        accent_color: Option<&str>,
    ) -> RenderedLayout {
        render::render(
            &self.document,
            template.unwrap_or(self.preferences.template_id),
            accent_color.unwrap_or(&self.preferences.accent_color),
        )
    }
}

//! Panel rendering boundary
//!
//! The match controller hands each finished phase to a [`PanelRenderer`]
//! and waits for it before resolving the next phase. Renderers may fail;
//! the controller absorbs the failure and keeps the text description.

pub mod client;
pub mod prompt;

pub use client::ImageClient;
pub use prompt::build_panel_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::StageDefinition;
use crate::combat::{CombatantState, PhaseOutcome};
use crate::core::error::Result;

/// Opaque reference to a produced panel (data URI, URL, path...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelArtifact(pub String);

impl PanelArtifact {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything a renderer needs to draw one phase
#[derive(Debug, Clone, Copy)]
pub struct PanelRequest<'a> {
    /// Post-phase state of side 1
    pub p1: &'a CombatantState,
    /// Post-phase state of side 2
    pub p2: &'a CombatantState,
    pub stage: &'a StageDefinition,
    pub outcome: &'a PhaseOutcome,
}

/// Trait for anything that turns a phase outcome into a visual artifact
#[async_trait]
pub trait PanelRenderer: Send + Sync {
    /// Render one phase
    ///
    /// `Ok(None)` means the renderer ran but produced nothing usable.
    async fn render(&self, request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>>;
}

/// Renderer that never produces artwork, for headless and offline play
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

#[async_trait]
impl PanelRenderer for NullRenderer {
    async fn render(&self, _request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        Ok(None)
    }
}

#[async_trait]
impl<T: PanelRenderer + ?Sized> PanelRenderer for Box<T> {
    async fn render(&self, request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        (**self).render(request).await
    }
}

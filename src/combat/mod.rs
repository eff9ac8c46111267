//! Turn resolution engine and its data model

pub mod action;
pub mod combatant;
pub mod constants;
pub mod narration;
pub mod outcome;
pub mod resolution;

pub use action::ActionChoice;
pub use combatant::CombatantState;
pub use outcome::{HitKind, PhaseEvent, PhaseOutcome, PhaseResolution};
pub use resolution::{resolve_phase, resolve_phase_with_flavor};

//! Battle stages and their hazard modifiers

use crate::combat::constants::{
    BASE_JUMP_DISTANCE, DRAIN_ENERGY, EDGE_SPLAT_DAMAGE, HIGH_JUMP_DISTANCE, SKILL_SURCHARGE,
    STICKY_MOVE_COST, WIND_PUSH,
};
use crate::core::error::{ClashError, Result};
use serde::{Deserialize, Serialize};

/// The single mechanical modifier a stage can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hazard {
    None,
    WindPushRight,
    EdgeDamage,
    HighJump,
    StickyMove,
    SkillSurcharge,
    EnergyDrain,
}

/// Numeric knobs a hazard applies during phase resolution
///
/// Every field is zero (or the base value) except the ones the hazard
/// changes, so the engine reads the table instead of branching on tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardModifiers {
    /// Cells travelled by a jump
    pub jump_distance: i32,
    /// Energy paid per forward/backward move
    pub move_cost: i32,
    /// Extra energy paid on top of a skill's cost
    pub skill_surcharge: i32,
    /// Energy both sides lose before anything else happens
    pub energy_drain: i32,
    /// Cells both sides are pushed toward the high end after movement
    pub push: i32,
    /// Extra damage for a hit side that ends on a grid boundary
    pub edge_damage: i32,
}

const NO_MODIFIERS: HazardModifiers = HazardModifiers {
    jump_distance: BASE_JUMP_DISTANCE,
    move_cost: 0,
    skill_surcharge: 0,
    energy_drain: 0,
    push: 0,
    edge_damage: 0,
};

impl Hazard {
    pub fn modifiers(self) -> HazardModifiers {
        match self {
            Hazard::None => NO_MODIFIERS,
            Hazard::WindPushRight => HazardModifiers { push: WIND_PUSH, ..NO_MODIFIERS },
            Hazard::EdgeDamage => HazardModifiers { edge_damage: EDGE_SPLAT_DAMAGE, ..NO_MODIFIERS },
            Hazard::HighJump => HazardModifiers { jump_distance: HIGH_JUMP_DISTANCE, ..NO_MODIFIERS },
            Hazard::StickyMove => HazardModifiers { move_cost: STICKY_MOVE_COST, ..NO_MODIFIERS },
            Hazard::SkillSurcharge => HazardModifiers { skill_surcharge: SKILL_SURCHARGE, ..NO_MODIFIERS },
            Hazard::EnergyDrain => HazardModifiers { energy_drain: DRAIN_ENERGY, ..NO_MODIFIERS },
        }
    }
}

/// An immutable battle stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Display text for the hazard, may be flavor only
    pub hazard_label: &'static str,
    /// Scenery text handed to the panel renderer
    pub visual_prompt: &'static str,
    pub hazard: Hazard,
}

pub static STAGES: [StageDefinition; 9] = [
    StageDefinition {
        id: "s1",
        name: "Neo-Tokyo Ruins",
        description: "A crumbling cityscape where concrete meets neon. Standard fighting ground.",
        hazard_label: "None",
        visual_prompt: "ruined cyberpunk city street, broken concrete, neon signs flickering, manga background",
        hazard: Hazard::None,
    },
    StageDefinition {
        id: "s2",
        name: "The Midnight Train",
        description: "Roof of a speeding train. High speed background.",
        hazard_label: "Wind Pressure",
        visual_prompt: "top of a moving train, speed lines in background, moon in sky, dynamic perspective",
        // The label is flavor; the train roof plays like a plain stage
        hazard: Hazard::None,
    },
    StageDefinition {
        id: "s3",
        name: "Silent Dojo",
        description: "A traditional dojo with tatami mats. Serene but tense.",
        hazard_label: "None",
        visual_prompt: "traditional japanese dojo interior, tatami mats, torn shoji screens, dramatic shadows",
        hazard: Hazard::None,
    },
    StageDefinition {
        id: "s4",
        name: "Gale Force Canyon",
        description: "A narrow bridge in a windy canyon. The wind pushes fighters to the right.",
        hazard_label: "Strong Wind (Pushes Right)",
        visual_prompt: "narrow stone bridge over canyon, wind lines, swirling leaves, dramatic height",
        hazard: Hazard::WindPushRight,
    },
    StageDefinition {
        id: "s5",
        name: "Crystal Cavern",
        description: "A cave full of sharp crystals. Hitting the walls causes extra damage.",
        hazard_label: "Spiked Walls (Edge Damage)",
        visual_prompt: "underground cave, glowing sharp crystals, jagged rocks, claustrophobic",
        hazard: Hazard::EdgeDamage,
    },
    StageDefinition {
        id: "s6",
        name: "Zero-G Station",
        description: "A space station with fluctuating gravity. Jumps travel further.",
        hazard_label: "Low Gravity (High Jump)",
        visual_prompt: "sci-fi space station corridor, floating debris, stars outside window, zero gravity",
        hazard: Hazard::HighJump,
    },
    StageDefinition {
        id: "s7",
        name: "Mangaka Desk",
        description: "Fight on a giant drawing desk amidst oversized pens and rulers. Ink spills make movement costly.",
        hazard_label: "Sticky Ink (Move Cost +5)",
        visual_prompt: "giant manga drawing desk, oversized pens, rulers, ink bottles, paper texture background, surreal perspective",
        hazard: Hazard::StickyMove,
    },
    StageDefinition {
        id: "s8",
        name: "Neon Rain District",
        description: "A cyberpunk slum under constant acid rain. The moisture interferes with tech and skills.",
        hazard_label: "Short Circuit (Skill Cost +10)",
        visual_prompt: "cyberpunk slums, heavy rain, neon reflections on wet ground, wires sparking, gloomy atmosphere",
        hazard: Hazard::SkillSurcharge,
    },
    StageDefinition {
        id: "s9",
        name: "Spirit Torii Path",
        description: "A mystical path of infinite Torii gates. The spirits drain your energy slowly.",
        hazard_label: "Spirit Drain (-5 Energy/Turn)",
        visual_prompt: "endless path of red torii gates, floating spirit orbs, mist, mysterious forest, anime background",
        hazard: Hazard::EnergyDrain,
    },
];

/// Look up a stage by id
pub fn find_stage(id: &str) -> Result<&'static StageDefinition> {
    STAGES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ClashError::UnknownStage(id.to_string()))
}

//! Selectable fighter roster

use crate::core::error::{ClashError, Result};
use serde::Serialize;

/// An immutable fighter template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FighterDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_hp: i32,
    pub max_energy: i32,
    pub skill_name: &'static str,
    pub skill_cost: i32,
    /// Palette tag for presentation layers
    pub color: &'static str,
    /// Appearance text handed to the panel renderer
    pub avatar_prompt: &'static str,
}

pub static FIGHTERS: [FighterDefinition; 9] = [
    FighterDefinition {
        id: "c1",
        name: "Kenshiro \"Iron Fist\"",
        description: "A wandering martial artist searching for the ultimate truth. Uses a barrage of high-speed punches.",
        max_hp: 100,
        max_energy: 100,
        skill_name: "North Star Barrage",
        skill_cost: 40,
        color: "red",
        avatar_prompt: "muscular martial artist with scars, ripped shirt, determined look, manga style",
    },
    FighterDefinition {
        id: "c2",
        name: "Rei \"The Shadow\"",
        description: "A cybernetic ninja blending ancient techniques with future tech. Extremely fast and elusive.",
        max_hp: 85,
        max_energy: 100,
        skill_name: "Void Slash",
        skill_cost: 35,
        color: "purple",
        avatar_prompt: "sleek cybernetic ninja, glowing visor, smoke effects, speed lines, manga style",
    },
    FighterDefinition {
        id: "c3",
        name: "Baron \"Steam\" Gear",
        description: "A towering steampunk golem powered by a coal furnace heart. Slow but hits like a truck.",
        max_hp: 120,
        max_energy: 100,
        skill_name: "Inferno Vent",
        skill_cost: 50,
        color: "brass",
        avatar_prompt: "huge steampunk robot, steam venting, brass gears, glowing furnace chest, manga style",
    },
    FighterDefinition {
        id: "c4",
        name: "Hana \"Inkweaver\"",
        description: "A master calligrapher who wields a giant brush. Her attacks flow like liquid ink.",
        max_hp: 90,
        max_energy: 100,
        skill_name: "Dragon Stroke",
        skill_cost: 45,
        color: "navy",
        avatar_prompt: "female warrior in traditional hakama, wielding giant calligraphy brush, ink splashes, manga style",
    },
    FighterDefinition {
        id: "c5",
        name: "Unit 404 \"Glitch\"",
        description: "A corrupted manga character aware of the fourth wall. Moves with jagged, pixelated glitches.",
        max_hp: 95,
        max_energy: 100,
        skill_name: "Reality Crash",
        skill_cost: 50,
        color: "green",
        avatar_prompt: "distorted manga character, pixelated edges, static noise aura, creepy smile, glitch art style",
    },
    FighterDefinition {
        id: "c6",
        name: "Axel \"Riff\"",
        description: "A punk rocker using sound waves to shatter defenses. Loud, fast, and aggressive.",
        max_hp: 90,
        max_energy: 100,
        skill_name: "Amp Overload",
        skill_cost: 40,
        color: "pink",
        avatar_prompt: "punk rocker with mohawk, leather jacket, electric guitar weapon, sound waves visible, manga style",
    },
    FighterDefinition {
        id: "c7",
        name: "Miko \"Origami\" Fold",
        description: "A paper master who can fold reality. Fragile but versatile.",
        max_hp: 80,
        max_energy: 100,
        skill_name: "Thousand Paper Cuts",
        skill_cost: 35,
        color: "indigo",
        avatar_prompt: "mystical girl surrounded by floating origami cranes, paper charms, traditional japanese shrine maiden outfit, manga style",
    },
    FighterDefinition {
        id: "c8",
        name: "Ryu \"The Ink Demon\"",
        description: "A cursed warrior whose body is made of living ink. Can morph his limbs into weapons.",
        max_hp: 110,
        max_energy: 100,
        skill_name: "Abyssal Spikes",
        skill_cost: 45,
        color: "black",
        avatar_prompt: "demonic figure made of dripping black ink, glowing white eyes, claws extending, horror manga style",
    },
    FighterDefinition {
        id: "c9",
        name: "Kenji \"Drift\" King",
        description: "A delinquent biker who fights with a chain and a tire iron. Uses dirty tactics.",
        max_hp: 100,
        max_energy: 100,
        skill_name: "Chain Reaction",
        skill_cost: 40,
        color: "orange",
        avatar_prompt: "japanese delinquent \"yankee\" style, pompadour hair, long coat with kanji, holding a chain, manga style",
    },
];

/// Look up a fighter by id
pub fn find_fighter(id: &str) -> Result<&'static FighterDefinition> {
    FIGHTERS
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| ClashError::UnknownFighter(id.to_string()))
}

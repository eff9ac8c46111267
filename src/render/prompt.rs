//! Manga panel prompt construction

use crate::render::PanelRequest;

/// Build the image prompt for one phase
pub fn build_panel_prompt(request: &PanelRequest<'_>) -> String {
    format!(
        "Manga panel, black and white, high contrast.\n\
         Art Style: heavy ink lines, screentones (manga dots), dynamic action lines.\n\
         Add visible manga guide lines or grid lines for artistic effect.\n\
         Scene: {scene}.\n\
         Characters: Player 1 is {p1}. Player 2 is {p2}.\n\
         Action: {action}\n\
         Ensure dramatic perspective, speed lines, and Japanese sound effect text (katakana) overlaid.\n\
         Make it look like a professional comic book panel from a shonen manga.",
        scene = request.stage.visual_prompt,
        p1 = request.p1.fighter.avatar_prompt,
        p2 = request.p2.fighter.avatar_prompt,
        action = request.outcome.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_stage, FIGHTERS};
    use crate::combat::{resolve_phase, ActionChoice, CombatantState};

    #[test]
    fn test_prompt_includes_scene_cast_and_action() {
        let p1 = CombatantState::new(&FIGHTERS[0], 3, true);
        let p2 = CombatantState::new(&FIGHTERS[2], 3, false);
        let stage = find_stage("s3").unwrap();
        let r = resolve_phase(&p1, &p2, ActionChoice::Attack, ActionChoice::None, 1, stage);
        let request = PanelRequest {
            p1: &r.p1_next,
            p2: &r.p2_next,
            stage,
            outcome: &r.outcome,
        };

        let prompt = build_panel_prompt(&request);
        assert!(prompt.contains("tatami mats"));
        assert!(prompt.contains("muscular martial artist"));
        assert!(prompt.contains("huge steampunk robot"));
        assert!(prompt.contains("HITS Baron"));
    }
}

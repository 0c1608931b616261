//! Settings screen and the accessibility modal shared with permissions.

use super::{Item, Screen, ScreenContext, View, ViewAction};
use crate::controller::Command;
use crate::state::{AccessibilityPatch, AccessibilitySettings, ScreenId};

fn on_off(on: bool) -> &'static str {
    if on {
        "On"
    } else {
        "Off"
    }
}

pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let state = ctx.state;
        let a = state.accessibility;
        View::new(ScreenId::Settings, "Settings")
            .items(vec![
                Item::heading("User"),
                Item::note(format!(
                    "{} points - {} day streak",
                    state.points, state.streak
                )),
                Item::Gap,
                Item::stat("Text size", a.font_size),
                Item::stat("High contrast", on_off(a.high_contrast)),
                Item::stat("Voice guide", on_off(a.voice_guide)),
            ])
            .actions([
                ViewAction::new("Accessibility settings", Command::OpenAccessibility),
                ViewAction::go("Family sharing", ScreenId::Family),
                ViewAction::go("Subscription", ScreenId::Subscription),
            ])
    }
}

/// Buttons of the accessibility modal.
pub fn accessibility_actions(settings: &AccessibilitySettings) -> Vec<ViewAction> {
    let toggle_contrast = AccessibilityPatch {
        high_contrast: Some(!settings.high_contrast),
        ..Default::default()
    };
    let toggle_voice = AccessibilityPatch {
        voice_guide: Some(!settings.voice_guide),
        ..Default::default()
    };
    vec![
        ViewAction::new(
            format!("Text size: {}", settings.font_size),
            Command::SetAccessibility(settings.font_step(true)),
        )
        .with_adjust(
            Command::SetAccessibility(settings.font_step(false)),
            Command::SetAccessibility(settings.font_step(true)),
        ),
        ViewAction::new(
            format!("High contrast: {}", on_off(settings.high_contrast)),
            Command::SetAccessibility(toggle_contrast),
        ),
        ViewAction::new(
            format!("Voice guide: {}", on_off(settings.voice_guide)),
            Command::SetAccessibility(toggle_voice),
        ),
        ViewAction::new("Done", Command::CloseAccessibility),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_buttons_reflect_settings() {
        let settings = AccessibilitySettings {
            font_size: 20,
            high_contrast: true,
            voice_guide: false,
        };
        let actions = accessibility_actions(&settings);
        assert_eq!(actions[0].label, "Text size: 20");
        assert_eq!(actions[1].label, "High contrast: On");
        assert_eq!(
            actions[1].command,
            Command::SetAccessibility(AccessibilityPatch {
                high_contrast: Some(false),
                ..Default::default()
            })
        );
        assert_eq!(actions.last().map(|a| &a.command), Some(&Command::CloseAccessibility));
    }
}

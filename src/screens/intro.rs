//! First-run screens: splash, onboarding pager and permissions.

use super::{Body, Item, Screen, ScreenContext, View, ViewAction};
use crate::controller::Command;
use crate::state::screen::LAST_ONBOARDING_STEP;
use crate::state::ScreenId;
use indoc::indoc;

/// Block-letter mark shown above the brand when the terminal is tall enough.
pub const LOGO: &str = indoc! {"
    ┏┓ ┏━┓┏━┓
     ┃ ┃┃┃┃┃┃
    ╺┻╸┗━┛┗━┛
"};

pub const BRAND: &str = "Proud100";
pub const TAGLINE: &str = "Ten minutes a day, a stretch for your brain";

const ONBOARDING_PAGES: [(&str, &str); 3] = [
    (
        "Cognitive wellness",
        "Look after your brain and sharpen your thinking with drawing and mini-games.",
    ),
    (
        "A 10-minute routine",
        "Short, fun daily missions built from one drawing and one mini-game.",
    ),
    (
        "Together with family",
        "Share your progress with family and swap messages of encouragement.",
    ),
];

pub struct SplashScreen;

impl Screen for SplashScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::Splash, BRAND).body(Body::Splash {
            brand: BRAND,
            tagline: TAGLINE,
        })
    }
}

pub struct OnboardingScreen;

impl Screen for OnboardingScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let step = ctx
            .active
            .state
            .as_onboarding()
            .map_or(0, |o| o.step)
            .min(LAST_ONBOARDING_STEP);
        let (heading, text) = ONBOARDING_PAGES[usize::from(step)];
        let label = if step < LAST_ONBOARDING_STEP {
            "Next"
        } else {
            "Get started"
        };

        View::new(ScreenId::Onboarding, "Welcome")
            .body(Body::Onboarding {
                step,
                pages: LAST_ONBOARDING_STEP + 1,
                heading,
                text,
            })
            .action(ViewAction::new(label, Command::AdvanceOnboarding))
    }
}

pub struct PermissionsScreen;

impl Screen for PermissionsScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::Permissions, "Check your settings")
            .items(vec![
                Item::status("Allow notifications", "Daily mission reminders (optional)", false),
                Item::status("Microphone access", "For family voice comments (optional)", false),
                Item::status("Accessibility", "Large text, high contrast and more", false),
            ])
            .actions([
                ViewAction::new("Accessibility settings", Command::OpenAccessibility),
                ViewAction::go("Start", ScreenId::Home),
            ])
    }
}

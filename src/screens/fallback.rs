//! Placeholder for screens that exist in navigation but have no view yet.

use super::{Body, Screen, ScreenContext, View, ViewAction};
use crate::state::ScreenId;

pub const FALLBACK_MESSAGE: &str = "This screen is still being built";

pub struct FallbackScreen(pub ScreenId);

impl Screen for FallbackScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(self.0, FALLBACK_MESSAGE)
            .subtitle(self.0.as_str())
            .back(ScreenId::Home)
            .body(Body::Fallback { screen: self.0 })
            .action(ViewAction::go("Home", ScreenId::Home))
    }
}

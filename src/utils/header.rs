//! Home header copy.

use crate::state::DailyProgress;

/// Title and subtitle shown at the top of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMessage {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Pick the home header for today's progress.
pub fn header_message(progress: DailyProgress) -> HeaderMessage {
    match (progress.drawing, progress.game) {
        (false, false) => HeaderMessage {
            title: "Start today's mission!",
            subtitle: "A drawing and a mini-game are waiting for you",
        },
        (true, false) => HeaderMessage {
            title: "Drawing done!",
            subtitle: "Now wake your brain up with a mini-game",
        },
        (false, true) => HeaderMessage {
            title: "Game done!",
            subtitle: "Let your creativity out with a drawing",
        },
        (true, true) => HeaderMessage {
            title: "Today's mission complete!",
            subtitle: "Let's look after your brain again tomorrow",
        },
    }
}

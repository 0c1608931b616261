//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use proud100::controller::{Command, Controller, ControllerSettings, Outcome};
use proud100::state::ScreenId;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Fixed "today" so calendar output is stable.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
}

/// A controller on the splash screen with default timers.
pub fn fresh() -> (Controller, Instant) {
    let t0 = Instant::now();
    let controller = Controller::new(ControllerSettings::default(), t0, today());
    (controller, t0)
}

/// A controller already on `screen`.
pub fn at(screen: ScreenId) -> Controller {
    let settings = ControllerSettings {
        start_screen: Some(screen),
        ..Default::default()
    };
    Controller::new(settings, Instant::now(), today())
}

/// Dispatch and assert the command was accepted.
pub fn ok(controller: &mut Controller, command: Command) -> Outcome {
    let outcome = controller.dispatch(command.clone());
    assert_ne!(outcome, Outcome::Ignored, "{:?} was ignored on {}", command, controller.screen());
    outcome
}

/// Press the button whose label contains `label`.
pub fn press(controller: &mut Controller, label: &str) -> Outcome {
    let view = controller.view();
    let action = view
        .actions
        .iter()
        .find(|a| a.label.contains(label))
        .unwrap_or_else(|| panic!("no button {:?} on {}", label, controller.screen()))
        .clone();
    assert!(action.enabled, "button {:?} is disabled", label);
    ok(controller, action.command)
}

pub fn seconds(n: u64) -> Duration {
    Duration::from_secs(n)
}

/// Render `draw` on an in-memory terminal and return the screen text.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

//! Every screen renders on an in-memory terminal without panicking.

mod common;

use common::{at, ok, render_text};
use proud100::controller::{Command, Controller};
use proud100::keymap::Keymap;
use proud100::state::ScreenId;
use proud100::styles::{init_theme, ThemeType};
use proud100::ui::{self, RenderContext};
use proud100::widgets::ToastManager;
use std::time::Instant;

fn draw(controller: &Controller, toasts: &ToastManager, help: bool, size: (u16, u16)) -> String {
    let view = controller.view();
    let keymap = Keymap::default();
    let ctx = RenderContext {
        view: &view,
        focus: controller.active().focus,
        state: controller.state(),
        keymap: &keymap,
        toasts,
        show_help: help,
        config_path: "/tmp/proud100/config.toml",
    };
    render_text(size.0, size.1, |frame| ui::render(frame, &ctx))
}

#[test]
fn every_screen_renders() {
    init_theme(ThemeType::Dark);
    let toasts = ToastManager::new();
    for id in ScreenId::ALL {
        let controller = at(id);
        let text = draw(&controller, &toasts, false, (100, 40));
        let view = controller.view();
        if id != ScreenId::Splash {
            assert!(text.contains(&view.title), "{} title missing", id);
        }
        if let Some(first) = view.actions.first() {
            assert!(text.contains(&first.label), "{} first button missing", id);
        }
    }
}

#[test]
fn every_screen_survives_a_tiny_terminal() {
    let toasts = ToastManager::new();
    for id in ScreenId::ALL {
        let controller = at(id);
        draw(&controller, &toasts, false, (20, 6));
        draw(&controller, &toasts, true, (1, 1));
    }
}

#[test]
fn splash_shows_brand() {
    let toasts = ToastManager::new();
    let text = draw(&at(ScreenId::Splash), &toasts, false, (80, 24));
    assert!(text.contains("Proud100"));
    assert!(text.contains("╺┻╸┗━┛┗━┛"));
}

#[test]
fn fallback_screens_are_marked() {
    let toasts = ToastManager::new();
    for id in [ScreenId::Family, ScreenId::Subscription] {
        let text = draw(&at(id), &toasts, false, (80, 24));
        assert!(text.contains("This screen is still being built"));
    }
}

#[test]
fn accessibility_dialog_renders_over_settings() {
    let toasts = ToastManager::new();
    let mut controller = at(ScreenId::Settings);
    ok(&mut controller, Command::OpenAccessibility);
    let text = draw(&controller, &toasts, false, (100, 40));
    assert!(text.contains("Accessibility settings"));
    assert!(text.contains("Text size: 18"));
    assert!(text.contains("High contrast: Off"));
}

#[test]
fn nav_bar_only_on_top_level_screens() {
    let toasts = ToastManager::new();
    let home = draw(&at(ScreenId::Home), &toasts, false, (100, 40));
    assert!(home.contains("1 Home"));
    let canvas = draw(&at(ScreenId::DrawingCanvas), &toasts, false, (100, 40));
    assert!(!canvas.contains("1 Home"));
}

#[test]
fn help_and_toast_overlays() {
    let mut toasts = ToastManager::new();
    toasts.success("Purchased Emotion Art", Instant::now());
    let text = draw(&at(ScreenId::PremiumPack), &toasts, true, (100, 40));
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Purchased Emotion Art"));
}

#[test]
fn no_color_theme_renders() {
    init_theme(ThemeType::NoColor);
    let toasts = ToastManager::new();
    let text = draw(&at(ScreenId::GamePlay), &toasts, false, (100, 40));
    assert!(text.contains("Score"));
    init_theme(ThemeType::Dark);
}

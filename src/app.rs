//! Event loop and key handling.
//!
//! [`Session`] holds everything except the terminal: the controller, the
//! loaded config, toasts and the help flag. Keys become [`Action`]s through
//! the keymap, actions become [`Intent`]s through [`resolve`], and commands
//! go to the controller. [`App`] adds the terminal and the 250ms loop.

use crate::catalog::{PackKind, PurchaseOutcome};
use crate::components::nav_target;
use crate::config::Config;
use crate::controller::{Command, Controller, ControllerSettings, Outcome, TimerEvent};
use crate::keymap::Action;
use crate::screens::{Body, View};
use crate::state::{ScreenId, MAX_HEARTS};
use crate::styles::init_theme;
use crate::tui::Tui;
use crate::ui::{self, RenderContext};
use crate::widgets::ToastManager;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Input poll timeout; also the timer resolution.
const TICK_RATE: Duration = Duration::from_millis(250);

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Command(Command),
    ToggleHelp,
    Quit,
    /// Nothing to do on this screen.
    Nothing,
}

fn focused(view: &View, focus: usize) -> Option<&crate::screens::ViewAction> {
    view.actions.get(focus).filter(|a| a.enabled)
}

fn confirm(view: &View, focus: usize) -> Intent {
    focused(view, focus)
        .map(|a| Intent::Command(a.command.clone()))
        .unwrap_or(Intent::Nothing)
}

fn adjust(view: &View, focus: usize, increase: bool) -> Intent {
    focused(view, focus)
        .and_then(|a| a.adjust.clone())
        .map(|(down, up)| Intent::Command(if increase { up } else { down }))
        .unwrap_or(Intent::Nothing)
}

/// Map an action to an intent for the current view.
///
/// On the canvas the movement keys drive the pen; elsewhere up/down move
/// focus and left/right adjust the focused value. The open accessibility
/// dialog captures everything except quit and help.
pub fn resolve(action: Action, view: &View, focus: usize) -> Intent {
    let modal = view.overlay.is_some();
    let canvas = !modal && matches!(view.body, Body::Canvas { .. });
    let pen = |dx, dy| Intent::Command(Command::MovePen { dx, dy });

    match action {
        Action::Quit => Intent::Quit,
        Action::Help => Intent::ToggleHelp,

        Action::Back if modal => Intent::Command(Command::CloseAccessibility),
        Action::Back => view
            .back
            .map(|to| Intent::Command(Command::Navigate(to)))
            .unwrap_or(Intent::Nothing),

        Action::Confirm => confirm(view, focus),
        Action::Toggle if canvas => Intent::Command(Command::TogglePen),
        Action::Toggle => confirm(view, focus),
        Action::Clear if canvas => Intent::Command(Command::ClearCanvas),
        Action::Clear => Intent::Nothing,

        Action::MoveUp if canvas => pen(0, -1),
        Action::MoveDown if canvas => pen(0, 1),
        Action::MoveLeft if canvas => pen(-1, 0),
        Action::MoveRight if canvas => pen(1, 0),
        Action::MoveUp | Action::PrevTab => Intent::Command(Command::FocusPrev),
        Action::MoveDown | Action::NextTab => Intent::Command(Command::FocusNext),
        Action::MoveLeft => adjust(view, focus, false),
        Action::MoveRight => adjust(view, focus, true),

        Action::NavHome
        | Action::NavDrawing
        | Action::NavGames
        | Action::NavReport
        | Action::NavSettings => {
            if view.nav_bar && !modal {
                nav_target(action)
                    .map(|to| Intent::Command(Command::Navigate(to)))
                    .unwrap_or(Intent::Nothing)
            } else {
                Intent::Nothing
            }
        }
    }
}

/// Everything but the terminal.
pub struct Session {
    controller: Controller,
    config: Config,
    config_path: PathBuf,
    no_color: bool,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl Session {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        start_screen: Option<ScreenId>,
        no_color: bool,
        now: Instant,
    ) -> Self {
        let settings = ControllerSettings {
            splash_delay: config.timers.splash_delay(),
            heart_regen_interval: config.timers.heart_regen_interval(),
            accessibility: config.accessibility,
            start_screen,
        };
        let controller = Controller::new(settings, now, Local::now().date_naive());

        let mut toasts = ToastManager::new();
        let invalid = config.keymap.invalid_overrides();
        for binding in &invalid {
            warn!(key = %binding.key, action = ?binding.action, "ignoring invalid key override");
        }
        if !invalid.is_empty() {
            toasts.warning(
                format!("{} key override(s) could not be parsed", invalid.len()),
                now,
            );
        }

        Self {
            controller,
            config,
            config_path,
            no_color,
            toasts,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        if let Event::Key(key) = event {
            self.handle_key(key, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.show_help {
            // Any key closes help
            self.show_help = false;
            return;
        }
        let Some(action) = self.config.keymap.get_action(key.code, key.modifiers) else {
            return;
        };
        let view = self.controller.view();
        match resolve(action, &view, self.controller.active().focus) {
            Intent::Command(command) => self.apply(command, now),
            Intent::ToggleHelp => self.show_help = true,
            Intent::Quit => self.should_quit = true,
            Intent::Nothing => {}
        }
    }

    /// Send a command to the controller and react to the outcome.
    pub fn apply(&mut self, command: Command, now: Instant) {
        let outcome = self.controller.dispatch(command.clone());
        match (&command, outcome) {
            (Command::Purchase { kind, id }, Outcome::Purchase(result)) => {
                self.purchase_toast(*kind, id, result, now);
            }
            (Command::SetAccessibility(_), Outcome::Updated) => self.refresh_theme(),
            (Command::CloseAccessibility, Outcome::Updated) => self.save_accessibility(now),
            _ => {}
        }
    }

    /// Fire timers and expire toasts.
    pub fn on_tick(&mut self, now: Instant) {
        for event in self.controller.tick(now) {
            if let TimerEvent::HeartsRegenerated { hearts } = event {
                self.toasts
                    .info(format!("A heart came back ({}/{})", hearts, MAX_HEARTS), now);
            }
        }
        self.toasts.tick(now);
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }

    fn purchase_toast(&mut self, kind: PackKind, id: &str, result: PurchaseOutcome, now: Instant) {
        let state = self.controller.state();
        let name = match kind {
            PackKind::Drawing => state.drawing_packs.iter().find(|p| p.id == id).map(|p| p.name.clone()),
            PackKind::Game => state.game_packs.iter().find(|p| p.id == id).map(|p| p.name.clone()),
        }
        .unwrap_or_else(|| id.to_string());
        match result {
            PurchaseOutcome::Purchased => self.toasts.success(format!("Purchased {}", name), now),
            PurchaseOutcome::AlreadyOwned => {
                self.toasts.info(format!("{} is already yours", name), now)
            }
            PurchaseOutcome::NotFound => self.toasts.error(format!("No pack named {}", id), now),
        }
    }

    fn refresh_theme(&self) {
        let mut config = self.config.clone();
        config.accessibility = self.controller.state().accessibility;
        init_theme(config.effective_theme(self.no_color));
    }

    /// Write the accessibility settings back to the config file.
    fn save_accessibility(&mut self, now: Instant) {
        self.config.accessibility = self.controller.state().accessibility;
        init_theme(self.config.effective_theme(self.no_color));
        match self.config.save(&self.config_path) {
            Ok(()) => {
                info!(path = ?self.config_path, "accessibility settings saved");
                self.toasts.success("Settings saved", now);
            }
            Err(e) => {
                warn!(error = %e, "failed to save accessibility settings");
                self.toasts.error("Could not save settings", now);
            }
        }
    }
}

/// The running TUI.
pub struct App {
    session: Session,
    tui: Tui,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        start_screen: Option<ScreenId>,
        no_color: bool,
    ) -> Result<Self> {
        let tui = Tui::new()?;
        let session = Session::new(config, config_path, start_screen, no_color, Instant::now());
        Ok(Self { session, tui })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            self.draw()?;

            if self.session.should_quit() {
                break;
            }

            if let Some(event) = self.tui.poll_event(TICK_RATE)? {
                self.session.handle_event(event, Instant::now());
            }
            self.session.on_tick(Instant::now());
        }

        self.session.shutdown();
        self.tui.exit()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let view = session.controller.view();
        let config_path = session.config_path.display().to_string();
        let ctx = RenderContext {
            view: &view,
            focus: session.controller.active().focus,
            state: session.controller.state(),
            keymap: &session.config.keymap,
            toasts: &session.toasts,
            show_help: session.show_help,
            config_path: &config_path,
        };
        self.tui.terminal_mut().draw(|frame| ui::render(frame, &ctx))?;
        Ok(())
    }
}

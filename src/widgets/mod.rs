// Reusable UI widgets

pub mod calendar;
pub mod canvas;
pub mod card_grid;
pub mod menu;
pub mod toast;

pub use calendar::CalendarWidget;
pub use canvas::CanvasWidget;
pub use card_grid::CardGrid;
pub use menu::{Menu, MenuItem, MenuState};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};

// Screen chrome shared by every view: header, footer, nav bar and overlays

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod nav_bar;
pub mod popup;

pub use footer::Footer;
pub use header::{Header, HEADER_HEIGHT};
pub use help_overlay::HelpOverlay;
pub use nav_bar::{nav_target, NavBar};
pub use popup::Popup;

pub mod calendar;
pub mod header;
pub mod layout;
pub mod mondrian;
pub mod path;
pub mod time;

pub use calendar::MonthGrid;
pub use header::{header_message, HeaderMessage};
pub use layout::{center_popup, create_screen_layout};
pub use mondrian::{decorative_style, PieceStyle};
pub use path::{get_config_dir, get_config_path, get_log_dir, LOG_FILE};
pub use time::format_time;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Center a popup of the given percentage size inside `area`.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Split a screen into header, body, optional nav bar and footer.
///
/// Returns `[header, body, nav, footer]`; `nav` has zero height when hidden.
pub fn create_screen_layout(area: Rect, header_height: u16, with_nav: bool) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(if with_nav { 3 } else { 0 }),
            Constraint::Length(2),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

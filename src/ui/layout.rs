use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: brand and level (3 rows)
/// - Tabs bar (3 rows)
/// - Content: the active tab
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        tabs_area: chunks[1],
        content_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Split the status tab: counters on top, level gauge, category chart, reset hint
pub fn create_status_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Level / XP counters
            Constraint::Length(3), // Progress gauge
            Constraint::Min(8),    // Category chart
            Constraint::Length(3), // Reset warning
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.content_area.height, 43);
    }

    #[test]
    fn test_create_status_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let [counters, gauge, chart, reset] = create_status_layout(area);
        assert_eq!(counters.height, 5);
        assert_eq!(gauge.height, 3);
        assert_eq!(reset.height, 3);
        assert_eq!(chart.height, 29);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 14);
    }
}

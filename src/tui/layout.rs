use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Area of the help overlay: `percent_x` by `percent_y` of `area`, centred in it.
pub fn overlay_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale =
        |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Status panel, tab bar, and view body, top to bottom.
pub fn dashboard_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_centred() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(overlay_rect(60, 70, area), Rect::new(20, 6, 60, 28));
        assert_eq!(overlay_rect(150, 100, area), area);
    }

    #[test]
    fn body_takes_what_the_header_leaves() {
        let (status, tabs, body) = dashboard_chunks(Rect::new(0, 0, 80, 30));
        assert_eq!(status.height, 5);
        assert_eq!(tabs.height, 3);
        assert_eq!(body.height, 22);
    }
}

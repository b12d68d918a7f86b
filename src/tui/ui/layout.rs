use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

/// `area` shrunk by a one-cell border on every side.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints(margins(percent_y))
        .areas(r);
    let [_, area, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(margins(percent_x))
        .areas(middle);
    area
}

fn margins(percent: u16) -> [Constraint; 3] {
    let side = (100 - percent.min(100)) / 2;
    [Constraint::Percentage(side), Constraint::Percentage(percent), Constraint::Percentage(side)]
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Dashboard body: employees on the left, teams over the activity log on the right.
pub struct DashboardLayout {
    pub title: Rect,
    pub employees: Rect,
    pub teams: Rect,
    pub activity: Rect,
}

pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// On narrow terminals (<100 cols) the three panels stack vertically.
pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);
    let title = rows[0];
    let body = rows[1];

    if is_single_column(body) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(body);
        return DashboardLayout {
            title,
            employees: chunks[0],
            teams: chunks[1],
            activity: chunks[2],
        };
    }

    // 8 of 12 columns for employees, like the web grid
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(8, 12), Constraint::Ratio(4, 12)])
        .split(body);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    DashboardLayout {
        title,
        employees: columns[0],
        teams: right[0],
        activity: right[1],
    }
}

pub fn is_single_column(area: Rect) -> bool {
    area.width < 100
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

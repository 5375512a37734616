use ratatui::prelude::*;

use crate::app::App;

mod case_list;
mod group_list;
mod status_bar;
pub mod theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let [group_area, case_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .areas(main_area);

    group_list::draw(frame, app, group_area);
    case_list::draw(frame, app, case_area);
    status_bar::draw(frame, app, status_area);
}

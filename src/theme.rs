use crate::events::Category;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const MONTH_TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

/// Lead/trail days belonging to the adjacent months.
pub(crate) const ADJACENT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const EVENT_TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MUTED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const MEETING_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

pub(crate) const DEADLINE_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

pub(crate) const MILESTONE_STYLE: Style = BASE_STYLE.fg(Color::LightGreen);

pub(crate) fn category_style(category: Category) -> Style {
    match category {
        Category::Meeting => MEETING_STYLE,
        Category::Deadline => DEADLINE_STYLE,
        Category::Milestone => MILESTONE_STYLE,
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

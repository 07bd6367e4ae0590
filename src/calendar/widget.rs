use super::grid::DayCell;
use super::pager::MonthPager;
use super::EventSource;
use crate::theme::{
    category_style, ADJACENT_STYLE, MONTH_TITLE_STYLE, SELECTED_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::marker::PhantomData;
use time::Date;

const DAYS_IN_WEEK: usize = 7;

/// Columns per day of week: a four-column day number plus one marker column.
const DAY_WIDTH: u16 = 5;

pub(crate) const GRID_WIDTH: u16 = DAY_WIDTH * 7;

static HEADER: &str = " Su   Mo   Tu   We   Th   Fr   Sa  ";

/// Renders the pager's current month: a title line, the weekday header, and
/// one line per week.  Today is bracketed, the selected day is highlighted,
/// adjacent-month padding is dimmed, and days with events carry a marker in
/// the color of their first event's category.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<S> {
    _data: PhantomData<S>,
}

impl<S> MonthGrid<S> {
    pub(crate) fn new() -> MonthGrid<S> {
        MonthGrid { _data: PhantomData }
    }
}

impl<S: EventSource> StatefulWidget for MonthGrid<S> {
    type State = MonthPager<S>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let view = state.view();
        let selected = state.selected();
        let mut lines = Vec::with_capacity(8);
        lines.push(Line::styled(view.title(), MONTH_TITLE_STYLE).centered());
        lines.push(Line::styled(HEADER, WEEKDAY_STYLE));
        let mut row: [Option<DayCell<'_>>; DAYS_IN_WEEK] = [None; DAYS_IN_WEEK];
        let mut filled = false;
        for cell in view.days() {
            let i = usize::from(cell.date.weekday().number_days_from_sunday());
            if i == 0 && filled {
                lines.push(week_line(&row, selected));
                row = [None; DAYS_IN_WEEK];
            }
            row[i] = Some(*cell);
            filled = true;
        }
        if filled {
            lines.push(week_line(&row, selected));
        }
        let area = Rect {
            width: area.width.min(GRID_WIDTH),
            ..area
        };
        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}

fn week_line(row: &[Option<DayCell<'_>>; DAYS_IN_WEEK], selected: Date) -> Line<'static> {
    let mut spans = Vec::with_capacity(DAYS_IN_WEEK * 2);
    for slot in row {
        if let Some(cell) = slot {
            let number = if cell.is_today {
                format!("[{:2}]", cell.day())
            } else {
                format!(" {:2} ", cell.day())
            };
            let style = if cell.is_selected(selected) {
                SELECTED_STYLE
            } else if cell.is_today {
                TODAY_STYLE
            } else if !cell.in_month {
                ADJACENT_STYLE
            } else {
                Style::new()
            };
            spans.push(Span::styled(number, style));
            spans.push(if let Some(ev) = cell.events.first() {
                Span::styled("•", category_style(ev.category))
            } else {
                Span::raw(" ")
            });
        } else {
            // Only possible at the very edge of representable time, where
            // lead/trail padding comes up short.
            spans.push(Span::raw("     "));
        }
    }
    Line::from(spans)
}

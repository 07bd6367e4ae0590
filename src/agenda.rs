use crate::events::Event;
use crate::theme::{category_style, EVENT_TITLE_STYLE, MUTED_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use time::Date;

/// The detail pane for the selected day: one card per event with its
/// category badge, time range, location, project tag, and attendees.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Agenda<'a> {
    date: Date,
    events: &'a [Event],
}

impl<'a> Agenda<'a> {
    pub(crate) fn new(date: Date, events: &'a [Event]) -> Agenda<'a> {
        Agenda { date, events }
    }

    fn title(&self) -> String {
        format!(
            " Events for {} {}, {} ",
            self.date.month(),
            self.date.day(),
            self.date.year()
        )
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if self.events.is_empty() {
            return vec![Line::styled("No events scheduled.", MUTED_STYLE)];
        }
        let mut lines = Vec::new();
        for (i, ev) in self.events.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(vec![
                Span::styled(ev.title.as_str(), EVENT_TITLE_STYLE),
                Span::raw("  "),
                Span::styled(format!("[{}]", ev.category.label()), category_style(ev.category)),
            ]));
            lines.push(Line::styled(format!("  {}", ev.description), MUTED_STYLE));
            lines.push(Line::raw(format!("  {}", ev.time)));
            lines.push(Line::raw(format!("  {}", ev.location)));
            if let Some(project) = &ev.project {
                lines.push(Line::raw(format!("  #{project}")));
            }
            if !ev.attendees.is_empty() {
                lines.push(Line::styled(
                    format!("  {}", ev.attendees.join(", ")),
                    MUTED_STYLE,
                ));
            }
        }
        lines
    }
}

impl Widget for Agenda<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(self.lines());
        Paragraph::new(text)
            .block(Block::bordered().title(self.title()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBook;
    use crate::calendar::EventSource;
    use crate::sample::sample_events;
    use time::macros::date;

    #[test]
    fn test_title() {
        let agenda = Agenda::new(date!(2024 - 03 - 15), &[]);
        assert_eq!(agenda.title(), " Events for March 15, 2024 ");
    }

    #[test]
    fn test_lines_without_events() {
        let agenda = Agenda::new(date!(2024 - 03 - 20), &[]);
        let lines = agenda.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "No events scheduled.");
    }

    #[test]
    fn test_lines_with_events() {
        let book = EventBook::new(sample_events());
        let events = book.events_on(date!(2024 - 03 - 15));
        let agenda = Agenda::new(date!(2024 - 03 - 15), events);
        let rendered = agenda
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            [
                "Project Kickoff Meeting  [Meeting]",
                "  Initial meeting to discuss project goals and timeline",
                "  10:00 AM - 11:30 AM",
                "  Conference Room A",
                "  #Website Redesign",
                "  Sarah Wilson, Michael Chen, Emily Rodriguez",
                "",
                "Design Review  [Meeting]",
                "  Review of new website design concepts",
                "  2:00 PM - 3:00 PM",
                "  Design Studio",
                "  #Website Redesign",
                "  Sarah Wilson, David Kim",
            ]
        );
    }

    #[test]
    fn test_project_line_is_optional() {
        let mut events = sample_events();
        events.truncate(1);
        events[0].project = None;
        events[0].attendees.clear();
        let agenda = Agenda::new(date!(2024 - 03 - 15), &events);
        let rendered = agenda
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            [
                "Project Kickoff Meeting  [Meeting]",
                "  Initial meeting to discuss project goals and timeline",
                "  10:00 AM - 11:30 AM",
                "  Conference Room A",
            ]
        );
    }
}

use crate::agenda::Agenda;
use crate::calendar::{EventSource, MonthGrid, MonthPager, GRID_WIDTH};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<S> {
    pager: MonthPager<S>,
    state: AppState,
}

impl<S: EventSource> App<S> {
    pub(crate) fn new(pager: MonthPager<S>) -> App<S> {
        App {
            pager,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('l') | KeyCode::Right => self.pager.select_next_day().is_ok(),
                KeyCode::Char('h') | KeyCode::Left => self.pager.select_previous_day().is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.pager.select_next_week().is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.pager.select_previous_week().is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.pager.month_forwards().is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.pager.month_backwards().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.pager.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char(ch) => state.handle_input(JumpToInput::Char(ch)),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.state = AppState::Calendar;
                            self.pager.jump_to_date(date);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<S: EventSource> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let chunks = Layout::horizontal([Constraint::Length(GRID_WIDTH + 2), Constraint::Min(0)])
            .split(area);
        MonthGrid::new().render(chunks[0], buf, &mut self.pager);
        Agenda::new(self.pager.selected(), self.pager.selected_events()).render(chunks[1], buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBook;
    use crate::sample::sample_events;
    use time::macros::date;

    fn sample_app() -> App<EventBook> {
        App::new(MonthPager::new(
            date!(2024 - 03 - 15),
            EventBook::new(sample_events()),
        ))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
    }

    #[test]
    fn test_day_and_week_selection() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 16));
        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 23));
        assert!(app.handle_key(KeyCode::Char('h')));
        assert!(app.handle_key(KeyCode::Char('k')));
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 15));
    }

    #[test]
    fn test_month_paging_keeps_selection() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(app.pager.view().title(), "April 2024");
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 15));
        assert!(app.handle_key(KeyCode::Char('p')));
        assert!(app.handle_key(KeyCode::Char('p')));
        assert_eq!(app.pager.view().title(), "February 2024");
    }

    #[test]
    fn test_jump_to_date_flow() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        for ch in "2024-07-04".chars() {
            assert!(app.handle_key(KeyCode::Char(ch)));
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.pager.selected(), date!(2024 - 07 - 04));
        assert_eq!(app.pager.view().title(), "July 2024");
    }

    #[test]
    fn test_jump_dialog_cancels() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        assert!(app.handle_key(KeyCode::Char('2')));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 15));
    }

    #[test]
    fn test_help_dismisses_on_any_key() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_home_returns_to_today() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 15));
        assert_eq!(app.pager.view().title(), "March 2024");
    }

    #[test]
    fn test_unknown_key_is_invalid() {
        let mut app = sample_app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.pager.selected(), date!(2024 - 03 - 15));
    }
}

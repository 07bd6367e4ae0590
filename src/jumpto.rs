use crate::theme::{
    jumpto::{PLACEHOLDER_STYLE, READY_ENTER_STYLE},
    BASE_STYLE,
};
use crate::YMD_FMT;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::Date;

static PLACEHOLDER: &str = "YYYY-MM-DD";

const OUTER_WIDTH: u16 = 16;
const OUTER_HEIGHT: u16 = 8;

/// Modal date entry: the user types a `YYYY-MM-DD` date and confirms with
/// Enter; the unfilled tail of the pattern is shown dimmed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Go To Date ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    input: String,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn ready(&self) -> bool {
        self.input.len() == PLACEHOLDER.len()
    }

    fn to_text(&self) -> Text<'static> {
        let mut spans = vec![Span::styled(self.input.clone(), BASE_STYLE)];
        if !self.ready() {
            spans.push(Span::styled(
                &PLACEHOLDER[self.input.len()..],
                PLACEHOLDER_STYLE,
            ));
        }
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            Line::from(spans),
            Line::styled("", BASE_STYLE),
            Line::from(Span::styled(
                "[ENTER]",
                if self.ready() {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match input {
            JumpToInput::Char(ch)
                if (ch.is_ascii_digit() || ch == '-') && !self.ready() =>
            {
                self.input.push(ch);
                JumpToOutput::Ok
            }
            JumpToInput::Backspace if !self.input.is_empty() => {
                self.input.pop();
                JumpToOutput::Ok
            }
            JumpToInput::Enter if self.ready() => match Date::parse(&self.input, &YMD_FMT) {
                Ok(date) => JumpToOutput::Jump(date),
                Err(_) => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn type_in(state: &mut JumpToState, s: &str) {
        for ch in s.chars() {
            assert_eq!(state.handle_input(JumpToInput::Char(ch)), JumpToOutput::Ok);
        }
    }

    #[test]
    fn test_enter_valid_date() {
        let mut state = JumpToState::new();
        type_in(&mut state, "2024-03-15");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 03 - 15))
        );
    }

    #[test]
    fn test_enter_invalid_date() {
        let mut state = JumpToState::new();
        type_in(&mut state, "2024-13-01");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
    }

    #[test]
    fn test_enter_requires_complete_input() {
        let mut state = JumpToState::new();
        type_in(&mut state, "2024-03");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
    }

    #[test]
    fn test_backspace_then_retype() {
        let mut state = JumpToState::new();
        type_in(&mut state, "2024-03-19");
        assert_eq!(
            state.handle_input(JumpToInput::Backspace),
            JumpToOutput::Ok
        );
        type_in(&mut state, "7");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 03 - 17))
        );
    }

    #[test]
    fn test_rejects_letters_and_overflow() {
        let mut state = JumpToState::new();
        assert_eq!(
            state.handle_input(JumpToInput::Char('x')),
            JumpToOutput::Invalid
        );
        type_in(&mut state, "2024-03-15");
        assert_eq!(
            state.handle_input(JumpToInput::Char('9')),
            JumpToOutput::Invalid
        );
        assert_eq!(
            state.handle_input(JumpToInput::Backspace),
            JumpToOutput::Ok
        );
    }
}

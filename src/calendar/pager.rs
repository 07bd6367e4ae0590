use super::grid::{advance_month, MonthDirection, MonthOutOfRangeError, MonthView};
use super::EventSource;
use crate::events::Event;
use time::{Date, Duration};

/// The calendar's navigation state: the month currently on display and the
/// day currently selected.  Both change only through the methods below; the
/// views handed out by [`MonthPager::view`] are derived fresh each time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPager<S> {
    today: Date,
    reference: Date,
    selected: Date,
    source: S,
}

impl<S: EventSource> MonthPager<S> {
    pub(crate) fn new(today: Date, source: S) -> MonthPager<S> {
        MonthPager {
            today,
            reference: today,
            selected: today,
            source,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.reference = date;
        self.selected = date;
        self
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    pub(crate) fn view(&self) -> MonthView<'_> {
        MonthView::build(self.reference, self.today, &self.source)
    }

    pub(crate) fn selected_events(&self) -> &[Event] {
        self.source.events_on(self.selected)
    }

    /// Shows the next month.  The selection stays put, even if that leaves it
    /// outside the displayed grid.
    pub(crate) fn month_forwards(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.reference = advance_month(self.reference, MonthDirection::Forward)?;
        Ok(())
    }

    pub(crate) fn month_backwards(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.reference = advance_month(self.reference, MonthDirection::Backward)?;
        Ok(())
    }

    pub(crate) fn select_next_day(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.shift_selection(Duration::DAY)
    }

    pub(crate) fn select_previous_day(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.shift_selection(-Duration::DAY)
    }

    pub(crate) fn select_next_week(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.shift_selection(Duration::WEEK)
    }

    pub(crate) fn select_previous_week(&mut self) -> Result<(), MonthOutOfRangeError> {
        self.shift_selection(-Duration::WEEK)
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.reference = self.today;
        self.selected = self.today;
    }

    pub(crate) fn jump_to_date(&mut self, date: Date) {
        self.reference = date;
        self.selected = date;
    }

    // Moving the selection drags the displayed month along so the selected
    // day is always visible.
    fn shift_selection(&mut self, by: Duration) -> Result<(), MonthOutOfRangeError> {
        let target = self.selected.checked_add(by).ok_or(MonthOutOfRangeError)?;
        self.selected = target;
        self.reference = target;
        Ok(())
    }
}

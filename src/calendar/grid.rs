use super::EventSource;
use crate::events::Event;
use std::collections::VecDeque;
use std::iter::successors;
use thiserror::Error;
use time::{
    util::days_in_month,
    Date,
    Month::{December, January},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MonthDirection {
    Forward,
    Backward,
}

/// Returns a date in the month adjacent to `date`'s, keeping the day of the
/// month where it exists and clamping to the target month's last day
/// otherwise: January 31 forward is the last day of February.
pub(crate) fn advance_month(
    date: Date,
    direction: MonthDirection,
) -> Result<Date, MonthOutOfRangeError> {
    let (year, month) = match direction {
        MonthDirection::Forward => {
            let month = date.month().next();
            let year = date.year() + i32::from(month == January);
            (year, month)
        }
        MonthDirection::Backward => {
            let month = date.month().previous();
            let year = date.year() - i32::from(month == December);
            (year, month)
        }
    };
    let day = date.day().min(days_in_month(month, year));
    Date::from_calendar_date(year, month, day).map_err(|_| MonthOutOfRangeError)
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the edge of the calendar")]
pub(crate) struct MonthOutOfRangeError;

/// One day's slot in a month view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell<'a> {
    pub(crate) date: Date,
    /// Whether the cell belongs to the displayed month rather than the
    /// lead/trail padding from its neighbors.
    pub(crate) in_month: bool,
    pub(crate) is_today: bool,
    /// The events falling on this day, in the source's order.
    pub(crate) events: &'a [Event],
}

impl DayCell<'_> {
    pub(crate) fn is_selected(&self, selected: Date) -> bool {
        self.date == selected
    }

    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }
}

/// The cells of one displayed month: every day from the 1st through the last
/// day of the month, extended backwards to a Sunday and forwards to a
/// Saturday so week rows come out complete.  The whole sequence ascends one
/// day at a time with no gaps.
#[derive(Clone, Debug)]
pub(crate) struct MonthView<'a> {
    reference: Date,
    days: Vec<DayCell<'a>>,
}

impl<'a> MonthView<'a> {
    pub(crate) fn build<S: EventSource>(reference: Date, today: Date, source: &'a S) -> MonthView<'a> {
        let first = reference
            .replace_day(1)
            .expect("every month should have a first day");
        let last = reference
            .replace_day(days_in_month(reference.month(), reference.year()))
            .expect("every month should have a last day");
        let cell = |date: Date, in_month: bool| DayCell {
            date,
            in_month,
            is_today: date == today,
            events: source.events_on(date),
        };
        let lead_qty = usize::from(first.weekday().number_days_from_sunday());
        let trail_qty = usize::from(6 - last.weekday().number_days_from_sunday());
        let mut days = Vec::with_capacity(lead_qty + 31 + trail_qty);
        // Walking backwards from the 1st can come up short at the edge of
        // representable time; the view just starts later in the week then.
        let mut lead = VecDeque::with_capacity(lead_qty);
        for date in iter_days_before(first).take(lead_qty) {
            lead.push_front(cell(date, false));
        }
        days.extend(lead);
        days.extend(
            successors(Some(first), |&d| d.next_day())
                .take_while(|&d| d <= last)
                .map(|d| cell(d, true)),
        );
        days.extend(iter_days_after(last).take(trail_qty).map(|d| cell(d, false)));
        MonthView { reference, days }
    }

    /// Every displayed cell, lead and trail padding included.
    pub(crate) fn days(&self) -> &[DayCell<'a>] {
        &self.days
    }

    /// The cells of the displayed month itself.
    pub(crate) fn month_cells(&self) -> impl Iterator<Item = &DayCell<'a>> + '_ {
        self.days.iter().filter(|cell| cell.in_month)
    }

    pub(crate) fn title(&self) -> String {
        format!("{} {}", self.reference.month(), self.reference.year())
    }
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

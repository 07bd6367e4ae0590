mod grid;
mod pager;
mod widget;
pub(crate) use self::pager::MonthPager;
pub(crate) use self::widget::{MonthGrid, GRID_WIDTH};
use crate::events::Event;
use time::Date;

/// Where the calendar gets its events from.  `events_on` returns every event
/// falling on the given calendar day, in the order the source defines.
pub(crate) trait EventSource {
    fn events_on(&self, date: Date) -> &[Event];
}

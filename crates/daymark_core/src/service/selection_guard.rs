//! Eligibility rule for starting event entry on a date.

use crate::model::date::CalendarDate;

/// A date is eligible when it is `today` or later.
///
/// Past dates are not an error; callers simply ignore the click.
pub fn is_eligible(candidate: CalendarDate, today: CalendarDate) -> bool {
    candidate >= today
}

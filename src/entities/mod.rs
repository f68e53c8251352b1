//! Entity module - client-side view models of the records the API owns.
//! Each type mirrors one API resource and implements [`crate::api::Resource`].

pub mod department;
pub mod employee;
pub mod lenient;
pub mod shift_day;
pub mod shift_type;
pub mod shift_week;

pub use department::Department;
pub use employee::Employee;
pub use shift_day::{ShiftDay, ShiftDayDraft};
pub use shift_type::ShiftType;
pub use shift_week::{ShiftWeek, ShiftWeekDraft, ShiftWeekStatus};

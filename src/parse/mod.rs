pub mod calendar;
pub mod quick_add;

pub use quick_add::extract;

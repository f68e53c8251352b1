//! Framework-agnostic screen logic: state, validation and projections behind
//! every page. The Discord layer only renders what lives here.

pub mod colors;
pub mod dashboard;
pub mod forms;
pub mod screen;
pub mod search;
pub mod shell;
pub mod table;

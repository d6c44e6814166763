pub mod day;
pub mod grid;
pub mod view;

pub use day::DaySelector;
pub use grid::GridSelector;
pub use view::{CellState, GRID_YEARS, PeriodGridView, YEAR_GRID_YEARS};

//! Core plan generation for fitplan: pure formulas (BMI, daily calories,
//! water intake) and the table-driven workout/diet builder. No I/O, no
//! async; the web layer owns presentation.

mod catalog;
mod error;
mod formulas;
mod plan;
mod types;

pub use catalog::*;
pub use error::*;
pub use formulas::*;
pub use plan::*;
pub use types::*;

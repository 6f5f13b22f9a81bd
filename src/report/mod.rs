/*!
 * Report Module
 * Summary statistics and plain-text rendering of simulation runs
 */

mod render;
mod summary;

pub use render::{render_comparison, render_gantt, render_table};
pub use summary::{ProcessRow, SimulationReport};

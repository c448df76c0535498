//! CLI command implementations.

mod check;
mod explain;
mod plan;

pub use check::execute as check_execute;
pub use explain::execute as explain_execute;
pub use plan::execute as plan_execute;

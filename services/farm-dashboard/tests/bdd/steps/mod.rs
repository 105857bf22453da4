//! BDD step definitions for the farm dashboard

pub mod checker_steps;
pub mod pagination_steps;
pub mod sync_steps;
pub mod table_steps;

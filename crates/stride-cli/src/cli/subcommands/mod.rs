mod assignment;
mod plan;

pub use assignment::AssignmentCommands;
pub use plan::PlanCommands;

mod archive;
mod employee;
mod task;

pub use archive::ArchiveCommands;
pub use employee::EmployeeCommands;
pub use task::TaskCommands;

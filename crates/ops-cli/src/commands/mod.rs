pub mod archive;
pub mod calendar;
pub mod dispatch;
pub mod employee;
pub mod init;
pub mod shared;
pub mod task;

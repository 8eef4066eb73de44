pub mod assignment;
pub mod dispatch;
pub mod init;
pub mod plan;
pub mod schema;
pub mod shared;

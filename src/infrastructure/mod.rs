pub mod sqlite_repo;
pub mod sqlite_sessions;

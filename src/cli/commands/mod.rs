pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod history;
pub mod import;
pub mod init;
pub mod log;
pub mod scan;
pub mod status;
pub mod update;

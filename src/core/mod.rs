pub mod backup;
pub mod classifier;
pub mod classnames;
pub mod import;
pub mod log;
pub mod scanner;
pub mod status;

pub mod report;
pub mod uninstall;

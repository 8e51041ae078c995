pub mod alert_scheduler;
pub mod dependency_injection;
pub mod server;

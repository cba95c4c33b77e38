pub mod dependency_injection;
pub mod navigation;
pub mod server;

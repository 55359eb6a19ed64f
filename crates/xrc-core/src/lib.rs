pub mod config;
pub mod logging;

pub mod distributor;
pub mod expander;
pub mod input;
pub mod sink;

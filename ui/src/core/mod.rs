pub mod aggregate;
pub mod breakpoint;
pub mod config;
pub mod dataset;
pub mod format;
pub mod platform;
pub mod selection;
pub mod timing;

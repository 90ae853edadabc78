pub mod activity;
pub mod config;
pub mod summary;

pub use activity::*;
pub use config::*;
pub use summary::*;

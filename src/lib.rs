//! EchoPulse: reply sentiment, theme and narrative summarization
//!
//! The engine in [`analysis`] is pure and synchronous. [`source`] holds the offline helpers used
//! around the platform fetchers, and [`api`] / [`cli`] expose the engine over HTTP and the
//! command line.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod source;

#[cfg(test)]
mod errors_tests;

pub use analysis::categorize_replies;
pub use analysis::summarize_replies;
pub use analysis::AnalysisResult;
pub use config::AppConfig;
pub use errors::*;
pub use models::Platform;
pub use models::ReplyCollection;

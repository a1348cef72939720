//! rulekit core library exports

pub mod config;
pub mod detect;
pub mod error;
pub mod ignore;
pub mod index;
pub mod installer;
pub mod manifest;
pub mod packages;
pub mod report;
pub mod templates;

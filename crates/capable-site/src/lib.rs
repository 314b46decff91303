//! Everything the Capable Groups site knows that does not touch the DOM.
//!
//! The `frontend` crate renders these records and drives these state
//! machines from browser events; keeping them here lets the behavior be
//! tested natively with a virtual clock instead of a browser.

pub mod beams;
pub mod clock;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod motion;
pub mod navigation;
pub mod portfolio;
pub mod theme;

pub use config::SiteConfig;
pub use error::{ConfigError, FormError, UnknownCategory, UnknownSection};

pub use ulid::Ulid;

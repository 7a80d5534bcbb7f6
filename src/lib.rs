#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod controller;
mod generator;
mod grid;
mod l10n;
mod orientation;
mod placement;
mod renderer;
mod scheduler;
mod selection;
mod session;
mod words;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod timer;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use common::*;
pub use config::*;
pub use controller::*;
pub use generator::*;
pub use grid::*;
pub use l10n::*;
pub use orientation::*;
pub use placement::Placement;
pub use renderer::*;
pub use scheduler::*;
pub use selection::*;
pub use session::*;
pub use words::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_filter, LOG_ENV};
#[cfg(feature = "std")]
pub use timer::IntervalScheduler;
#[cfg(feature = "std")]
pub use ui::TerminalRenderer;

//! Reporting and plotting collaborators for Plumb root finders.
//!
//! This crate provides [`Observer`] implementations, capability traits, and
//! text reports that work across the methods in `plumb-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-method observers
//!   ([`HasResidual`], [`HasIncrement`], [`CanStopEarly`])
//!
//! # Reports
//!
//! [`Report`] formats the outcome of a run (description, initial guess, root
//! estimate or failure, iteration count) as plain text.
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories and error
//!   curves via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: plumb_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIncrement`]: traits::HasIncrement
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod report;

#[cfg(feature = "plot")]
mod plot;

pub use report::Report;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};

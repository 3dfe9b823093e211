//! Core traits and types for the Plumb workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Problem`] — the scalar problem a root finder works on: a function plus
//!   the optional derivative, iteration map, bracket, initial guess and
//!   relaxation factor that individual methods require
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod problem;

pub use observer::Observer;
pub use problem::{Problem, ScalarFn};

//! Adapter utilities for the `scroll-capability` crate.
//!
//! The `scroll-capability` crate is UI-agnostic and only answers "should the list load more
//! right now?". This crate provides small, framework-neutral helpers commonly needed around that
//! decision:
//!
//! - A timestamp-driven debouncer with leading/trailing edges and a max wait
//! - A load-more controller that debounces scroll events and tracks the load cycle
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod debounce;


pub use controller::{LoadMoreController, LoadRequest, LoadStatus};
pub use debounce::{DebounceOptions, Debouncer};

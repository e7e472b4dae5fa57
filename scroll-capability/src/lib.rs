//! Headless "load more" decisions for scrollable lists.
//!
//! For adapter-level utilities (debouncing, a load-more controller), see the
//! `scroll-capability-adapter` crate.
//!
//! On every scroll event an infinite list has to answer one question: did the user scroll close
//! enough to the end that the next page should be fetched? This crate answers it defensively:
//! - numeric inputs are coerced explicitly and never fail ([`check_number`])
//! - the decision itself is a single inclusive comparison ([`check_load_capability`])
//! - scrollbar state is read through typed lookups ([`ScrollBarState`], [`scroll_state`]) or,
//!   with `feature = "json"`, through dotted paths into arbitrary values ([`get_scroll_state`])
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll limit (content size minus viewport size)
//! - the scroll offset
//! - a load threshold
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod load;
mod number;
mod options;
mod state;
mod types;

#[cfg(feature = "json")]
pub mod value;

#[cfg(test)]
mod tests;

pub use load::{check_load_capability, distance_to_load};
pub use number::{NumberError, ToNumber, check_number, check_number_or_zero, parse_number};
pub use options::LoadOptions;
pub use state::{ScrollBarState, ScrollStateValue, scroll_state};
pub use types::{Axis, AxisPair, ScrollProp};

#[cfg(feature = "json")]
pub use state::get_scroll_state;

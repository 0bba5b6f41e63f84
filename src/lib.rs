#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod engine;
mod letters;
pub mod prelude;
mod round;
mod view;
mod words;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;

pub use common::*;
pub use config::*;
pub use engine::*;
pub use letters::{fold_char, is_separator, normalize, parse_guess};
pub use round::*;
pub use view::*;
pub use words::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::*;

//! folioterm
//!
//! Command interpreter and session engine for a simulated portfolio
//! terminal. The library is `no_std` + `alloc`; a host drives a
//! [`terminal::Session`] with key events and clock ticks and renders the
//! resulting line buffer.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod data;
pub mod games;
pub mod history;
pub mod host;
pub mod rng;
pub mod session;
pub mod shell;
pub mod terminal;
pub mod vfs;

pub use host::{GeoPosition, Host, HostError};
pub use rng::SessionRng;
pub use terminal::{Key, Session};

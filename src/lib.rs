//! # prowheels
//!
//! WASM entry for the ProWheels marketing site. Page behaviors live in the
//! browser-free `effects` crate; this crate implements its collaborators over
//! `web-sys` and wires DOM events to them.
//!
//! Build with the `browser` feature for the page bundle. Without it only the
//! configuration source is compiled, which keeps host-side tests free of any
//! browser dependency.

pub mod config_source;

#[cfg(feature = "browser")]
mod boot;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod storage;
#[cfg(feature = "browser")]
pub mod timers;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module start: install panic and log hooks, then boot once the document is parsed.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("prowheels: logger not installed: {err}").into());
    }
    boot::when_ready();
}

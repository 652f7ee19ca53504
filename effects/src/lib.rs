//! Presentation behaviors for the ProWheels marketing site.
//!
//! This crate holds every piece of state the site's page script owns: the
//! hero slideshow, the persisted theme, one-shot reveal animations, scroll
//! projections, the pointer follower and the logo strip. None of it touches
//! the browser directly. Components mutate pages through the
//! [`surface::RenderingSurface`] trait, persist through
//! [`store::PreferenceStore`] and schedule through [`timer::Scheduler`]; the
//! `prowheels` WASM crate implements those over `web-sys` and wires DOM
//! events to the methods here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slideshow`] | Hero slideshow controller and autoplay lifecycle |
//! | [`theme`] | Light/dark preference load, apply and toggle |
//! | [`reveal`] | One-shot reveal-on-scroll targets |
//! | [`scroll`] | Header shrink and back-to-top projections |
//! | [`cursor`] | Pointer follower with per-frame coalescing |
//! | [`logo_strip`] | Duplicated logo track for the marquee |
//! | [`toggle`] | Named marker toggles on a single node |
//! | [`surface`] | Rendering surface collaborator trait |
//! | [`store`] | Preference store collaborator trait |
//! | [`timer`] | Recurring timer collaborator trait |
//! | [`memory`] | In-memory surface, store and virtual-time scheduler |
//! | [`config`] | Site configuration and compiled-in defaults |
//! | [`assets`] | Hard-coded slide and logo lists |
//! | [`error`] | Error taxonomy shared by all components |

pub mod assets;
pub mod config;
pub mod cursor;
pub mod error;
pub mod logo_strip;
pub mod memory;
pub mod reveal;
pub mod scroll;
pub mod slideshow;
pub mod store;
pub mod surface;
pub mod theme;
pub mod timer;
pub mod toggle;

pub use error::SiteError;

//! # folio
//!
//! Client-side behaviour for the portfolio page, compiled to WebAssembly.
//!
//! The page markup is static; this crate binds to it once at load time and
//! reacts to DOM events afterwards. Each behaviour is split into a pure core
//! (state + events in, effects out) that is tested natively, and a thin
//! `hydrate`-only adapter under [`dom`] that talks to `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, ids, timings, and endpoint settings |
//! | [`theme`] | Light/dark preference resolution, toggling, persistence |
//! | [`reveal`] | One-shot scroll reveal bookkeeping |
//! | [`panel`] | Expandable contact panel animation state machine |
//! | [`carousel`] | Wrapping carousel index and wrapper transform |
//! | [`typewriter`] | Lazy character-by-character reveal sequence |
//! | [`weather`] | Current-weather fetch, parsing, and icon mapping |
//! | [`headings`] | Persistent underline latch for section titles |
//! | `dom` | Browser bindings (`hydrate` feature only) |

pub mod carousel;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod headings;
pub mod panel;
pub mod reveal;
pub mod theme;
pub mod typewriter;
pub mod weather;

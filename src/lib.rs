//! Client-side navigation layer for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser against
//! server-rendered markup. It toggles the mobile menu, switches the color
//! theme, shows one page section at a time in sync with the URL fragment, and
//! reveals content blocks the first time they scroll into view.
//!
//! All behavior is written against the capability traits in [`host`], so it
//! runs and is tested natively. The `browser` feature adds [`dom`], which
//! implements those traits over `web-sys` and exports the WASM entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | `NavController`: owns state, config and host; one method per event |
//! | [`state`] | `NavState`: menu flag, theme, active page |
//! | [`menu`] | Mobile menu toggle and hamburger bar poses |
//! | [`theme`] | `Theme` variants, toggle and stored-preference restore |
//! | [`router`] | `navigate_to` and fragment sync |
//! | [`reveal`] | One-shot reveal-on-scroll bookkeeping |
//! | [`host`] | Capability traits the logic runs against |
//! | [`config`] | DOM contract: ids, selectors, classes, asset paths |
//! | [`error`] | Storage and DOM binding errors |
//! | `dom` | `web-sys` host and event wiring (feature `browser`) |

pub mod config;
pub mod controller;
#[cfg(feature = "browser")]
pub mod dom;
pub mod error;
pub mod host;
pub mod menu;
pub mod reveal;
pub mod router;
pub mod state;
pub mod theme;

#[cfg(test)]
mod fake_host;

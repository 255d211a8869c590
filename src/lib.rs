//! # portfolio-ui
//!
//! Client-side behavior for a single-page portfolio, compiled to WebAssembly.
//! The page markup is static HTML; this crate enhances it with tab-style
//! section switching, a year-filtered timeline, a pointer-reactive particle
//! background, clipboard buttons, toast notifications, the theme preference,
//! and load-time counter and progress animations.
//!
//! All behavior lives in a browser-free controller ([`app::App`]) that returns
//! DOM effects and schedules its own timers against a caller-supplied clock.
//! The `hydrate` feature adds the [`dom`] layer that queries the document,
//! binds listeners, pumps timers, and applies the effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Controller owning all page state; emits [`app::Effect`]s |
//! | [`state`] | Notification, theme, section, timeline, and counter state |
//! | [`scheduler`] | Deadline-ordered one-shot timers |
//! | [`page`] | Page inventory and feature capabilities |
//! | [`util`] | Parallax math and attribute formatting |
//! | [`config`] | Optional inline JSON configuration |
//! | [`consts`] | Timing and tuning constants |
//! | [`error`] | Shared error type |
//! | `dom` | Browser glue and wasm entry points (`hydrate` only) |

pub mod app;
pub mod config;
pub mod consts;
pub mod error;
pub mod page;
pub mod scheduler;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

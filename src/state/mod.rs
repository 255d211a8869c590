//! Stateful widgets of the page.
//!
//! DESIGN
//! ======
//! Each widget is plain data plus transitions, free of `web-sys`, so the
//! behavior can be tested natively. The [`crate::app::App`] controller owns
//! one of each (or none, when the page lacks the markup) and turns their
//! transitions into DOM effects.

pub mod counter;
pub mod notice;
pub mod section;
pub mod theme;
pub mod timeline;

//! # typewriter
//!
//! Text effects for a portfolio page, written as small state machines that
//! render into an injected [`DisplayTarget`] and are driven by a host clock.
//!
//! ## Features
//! - Typing / erasing phrase cycler with jittered typing speed
//! - One-shot text reveal
//! - Ease-out number counter
//! - Irregular cursor blinking
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use typewriter::{SharedText, Typewriter, TypewriterConfig};
//!
//! let text = SharedText::new();
//! let config = TypewriterConfig::default()
//!     .with_type_speed(Duration::from_millis(80))
//!     .with_delete_speed(Duration::from_millis(40));
//!
//! let mut tw = Typewriter::new(Some(text.clone()), ["AI/ML Engineer", "Problem Solver"], config);
//! tw.start();
//! assert_eq!(text.text(), "A");
//!
//! while let Some(delay) = tw.time_until_next_step() {
//!     tw.advance(delay);
//!     if tw.phrase_index() == 1 {
//!         break;
//!     }
//! }
//! ```

mod counter;
mod cursor;
mod engine;
mod reveal;
mod target;
mod timeline;
mod types;

pub use counter::Counter;
pub use cursor::CursorBlink;
pub use engine::{Typewriter, TypewriterError};
pub use reveal::TextReveal;
pub use target::{DisplayTarget, SharedText};
pub use types::{Mode, RevealConfig, TypewriterConfig};

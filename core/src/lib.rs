//! Core library: slide splitting, navigation, share links and the session
//! controller. Nothing here touches the terminal.

pub mod config;
pub mod controller;
pub mod error;
pub mod linkify;
pub mod notification;
pub mod platform;
pub mod session;
pub mod share;
pub mod slide;
pub mod splitter;
pub mod startup;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::Config;
pub use controller::{ShareOutcome, SlideSessionController};
pub use error::{Result, SlideError};
pub use notification::{NotificationKind, UserNotification};
pub use platform::Platform;
pub use session::{Mode, Session};
pub use slide::{Fragment, Slide, SlideLine};
pub use splitter::{join_slides, split_slides, SplitOptions, PARAGRAPH_SEPARATOR};
pub use startup::{resolve_startup, Startup, StartupSource, SAMPLE_TEXT};

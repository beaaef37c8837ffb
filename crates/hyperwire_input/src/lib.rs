//! Input handling for the Hyperwire viewer
//!
//! The core never reads raw keyboard or mouse state. Presentation adapters
//! translate their toolkit's events into [`InputCommand`] values and feed
//! them through an [`InputSource`]; the [`CommandRouter`] applies them to
//! anything implementing [`ViewControl`].

mod clock;
mod command;
mod router;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Axis4, InputCommand, InputSource, ScriptedInput};
pub use router::{CommandRouter, ViewControl};

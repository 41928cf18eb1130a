//! State synchronization between controls, the query string and the view
//!
//! - [`controls`]: the form-controls seam and the in-memory [`FormControls`]
//! - [`debounce`]: explicit, cancellable debounce timer
//! - [`location`]: where the shareable query string is kept
//! - [`session`]: the render/sync loop tying them together

pub mod controls;
pub mod debounce;
pub mod location;
pub mod session;

pub use controls::{ControlField, Controls, FormControls, Trigger, apply_state, read_state};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use location::{Location, MemoryLocation};
pub use session::{Session, SessionOptions};

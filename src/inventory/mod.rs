//! Product inventory: data model, schema check and loading
//!
//! ```no_run
//! use vitrine::inventory::{ErrorSink, FileSource, Loader};
//!
//! struct Stderr;
//! impl ErrorSink for Stderr {
//!     fn show_error(&mut self, message: &str) {
//!         eprintln!("{message}");
//!     }
//! }
//!
//! let inventory = Loader::new(FileSource::new("inventory.json")).load(&mut Stderr);
//! println!("{} items", inventory.len());
//! ```

pub mod error;
pub mod load;
pub mod types;
pub mod validate;

pub use error::{FieldKind, LoadError, SchemaError};
pub use load::{CacheMode, ErrorSink, FileSource, InventorySource, Loader, ReaderSource, Source};
pub use types::{Inventory, InventoryItem, Meta};
pub use validate::validate;

#[cfg(feature = "http")]
pub use load::HttpSource;

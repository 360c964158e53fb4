//! docloc - localized comments for TypeDoc models
//!
//! docloc replaces the comments of a documentation model with text kept in a
//! directory of per-symbol JSON files, so API docs can be published in another
//! locale without touching the source annotations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `model`: Flat reflection table the overlay works on
//! - `overlay`: Kind dispatch, store lookups and comment replacement
//! - `store`: Localization store access (file system and in-memory)
//! - `typedoc`: TypeDoc JSON model reading and writing

pub mod cli;
pub mod config;
pub mod model;
pub mod overlay;
pub mod store;
pub mod typedoc;

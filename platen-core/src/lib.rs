//! Platen validates a declarative layout of named placeholder regions over a
//! template image and composites separate component images into those regions.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: a JSON layout document (`serde_json::Value`) becomes a validated [`LayoutSpec`]
//! 2. **Track**: a [`TemplateLayout`] binds the spec to a mutable template [`Surface`]
//! 3. **Apply**: component overlays are pasted into their regions, once per placeholder
//! 4. **Query**: applied/unapplied names, completion, and coarse coverage statistics
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Validate up front**: geometry errors (overlapping placeholders, missing fields) fail
//!   construction, so apply operations can only fail on per-call conditions.
//! - **No IO in the core**: decoding, encoding, and config-file loading happen in callers.
//! - **Single writer**: the template is mutably borrowed for the tracker's lifetime, so
//!   overlay application cannot race with outside mutation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod raster;

pub use foundation::error::{PlatenError, PlatenResult};
pub use layout::model::{LayoutSpec, Placeholder};
pub use layout::template::TemplateLayout;
pub use raster::surface::Surface;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shell-Lite Model - Shared types and host collaborator traits
//!
//! This crate holds everything the geometry core needs to know about the host
//! CAD document without depending on any particular host. The host (or a test)
//! provides implementations of the collaborator traits and hands the core an
//! immutable snapshot.
//!
//! # Architecture
//!
//! - [`LevelResolver`] - Named level lookup against a [`LevelSnapshot`]
//! - [`CatalogLookup`] - Typed family/type lookup against a [`Catalog`]
//! - [`UnitConverter`] - Conversion from user units to internal length units
//!
//! # Example
//!
//! ```ignore
//! use shell_lite_model::{Level, LevelId, LevelResolver, LevelSnapshot};
//!
//! let levels = LevelSnapshot::collect(vec![
//!     Level::new(LevelId(1), "Level 1", 0.0),
//!     Level::new(LevelId(2), "Level 2", 4000.0),
//! ]);
//! let base = levels.resolve("Level 1")?;
//! println!("Base elevation: {}", base.elevation);
//! ```

pub mod catalog;
pub mod error;
pub mod level;
pub mod types;
pub mod units;

// Re-export all public types
pub use catalog::*;
pub use error::*;
pub use level::*;
pub use types::*;
pub use units::*;

#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Raid egg notification events.
//!
//! Turns a scanner's egg payload into an [`EggEvent`], enriches it with
//! cached gym occupancy and flattens it into the [`Dts`] placeholder map
//! that notification templates are rendered from.
//!
//! ```
//! use eggwatch_core::Units;
//! use eggwatch_egg::EggEvent;
//! use eggwatch_format::{LocaleTable, MemoryCache};
//! use time::UtcOffset;
//!
//! let egg = EggEvent::from_json(
//!     r#"{"gym_id":"G1","start":1700000000,"end":1700003600,"latitude":"10.0","longitude":"20.0"}"#,
//! )?;
//! let dts = egg
//!     .enrich(&MemoryCache::new())
//!     .flatten(&LocaleTable::default(), UtcOffset::UTC, Units::Metric);
//! assert_eq!(dts["lng_5"].to_string(), "20.00000");
//! # Ok::<(), eggwatch_egg::EggError>(())
//! ```

mod dts;
mod error;
mod event;

pub use dts::{Dts, DtsValue};
pub use error::{EggError, Result};
pub use event::{EggEvent, Enriched, Fresh, EGG_KIND, GYM_RAID_SLOTS};

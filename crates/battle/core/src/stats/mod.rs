//! Stat model.
//!
//! ```text
//! [ CoreStats (persisted) ] + [ StatModifiers (encounter) ] -> effective stats
//! [ ResourceMeter (HP / MP) ]
//! effective stats -> StatsSnapshot -> formula library
//! ```
//!
//! Only `CoreStats`, level, experience and the two resource meters survive an
//! encounter. Everything else is encounter-scoped.

pub mod core;
pub mod resources;
pub mod snapshot;

pub use self::core::{CoreStatKind, CoreStats, StatModifiers, effective};
pub use resources::ResourceMeter;
pub use snapshot::StatsSnapshot;

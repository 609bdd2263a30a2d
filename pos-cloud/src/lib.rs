//! pos-cloud: tenant subscription housekeeping
//!
//! Long-running service that:
//! - Periodically sweeps stores whose subscription has lapsed
//! - Expires the store and its elapsed subscription rows
//! - Records an audit entry per transition

pub mod clock;
pub mod config;
pub mod db;
pub mod logger;
pub mod sweeper;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use sweeper::{
    ExpiryRepository, ExpirySweeper, PgExpiryRepository, SweepError, SweepReport, SweepScheduler,
};

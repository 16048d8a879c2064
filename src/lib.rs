//! sweepdir - a safe, idempotent file-organizing sweep
//!
//! This library sweeps a source directory, relocating each file into an
//! extension-named bucket under a destination root via copy-then-verified-
//! delete, and notifies an external HTTP collaborator of each confirmed
//! move. Sweeps can run once or on a fixed interval with a single-flight
//! guard; every discovered entry's fate is accounted for in a report.

pub mod bucket;
pub mod cli;
pub mod config;
pub mod notify;
pub mod output;
pub mod scheduler;
pub mod sweep;

pub use bucket::BucketKey;
pub use config::{CompiledFilters, ConfigError, FilterRules, SweepConfig};
pub use notify::{HttpNotifier, NoopNotifier, Notifier, NotifyError, RelocationEvent};
pub use scheduler::{Scheduler, SchedulerHandle, SingleFlight};
pub use sweep::{
    CollisionPolicy, EntryOutcome, NotifyStatus, SweepEngine, SweepError, SweepRecord, SweepReport,
};

pub use cli::{Cli, run_cli};

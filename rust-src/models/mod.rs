//! Data models for launch records and dashboard inputs.

mod launch_record;
mod selection;

pub use launch_record::{LaunchRecord, Outcome};
pub use selection::{PayloadRange, SiteSelection};

//! Schedule format versioning.
//!
//! Version 1 is the first schedule format. Files are upgraded one version at
//! a time through `migrate_one_version`; a format change bumps
//! `LATEST_VERSION` and adds its step there.

use crate::ScheduleError;
use crate::schema::ScheduleFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut schedule: ScheduleFile) -> Result<ScheduleFile, ScheduleError> {
    while schedule.version < LATEST_VERSION {
        schedule = migrate_one_version(schedule)?;
    }
    Ok(schedule)
}

fn migrate_one_version(schedule: ScheduleFile) -> Result<ScheduleFile, ScheduleError> {
    Err(ScheduleError::Migration {
        what: format!(
            "No migration path from version {} (oldest supported is 1)",
            schedule.version
        ),
    })
}

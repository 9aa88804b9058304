/// All database primary keys are PostgreSQL BIGINT / BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Fixed primary key of every singleton content row.
pub const SINGLETON_ID: DbId = 1;

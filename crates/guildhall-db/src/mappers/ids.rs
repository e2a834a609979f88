//! Snowflake <-> BIGINT conversion
//!
//! Postgres has no unsigned 64-bit type. Ids are stored bit-for-bit in a
//! signed BIGINT, so values above `i64::MAX` come back unchanged.

use guildhall_core::Snowflake;

#[inline]
pub fn to_db_id(id: Snowflake) -> i64 {
    id.into_inner() as i64
}

#[inline]
pub fn from_db_id(id: i64) -> Snowflake {
    Snowflake::new(id as u64)
}

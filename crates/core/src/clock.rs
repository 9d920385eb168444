use time::OffsetDateTime;

/// The current wall-clock time in the local zone, or UTC when the local
/// offset cannot be determined.
pub fn start_instant() -> OffsetDateTime {
    match OffsetDateTime::now_local() {
        Ok(now) => now,
        Err(err) => {
            tracing::warn!(%err, "falling back to UTC for the start instant");
            OffsetDateTime::now_utc()
        }
    }
}

//! World-level error types.

/// Errors surfaced by [`World::process`](crate::World::process) and
/// [`World::run`](crate::World::run).
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A system returned an error; the remaining systems of the tick were skipped.
    #[error("system `{system}` failed on tick {tick_id}")]
    SystemFailed {
        system: &'static str,
        tick_id: u64,
        #[source]
        source: anyhow::Error,
    },

    /// The tick rate has no representable tick period.
    #[error("invalid tick rate {rate}: expected 0 or a finite positive rate")]
    InvalidTickRate { rate: f64 },
}

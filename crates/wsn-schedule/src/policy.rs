//! The `ReshufflePolicy` trait: the extension point for scheduling rules.

use std::sync::Arc;

use wsn_core::SensorId;

use crate::{GreedyReshuffle, MinimalCoverReshuffle, ReshuffleContext};

/// Pluggable duty-cycle selection rule.
///
/// Implementations return the sensors that should be `On` until the next
/// reshuffle.  They must be deterministic: the same context must always
/// yield the same selection, or runs stop being reproducible.
///
/// Returning a `Dead` sensor is harmless; [`apply_selection`] skips it.
/// Duplicates are likewise ignored.
///
/// [`apply_selection`]: crate::apply_selection
///
/// # Example
///
/// ```rust,ignore
/// /// Keep every living sensor on (no duty-cycling at all).
/// struct AlwaysOn;
///
/// impl ReshufflePolicy for AlwaysOn {
///     fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId> {
///         (0..ctx.sensor_count() as u32)
///             .map(SensorId)
///             .filter(|&s| ctx.is_candidate(s))
///             .collect()
///     }
/// }
/// ```
pub trait ReshufflePolicy: Send + Sync + 'static {
    /// Choose the sensors to power for the coming interval.
    fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId>;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl ReshufflePolicy for Box<dyn ReshufflePolicy> {
    fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId> {
        (**self).select(ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl ReshufflePolicy for Arc<dyn ReshufflePolicy> {
    fn select(&self, ctx: &ReshuffleContext<'_>) -> Vec<SensorId> {
        (**self).select(ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Look up a built-in policy by its [`name`](ReshufflePolicy::name).
pub fn policy_by_name(name: &str) -> Option<Box<dyn ReshufflePolicy>> {
    match name {
        "greedy" => Some(Box::new(GreedyReshuffle)),
        "minimal-cover" => Some(Box::new(MinimalCoverReshuffle)),
        _ => None,
    }
}

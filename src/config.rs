/*!
 * Simulator Configuration
 *
 * Environment-driven defaults, overridable by workload files and CLI flags
 */

use crate::scheduler::{AgingFactor, DispatchPolicy, TimeQuantum};
use tracing::warn;

/// Environment variable selecting `strict` or `permissive` dispatch
pub const ENV_DISPATCH: &str = "SCHED_SIM_DISPATCH";
/// Environment variable with the default round robin quantum
pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";
/// Environment variable with the default aging factor
pub const ENV_AGING_FACTOR: &str = "SCHED_SIM_AGING_FACTOR";
/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "SCHED_SIM_TRACE_JSON";

/// Simulator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub dispatch_policy: DispatchPolicy,
    pub quantum: TimeQuantum,
    pub aging_factor: AgingFactor,
    pub trace_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dispatch_policy: DispatchPolicy::Permissive,
            quantum: TimeQuantum::default(),
            aging_factor: AgingFactor::default(),
            trace_json: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unparseable values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DISPATCH) {
            match value.parse() {
                Ok(policy) => config.dispatch_policy = policy,
                Err(e) => warn!(key = ENV_DISPATCH, error = %e, "ignoring invalid setting"),
            }
        }

        if let Some(value) = lookup(ENV_QUANTUM) {
            match value.trim().parse::<u32>() {
                Ok(ticks) => config.quantum = TimeQuantum::coerce(Some(ticks)),
                Err(e) => warn!(key = ENV_QUANTUM, error = %e, "ignoring invalid setting"),
            }
        }

        if let Some(value) = lookup(ENV_AGING_FACTOR) {
            match value.trim().parse::<f64>().map(AgingFactor::new) {
                Ok(Ok(factor)) => config.aging_factor = factor,
                Ok(Err(e)) => warn!(key = ENV_AGING_FACTOR, error = %e, "ignoring invalid setting"),
                Err(e) => warn!(key = ENV_AGING_FACTOR, error = %e, "ignoring invalid setting"),
            }
        }

        config.trace_json = lookup(ENV_TRACE_JSON)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(SimConfig::from_lookup(|_| None), SimConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = SimConfig::from_lookup(lookup(&[
            (ENV_DISPATCH, "strict"),
            (ENV_QUANTUM, "4"),
            (ENV_AGING_FACTOR, "0.25"),
            (ENV_TRACE_JSON, "true"),
        ]));
        assert_eq!(config.dispatch_policy, DispatchPolicy::Strict);
        assert_eq!(config.quantum.ticks(), 4);
        assert_eq!(config.aging_factor.get(), 0.25);
        assert!(config.trace_json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SimConfig::from_lookup(lookup(&[
            (ENV_DISPATCH, "sometimes"),
            (ENV_QUANTUM, "0"),
            (ENV_AGING_FACTOR, "-3"),
            (ENV_TRACE_JSON, "yes"),
        ]));
        assert_eq!(config, SimConfig::default());
    }
}

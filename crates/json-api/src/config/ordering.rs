//! Ordering Config

use clap::Args;
use railmeal_app::domain::lifecycle::EmptyOrderPolicy;

/// Ordering rules.
#[derive(Debug, Args)]
pub struct OrderingConfig {
    /// Whether orders without items may be confirmed (allow, reject)
    #[arg(long, env = "EMPTY_ORDER_POLICY", value_enum, default_value_t = EmptyOrderPolicy::Allow)]
    pub empty_order_policy: EmptyOrderPolicy,
}

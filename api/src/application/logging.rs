use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Installs the global tracing subscriber, human readable or JSON.
pub fn init_logging(args: &LogArgs) -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::try_new(&args.log_filter)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", args.log_filter, e))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if args.log_json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    Ok(())
}

/// Item Resolver command line entry point
///
/// Usage: `item-resolver <identifier> [flavor]`. Connection settings come from
/// `ITEM_RESOLVER_*` environment variables (or a `.env` file).

use item_resolver::{ItemResolver, ResolverConfig, ResolverResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ResolverResult<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_resolver=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ResolverConfig::from_env()?;
    config.validate()?;

    let mut args = std::env::args().skip(1);
    let identifier = args.next();
    let flavor = args.next().unwrap_or_default();

    let resolver = ItemResolver::new(config)?;
    let response = resolver.resolve(identifier.as_deref(), &flavor).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

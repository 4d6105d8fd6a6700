use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use solana_portfolio::utils::native_mint;
use solana_portfolio::{
    server, CoinCapPriceRoute, Config, PortfolioTracker, PriceCache, PriceResolver,
    RpcLedgerService, StaticMetadataProvider,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_file(true)
        .with_line_number(true)
        .init();

    tokio::runtime::Runtime::new()?.block_on(async {
        info!("Initializing portfolio service...");
        info!("RPC URL: {}", config.rpc_url);

        let ledger = Arc::new(RpcLedgerService::new(config.rpc_url.clone(), config.rpc_timeout));

        let coincap = CoinCapPriceRoute::new(config.coincap_api_key.clone(), config.quote_timeout)?;
        if !coincap.has_api_key() {
            warn!("COINCAP_API_KEY not set. SOL will be reported with a price of 0.");
        }

        let prices = PriceResolver::new(Arc::new(PriceCache::new()))
            .with_route(native_mint(), Arc::new(coincap))
            .with_ttl(config.price_ttl);

        let tracker = Arc::new(PortfolioTracker::new(
            ledger,
            Arc::new(StaticMetadataProvider::new()),
            Arc::new(prices),
        ));

        server::start(config.listen_addr(), tracker).await
    })
}

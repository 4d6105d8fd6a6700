use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::decoder::token_account::AccountDecoder;
use crate::error::PortfolioError;
use crate::models::{portfolio::Portfolio, token::TokenBalance};
use crate::providers::price_provider::PriceResolver;
use crate::traits::{
    ledger_service::LedgerQueryService,
    metadata_provider::TokenMetadataProvider,
};
use crate::utils::helper::{format_pubkey, lamports_to_sol, native_mint, parse_pubkey, NATIVE_SYMBOL};

/// Builds valued portfolio snapshots for wallets
pub struct PortfolioTracker {
    ledger: Arc<dyn LedgerQueryService>,
    decoder: AccountDecoder,
    prices: Arc<PriceResolver>,
    native_mint: String,
}

impl PortfolioTracker {
    /// Create a new portfolio tracker
    pub fn new(
        ledger: Arc<dyn LedgerQueryService>,
        metadata: Arc<dyn TokenMetadataProvider>,
        prices: Arc<PriceResolver>,
    ) -> Self {
        Self {
            ledger,
            decoder: AccountDecoder::new(metadata),
            prices,
            native_mint: native_mint(),
        }
    }

    pub fn price_resolver(&self) -> &PriceResolver {
        &self.prices
    }

    /// Build the valued portfolio for `address`.
    ///
    /// Fails only on a malformed address or a ledger lookup error. Accounts
    /// that cannot be decoded are skipped and unpriceable tokens are valued
    /// at zero.
    pub async fn build_portfolio(&self, address: &str) -> Result<Portfolio, PortfolioError> {
        let wallet = parse_pubkey(address)?;
        let wallet_str = wallet.to_string();
        info!("Building portfolio for {}", format_pubkey(&wallet_str));

        let lamports = self
            .ledger
            .fetch_native_balance(&wallet)
            .await
            .map_err(PortfolioError::LedgerQuery)?;

        let native_price = self.price_or_zero(&self.native_mint).await;
        let mut tokens = vec![TokenBalance::new(
            self.native_mint.clone(),
            NATIVE_SYMBOL,
            lamports_to_sol(lamports),
            native_price,
        )];

        let accounts = self
            .ledger
            .fetch_owned_accounts(&wallet)
            .await
            .map_err(PortfolioError::LedgerQuery)?;

        for (i, data) in accounts.iter().enumerate() {
            let token = match self.decoder.decode(data).await {
                Ok(token) => token,
                Err(e) => {
                    debug!("Skipping token account #{}: {}", i, e);
                    continue;
                }
            };

            let price = self.price_or_zero(&token.token_mint).await;
            tokens.push(token.priced(price));
        }

        let portfolio = Portfolio::assemble(wallet_str, tokens);
        info!(
            "Portfolio for {}: {} tokens ({} unpriced), total ${:.2}",
            format_pubkey(&portfolio.wallet_address),
            portfolio.token_count(),
            portfolio.unpriced_count(),
            portfolio.total_value
        );

        Ok(portfolio)
    }

    /// Price lookup that degrades to zero
    async fn price_or_zero(&self, mint: &str) -> f64 {
        match self.prices.get_price(mint).await {
            Ok(price) => price,
            Err(e @ PortfolioError::PriceNotFound(_)) => {
                debug!("{}", e);
                0.0
            }
            Err(e) => {
                warn!("Error fetching price for {}: {}", format_pubkey(mint), e);
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use solana_sdk::pubkey::Pubkey;

    use super::*;
    use crate::providers::{metadata_provider::StaticMetadataProvider, price_cache::PriceCache};
    use crate::traits::price_route::PriceRoute;

    const WALLET: &str = "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1";

    struct FakeLedger {
        lamports: anyhow::Result<u64>,
        accounts: Mutex<Option<Vec<Vec<u8>>>>,
        calls: AtomicUsize,
    }

    impl FakeLedger {
        fn new(lamports: u64, accounts: Vec<Vec<u8>>) -> Arc<Self> {
            Arc::new(Self {
                lamports: Ok(lamports),
                accounts: Mutex::new(Some(accounts)),
                calls: AtomicUsize::new(0),
            })
        }

        fn balance_fails() -> Arc<Self> {
            Arc::new(Self {
                lamports: Err(anyhow::anyhow!("connection refused")),
                accounts: Mutex::new(Some(vec![])),
                calls: AtomicUsize::new(0),
            })
        }

        fn accounts_fail(lamports: u64) -> Arc<Self> {
            Arc::new(Self {
                lamports: Ok(lamports),
                accounts: Mutex::new(None),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LedgerQueryService for FakeLedger {
        async fn fetch_native_balance(&self, _wallet: &Pubkey) -> anyhow::Result<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.lamports {
                Ok(v) => Ok(*v),
                Err(e) => Err(anyhow::anyhow!("{e}")),
            }
        }

        async fn fetch_owned_accounts(&self, _wallet: &Pubkey) -> anyhow::Result<Vec<Vec<u8>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.accounts
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| anyhow::anyhow!("getProgramAccounts timed out"))
        }
    }

    struct FixedRoute(Result<f64, ()>);

    #[async_trait]
    impl PriceRoute for FixedRoute {
        async fn fetch_price(&self, _mint: &str) -> Result<f64, PortfolioError> {
            self.0
                .map_err(|_| PortfolioError::QuoteTransport("operation timed out".into()))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn tracker(ledger: Arc<FakeLedger>, native_route: FixedRoute) -> PortfolioTracker {
        let prices = PriceResolver::new(Arc::new(PriceCache::new()))
            .with_route(native_mint(), Arc::new(native_route));
        PortfolioTracker::new(ledger, Arc::new(StaticMetadataProvider::new()), Arc::new(prices))
    }

    fn token_account(mint: &Pubkey, amount: u64, decimals: u8) -> Vec<u8> {
        let mut data = vec![0u8; 165];
        data[0..32].copy_from_slice(mint.as_ref());
        data[64..72].copy_from_slice(&amount.to_le_bytes());
        data[44] = decimals;
        data
    }

    #[tokio::test]
    async fn values_native_balance() {
        let tracker = tracker(FakeLedger::new(2_000_000_000, vec![]), FixedRoute(Ok(150.0)));

        let portfolio = tracker.build_portfolio(WALLET).await.unwrap();
        assert_eq!(portfolio.wallet_address, WALLET);
        assert_eq!(portfolio.tokens.len(), 1);

        let sol = &portfolio.tokens[0];
        assert_eq!(sol.token_mint, native_mint());
        assert_eq!(sol.symbol, "SOL");
        assert_eq!(sol.balance, 2.0);
        assert_eq!(sol.current_price, 150.0);
        assert_eq!(sol.value, 300.0);
        assert_eq!(portfolio.total_value, 300.0);
    }

    #[tokio::test]
    async fn skips_short_accounts_and_zeroes_unpriced_tokens() {
        let mint = Pubkey::new_unique();
        let ledger = FakeLedger::new(
            2_000_000_000,
            vec![vec![7u8; 100], token_account(&mint, 500_000, 6)],
        );
        let tracker = tracker(ledger, FixedRoute(Ok(150.0)));

        let portfolio = tracker.build_portfolio(WALLET).await.unwrap();
        assert_eq!(portfolio.tokens.len(), 2);

        let token = &portfolio.tokens[1];
        assert_eq!(token.token_mint, mint.to_string());
        assert_eq!(token.symbol, "Unknown");
        assert_eq!(token.balance, 0.5);
        assert_eq!(token.current_price, 0.0);
        assert_eq!(token.value, 0.0);
        assert_eq!(portfolio.total_value, 300.0);
    }

    #[tokio::test]
    async fn keeps_ledger_order() {
        let mints: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let accounts = mints.iter().map(|m| token_account(m, 1, 0)).collect();
        let tracker = tracker(FakeLedger::new(0, accounts), FixedRoute(Ok(1.0)));

        let portfolio = tracker.build_portfolio(WALLET).await.unwrap();
        let order: Vec<String> = portfolio.tokens[1..].iter().map(|t| t.token_mint.clone()).collect();
        let expected: Vec<String> = mints.iter().map(|m| m.to_string()).collect();
        assert_eq!(order, expected);
    }

    #[tokio::test]
    async fn invalid_address_makes_no_ledger_calls() {
        let ledger = FakeLedger::new(1, vec![]);
        let tracker = tracker(ledger.clone(), FixedRoute(Ok(150.0)));

        let err = tracker.build_portfolio("definitely not a pubkey").await.unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidAddress(_)));
        assert_eq!(ledger.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn quote_failure_degrades_native_price() {
        let tracker = tracker(FakeLedger::new(2_000_000_000, vec![]), FixedRoute(Err(())));

        let portfolio = tracker.build_portfolio(WALLET).await.unwrap();
        assert_eq!(portfolio.tokens[0].balance, 2.0);
        assert_eq!(portfolio.tokens[0].current_price, 0.0);
        assert_eq!(portfolio.total_value, 0.0);
        assert!(tracker.price_resolver().cache().is_empty());
    }

    #[tokio::test]
    async fn native_balance_failure_is_fatal() {
        let tracker = tracker(FakeLedger::balance_fails(), FixedRoute(Ok(150.0)));

        let err = tracker.build_portfolio(WALLET).await.unwrap_err();
        assert!(matches!(err, PortfolioError::LedgerQuery(_)));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn owned_accounts_failure_is_fatal() {
        let tracker = tracker(FakeLedger::accounts_fail(5), FixedRoute(Ok(150.0)));

        let err = tracker.build_portfolio(WALLET).await.unwrap_err();
        assert!(matches!(err, PortfolioError::LedgerQuery(_)));
    }

    #[tokio::test]
    async fn repeated_builds_are_identical() {
        let mint = Pubkey::new_unique();
        let ledger = FakeLedger::new(1_500_000_000, vec![token_account(&mint, 42, 1)]);
        let tracker = tracker(ledger, FixedRoute(Ok(99.5)));

        let first = tracker.build_portfolio(WALLET).await.unwrap();
        let second = tracker.build_portfolio(WALLET).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn cached_token_prices_are_applied() {
        let mint = Pubkey::new_unique();
        let ledger = FakeLedger::new(0, vec![token_account(&mint, 3_000_000, 6)]);
        let tracker = tracker(ledger, FixedRoute(Ok(150.0)));
        tracker
            .price_resolver()
            .cache()
            .set(&mint.to_string(), 2.0, Duration::from_secs(60));

        let portfolio = tracker.build_portfolio(WALLET).await.unwrap();
        assert_eq!(portfolio.tokens[1].current_price, 2.0);
        assert_eq!(portfolio.tokens[1].value, 6.0);
        assert_eq!(portfolio.total_value, 6.0);
    }
}

//! Place a single market or limit order on Binance USDⓈ-M futures.
//!
//! ```bash
//! futures-trader --symbol BTCUSDT --side BUY --type MARKET --quantity 0.01
//! futures-trader --symbol ETHUSDT --side SELL --type LIMIT --quantity 1 --price 3000
//! ```
//!
//! Credentials come from `BINANCE_API_KEY` / `BINANCE_API_SECRET` (a `.env`
//! file is honoured). Every request and response is appended to
//! `logs/trading.log`.

use anyhow::Context;
use auth::ApiCredentials;
use binance_futures::{
    FuturesClientConfig, FuturesError, FuturesRestClient, OrderComposer, OrderResult,
};
use clap::Parser;
use common::{init_logging, FuturesEnvironment, LogConfig};
use execution_core::{
    validate_order_type, validate_price, validate_quantity, validate_side, OrderIntent,
    ValidationError,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "futures-trader")]
#[command(about = "Place market or limit orders on Binance USDⓈ-M futures", long_about = None)]
#[command(version)]
struct Cli {
    /// Trading pair (e.g. BTCUSDT)
    #[arg(long)]
    symbol: String,

    /// BUY or SELL
    #[arg(long)]
    side: String,

    /// MARKET or LIMIT
    #[arg(long = "type")]
    order_type: String,

    /// Order quantity in base asset
    #[arg(long)]
    quantity: Decimal,

    /// Limit price (required for LIMIT, rejected for MARKET)
    #[arg(long)]
    price: Option<Decimal>,

    /// testnet or production; overrides BINANCE_ENVIRONMENT
    #[arg(long = "env")]
    environment: Option<FuturesEnvironment>,

    /// recvWindow in milliseconds; overrides BINANCE_RECV_WINDOW
    #[arg(long)]
    recv_window: Option<u64>,

    /// Directory for trading.log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

impl Cli {
    /// Run the raw flags through the validators.
    fn intent(&self) -> Result<OrderIntent, ValidationError> {
        let side = validate_side(&self.side)?;
        let order_type = validate_order_type(&self.order_type)?;
        let quantity = validate_quantity(self.quantity)?;
        let price = if order_type.requires_price() {
            Some(validate_price(self.price)?)
        } else {
            self.price
        };

        OrderIntent::new(self.symbol.as_str(), side, order_type, quantity, price)
    }

    /// `--env` wins over `BINANCE_ENVIRONMENT`; `BINANCE_BASE_URL` still
    /// overrides the selected environment's URL.
    fn client_config(&self) -> anyhow::Result<FuturesClientConfig> {
        let mut config = FuturesClientConfig::from_env_with(self.environment)?;
        if let Some(ms) = self.recv_window {
            config = config.with_recv_window_ms(ms);
        }
        Ok(config)
    }
}

/// HTTP status and exchange code of a rejected order.
fn rejection_detail(err: &anyhow::Error) -> Option<String> {
    let futures_err = err.downcast_ref::<FuturesError>()?;
    let FuturesError::Transport(transport) = futures_err else {
        return None;
    };
    let status = transport.status()?;

    Some(match futures_err.exchange_error() {
        Some(api) => format!("HTTP {status}, code {}: {}", api.code, api.msg),
        None => format!("HTTP {status}"),
    })
}

async fn run(cli: &Cli) -> anyhow::Result<OrderResult> {
    let intent = cli.intent()?;
    let credentials = ApiCredentials::from_env()?;
    let config = cli.client_config()?;
    if cli.environment.is_some_and(|env| env.is_production()) {
        warn!("Placing a live order on production");
    }

    info!(
        base_url = %config.base_url,
        recv_window_ms = config.recv_window_ms,
        "Using futures endpoint"
    );

    println!(
        "\nOrder Request: symbol={} side={} type={} quantity={} price={}",
        intent.symbol(),
        intent.side().as_binance_str(),
        intent.order_type().as_binance_str(),
        intent.quantity(),
        intent
            .price()
            .map_or_else(|| "-".to_string(), |p| p.to_string()),
    );

    let client = FuturesRestClient::new(credentials, config)?;
    let composer = OrderComposer::new(client);

    composer.place_order(&intent).await.with_context(|| {
        format!(
            "placing {} order for {}",
            intent.order_type().as_binance_str(),
            intent.symbol()
        )
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::default().with_dir(&cli.log_dir)) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run(&cli).await {
        Ok(result) => {
            println!("\nOrder Response:");
            println!("  orderId:     {}", result.order_id);
            println!("  status:      {}", result.status);
            println!("  executedQty: {}", result.executed_qty);
            println!("  avgPrice:    {}", result.avg_price);
            println!("\nOrder placed successfully");
        }
        Err(e) => {
            error!(error = ?e, "Order failed");
            println!("\nError: {e:#}");
            if let Some(detail) = rejection_detail(&e) {
                println!("  {detail}");
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use execution_core::{OrderSide, OrderType};
    use rest_client::TransportError;
    use rust_decimal_macros::dec;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("futures-trader").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_market_intent() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "buy", "--type", "market", "--quantity", "0.01",
        ]);
        let intent = cli.intent().unwrap();

        assert_eq!(intent.side(), OrderSide::Buy);
        assert_eq!(intent.order_type(), OrderType::Market);
        assert_eq!(intent.quantity(), dec!(0.01));
        assert_eq!(intent.price(), None);
    }

    #[test]
    fn test_limit_intent() {
        let cli = parse(&[
            "--symbol", "ETHUSDT", "--side", "SELL", "--type", "LIMIT", "--quantity", "1",
            "--price", "3000",
        ]);
        let intent = cli.intent().unwrap();

        assert_eq!(intent.order_type(), OrderType::Limit);
        assert_eq!(intent.price(), Some(dec!(3000)));
    }

    #[test]
    fn test_limit_without_price_fails_validation() {
        let cli = parse(&[
            "--symbol", "ETHUSDT", "--side", "SELL", "--type", "LIMIT", "--quantity", "1",
        ]);
        assert_eq!(cli.intent().unwrap_err(), ValidationError::MissingPrice);
    }

    #[test]
    fn test_market_with_price_fails_validation() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1",
            "--price", "100",
        ]);
        assert_eq!(
            cli.intent().unwrap_err(),
            ValidationError::UnexpectedPrice(dec!(100))
        );
    }

    #[test]
    fn test_invalid_side_fails_validation() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "LONG", "--type", "MARKET", "--quantity", "1",
        ]);
        assert!(matches!(cli.intent(), Err(ValidationError::InvalidSide(_))));
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        let result = Cli::try_parse_from(["futures-trader", "--symbol", "BTCUSDT"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_flag_parses() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1",
            "--env", "production",
        ]);
        assert_eq!(cli.environment, Some(FuturesEnvironment::Production));
    }

    #[test]
    fn test_rejection_detail_reports_exchange_code() {
        let err = anyhow::Error::new(FuturesError::Transport(TransportError::ExchangeRejected {
            status: 400,
            body: r#"{"code":-1111,"msg":"Precision over maximum"}"#.into(),
        }))
        .context("placing LIMIT order for BTCUSDT");

        assert_eq!(
            rejection_detail(&err).as_deref(),
            Some("HTTP 400, code -1111: Precision over maximum")
        );
    }

    #[test]
    fn test_rejection_detail_absent_for_timeout() {
        let err = anyhow::Error::new(FuturesError::Transport(TransportError::Timeout));
        assert_eq!(rejection_detail(&err), None);
    }
}

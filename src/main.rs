use clap::Parser;
use crypto_price::{CoinGecko, Config};
use futures_util::future::join;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(name = "crypto-price", version)]
struct Args {
    /// CoinGecko coin identifier
    #[arg(default_value = "bitcoin")]
    coin: String,
    /// Reference currency for the price history
    #[arg(default_value = "usd")]
    currency: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let Args { coin, currency } = Args::parse();

    let config = Config::from_env()?;
    let coingecko = CoinGecko::init(&config)?;
    info!("Using CoinGecko at {}", coingecko.base_url());

    let (high, low) = join(
        coingecko.get_crypto_all_time_high(&coin, &currency),
        coingecko.get_crypto_all_time_low(&coin, &currency),
    )
    .await;

    match high {
        Ok(result) => println!(
            "All-time high of {} in {}: {}",
            result.coin, result.currency, result.price
        ),
        Err(err) => eprintln!("{}", err),
    }
    match low {
        Ok(result) => println!(
            "All-time low of {} in {}: {}",
            result.coin, result.currency, result.price
        ),
        Err(err) => eprintln!("{}", err),
    }

    Ok(())
}

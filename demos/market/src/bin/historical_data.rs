use tinvest_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let ticker = args.next().unwrap_or_else(|| "SBER".to_string());
    let period = args.next().unwrap_or_else(|| "1w".to_string());

    let client = Client::new(Config::new())?;

    match client.lookup_historical_data(&ticker, &period).await {
        Ok(Lookup::Found(series)) => {
            info!("{} candles for {} ({})", series.len(), ticker, period);
            println!("{series}");
        }
        Ok(Lookup::NotFound) => warn!("Unknown ticker: {}", ticker),
        Err(e) => error!("Request failed: {}", e),
    }

    let volume = client.get_trading_volume(&ticker, None).await;
    info!("Latest volume for {}: {:?}", ticker, volume);

    Ok(())
}

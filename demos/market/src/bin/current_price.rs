use tinvest_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let tickers: Vec<String> = std::env::args().skip(1).collect();
    let tickers = if tickers.is_empty() {
        vec!["SBER".to_string(), "GAZP".to_string()]
    } else {
        tickers
    };

    // Token errors stop here; a failed connection check is only logged
    let client = Client::connect(Config::new()).await?;

    let currency = &client.config().trading.currency;
    for ticker in &tickers {
        match client.get_current_price(ticker).await {
            Some(price) => info!("{}: {:.2} {}", ticker, price, currency),
            None => warn!("{}: no price available", ticker),
        }
    }

    if let Some(figi) = client.config().index_figi("IMOEX") {
        let price = client.get_current_price(figi).await;
        info!("IMOEX ({}): {:?}", figi, price);
    }

    Ok(())
}

use melt_value_sdk::MeltValueEngine;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = MeltValueEngine::global().await;
    let oracle = engine.oracle();

    println!(
        "Melt value report (Provider: {}, cache TTL: {:?})",
        oracle.provider_name(),
        oracle.cache_ttl()
    );
    println!("-------------------------------------------");

    // 1. Fetch spot prices
    println!("1. Fetching spot prices...");
    let start = Instant::now();
    let prices = engine.get_spot_prices().await;
    println!("   Source:    {}", prices.source);
    println!("   Gold:      ${:.2}/oz", prices.gold);
    println!("   Silver:    ${:.2}/oz", prices.silver);
    println!("   Platinum:  ${:.2}/oz", prices.platinum);
    println!("   Copper:    ${:.2}/lb", prices.copper);
    println!("   Nickel:    ${:.2}/lb", prices.nickel);
    println!("   Latency:   {:?}", start.elapsed());
    if prices.is_fallback() {
        eprintln!("   Warning: every feed failed, using static prices");
    }
    println!();

    // 2. Value a sample collection
    println!("2. Valuing sample coins...");
    let coins = [
        ("Morgan Dollar", Some(1921)),
        ("1964-D Kennedy Half Dollar MS65", None),
        ("Kennedy Half Dollar", Some(1967)),
        ("Washington Quarter", Some(1964)),
        ("Washington Quarter", Some(1965)),
        ("Jefferson Nickel", Some(1943)),
        ("Lincoln Cent", Some(1943)),
        ("American Gold Eagle (1 oz)", None),
        ("Buffalo Nickel", Some(1936)),
        ("Trade Dollar", None),
    ];

    let mut total = 0.0;
    for (coin_type, year) in coins {
        let label = match year {
            Some(year) => format!("{} {}", year, coin_type),
            None => coin_type.to_string(),
        };
        match engine.value_coin(coin_type, year).await {
            Some(valuation) => {
                total += valuation.melt_value;
                println!(
                    "   {:<40} ${:>9.2}  ({})",
                    label, valuation.melt_value, valuation.composition.name
                );
            }
            None => println!("   {:<40} {:>10}", label, "not found"),
        }
    }
    println!("   {:<40} ${:>9.2}", "Total", total);
    println!();

    // 3. Health
    let health = oracle.health_check().await;
    println!("3. Oracle health: {:?}", health.status);
    if let Some(message) = health.message {
        println!("   {}", message);
    }

    Ok(())
}

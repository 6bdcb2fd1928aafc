//! Print upcoming departures for a stop.
//!
//! Takes a stop-place id or a free-text name as the first argument,
//! defaulting to Kringsjå in Oslo:
//!
//! ```sh
//! cargo run --example get_departures -- "NSR:StopPlace:59706"
//! cargo run --example get_departures -- "Jernbanetorget"
//! ```

use ruter_client::{Config, EnturClient, Error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let station = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "NSR:StopPlace:59706".to_string());

    let client = EnturClient::new(Config::new("ruter-client-example"))?;
    let mut query = client.departures(&station)?;

    for departure in query.departures()? {
        println!("{departure}");
    }

    Ok(())
}

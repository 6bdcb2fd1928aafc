//! Resolve a place name to stop-place candidates.
//!
//! ```sh
//! cargo run --example find_stop -- "Kringsjå"
//! ```

use ruter_client::{Config, EnturClient, Error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Kringsjå".to_string());

    let client = EnturClient::new(Config::new("ruter-client-example"))?;
    let mut query = client.geocode(&text);

    for station in query.resolve()? {
        println!("{}\t{}", station.id(), station.name());
    }

    Ok(())
}

//! Stores a configuration record in the process-wide store and reads it back
//! through a second handle.
//!
//! Set `RUST_LOG=debug` to see the store's own log events.

use anyhow::Context;
use tally::lookup::{field_as, first};
use tally::{get_instance, Value};
use tracing_subscriber::EnvFilter;

const CONFIG_KEY: &str = "configuration.key";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let writer = get_instance();
    let reader = get_instance();
    tracing::info!(shared = writer.ptr_eq(&reader), "obtained two handles");

    let datas = Value::map([
        ("config", "default"),
        ("ip", "192.168.1.1"),
        ("port", "5555"),
    ]);
    writer.append(CONFIG_KEY, datas);

    let config = first(&reader, CONFIG_KEY).context("configuration was not stored")?;

    println!("==== Configuration ====");
    println!("Configuration :: {}", field_as::<String>(&config, "config")?);
    println!("Ip address :: {}", field_as::<String>(&config, "ip")?);
    println!("Port :: {}", field_as::<String>(&config, "port")?);
    println!("=======================");

    Ok(())
}

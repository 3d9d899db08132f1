use std::io;

use smsc::{Credentials, SmscClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = std::env::var("SMSC_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("SMSC_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_PASSWORD environment variable is required",
        )
    })?;
    let sender = std::env::var("SMSC_SENDER").unwrap_or_else(|_| "SMSC.RU".to_owned());

    let client = SmscClient::new(Credentials::new(login, password, sender)?)?;
    let balance = client.get_balance().await?;
    println!("balance: {balance:.2}");

    Ok(())
}

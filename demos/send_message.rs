use std::io;

use smsc::{Credentials, MessageText, RawPhoneNumber, SendMessages, SmscClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::new(
        required_env("SMSC_LOGIN")?,
        required_env("SMSC_PASSWORD")?,
        required_env("SMSC_SENDER")?,
    )?;
    let phone = RawPhoneNumber::new(required_env("SMSC_PHONE")?)?;
    let message =
        std::env::var("SMSC_MESSAGE").unwrap_or_else(|_| "Hello from the smsc demo.".to_owned());

    let client = SmscClient::new(credentials)?;
    let request = SendMessages::text(vec![phone], MessageText::new(message)?)?;

    let id = client.send(&request).await?;
    println!("message id: {id}");

    Ok(())
}

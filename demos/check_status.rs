use std::io;

use smsc::{Credentials, MessageId, MessageStatus, RawPhoneNumber, SmscClient, StatusQuery};

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
    let credentials = Credentials::new(
        required_env("SMSC_LOGIN")?,
        required_env("SMSC_PASSWORD")?,
        required_env("SMSC_SENDER")?,
    )?;
    let phone = RawPhoneNumber::new(required_env("SMSC_PHONE")?)?;
    let id: i64 = required_env("SMSC_MESSAGE_ID")?.trim().parse()?;

    let client = SmscClient::new(credentials)?;
    let query = StatusQuery::new(phone, MessageId::new(id)).with_more_info(true);

    match client.get_status(&query).await? {
        MessageStatus::Info(info) => println!(
            "message {}: status {} (last update {:?})",
            info.id,
            info.status.as_i32(),
            info.last_date
        ),
        MessageStatus::Error(error) => println!(
            "message {}: failed with status {} (err {:?})",
            error.id,
            error.status.as_i32(),
            error.raw_error
        ),
    }

    Ok(())
}

use clap::Parser;
use colored::Colorize;
use fetch::FetchCommand;
use log::error;

mod config;
mod fetch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let fetch = FetchCommand::parse();

    if let Err(err) = fetch.run().await {
        if let Some(message) = fetch::user_message(&err) {
            error!("{}", message.red());
            std::process::exit(-1);
        }
        return Err(err);
    }

    Ok(())
}

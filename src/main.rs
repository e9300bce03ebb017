use std::{path::PathBuf, process};

use chrono::{SecondsFormat, Utc};
use clap::Parser;

use locship::{
    config::Config,
    error::Error,
    export::run_export,
    store::MongoStore,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the localization artifacts are written into
    #[arg(long, default_value = "localization-artifacts")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        let marker = match e {
            Error::Config(_) => "❗️",
            _ => "🚩",
        };
        eprintln!("{} {}", marker, e);
        process::exit(1);
    }

    println!("\n😈 Complete!");
}

async fn run(args: Args) -> Result<(), Error> {
    // Configuration is validated before any store connection is made.
    let config = Config::from_env(args.out_dir)?;
    let store = MongoStore::connect(&config).await?;

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    run_export(&store, &config, &generated_at).await?;

    Ok(())
}

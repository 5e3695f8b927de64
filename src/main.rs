use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "OpenCfP - a call-for-papers backend", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Opening database {}", cfg.db.conn_sqlite);
    let connections =
        ocfp_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    ocfp_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    log::info!("Starting web server");
    ocfp_webserver::run(connections, cfg.webserver.enable_cors).await;

    Ok(())
}

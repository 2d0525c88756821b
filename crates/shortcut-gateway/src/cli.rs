use clap::Parser;
use shortcut_store::persistence::DEFAULT_BACKUP_PATH;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "SHORTCUT_LISTEN_ADDR";
pub const LOAD_PATH_ENV: &str = "SHORTCUT_LOAD_PATH";
pub const BACKUP_PATH_ENV: &str = "SHORTCUT_BACKUP_PATH";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "shortcut", about = "A concurrent URL shortening service")]
pub struct CLI {
    /// Address the HTTP server listens on.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub addr: String,

    /// JSON file of short code to url pairs to load before serving.
    #[arg(long, env = LOAD_PATH_ENV)]
    pub load: Option<PathBuf>,

    /// Where the mapping is written on shutdown.
    #[arg(long, env = BACKUP_PATH_ENV, default_value = DEFAULT_BACKUP_PATH)]
    pub backup: PathBuf,
}

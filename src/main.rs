#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use cardvault_core::{CollectionStore, Preferences, Storage, UserId};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Settings resolved from the command line at startup
pub struct Bootstrap {
    pub mint_delay: Duration,
    pub store: CollectionStore,
    pub preferences: Preferences,
    /// `None` when the preferences database could not be opened
    pub storage: Option<Storage>,
}

static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();

/// Get the startup settings; only valid after `main` has run.
pub fn bootstrap() -> &'static Bootstrap {
    BOOTSTRAP.get().expect("bootstrap is set before launch")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardvault")
}

/// Card Vault - NFT collection simulator
#[derive(Parser, Debug)]
#[command(name = "cardvault-desktop")]
#[command(about = "Card Vault - browse cards, mint NFTs and trade them between mock users")]
struct Args {
    /// Data directory for the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Id of the user to start as (defaults to the first seeded user)
    #[arg(short, long)]
    user: Option<String>,

    /// Duration of the minting animation in milliseconds
    #[arg(long, default_value_t = 2000)]
    mint_delay_ms: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut store = match CollectionStore::seeded() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load seed data: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(user) = args.user {
        match store.try_switch_user(&UserId::new(user.as_str())) {
            Ok(switched) => store = switched,
            Err(e) => tracing::warn!("Ignoring --user {}: {}", user, e),
        }
    }

    let storage = match Storage::new(data_dir.join("preferences.redb")) {
        Ok(storage) => Some(storage),
        Err(e) => {
            tracing::error!("Preferences will not be saved: {}", e);
            None
        }
    };

    let preferences = match &storage {
        Some(storage) => storage.load_preferences().unwrap_or_else(|e| {
            tracing::error!("Failed to load preferences: {}", e);
            Preferences::default()
        }),
        None => Preferences::default(),
    };

    tracing::info!(
        user = %store.current_user_id(),
        "Starting with data dir: {:?}",
        data_dir
    );

    let _ = BOOTSTRAP.set(Bootstrap {
        mint_delay: Duration::from_millis(args.mint_delay_ms),
        store,
        preferences,
        storage,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NFT Collection")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

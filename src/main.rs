use anyhow::Result;
use rollcall::commands::Cli;
use rollcall::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}

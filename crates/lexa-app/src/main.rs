use std::env;
use std::sync::Arc;

use lexa_core::state::AppState;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod console;
mod controller;
mod events;
mod profile;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::profile::ProfileStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout belongs to the console frontend
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let profiles = ProfileStore::from_env();
    profiles.init_user_config()?;
    let profile_name = env::var("LEXA_PROFILE").unwrap_or_else(|_| "main".to_string());
    if !profiles.exists(&profile_name) {
        profiles.add_profile_from_default(&profile_name)?;
    }
    let config = profiles.load_user_profile(&profile_name)?;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tracing::info!("lexa started with profile '{}'", profile_name);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task exited with error: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

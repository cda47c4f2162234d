use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use session_bridge::config::Config;
use session_bridge::models::{Role, SessionOptions, TokenOptions};
use session_bridge::SessionBridge;

/// Create a session and print a moderator token for it
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        domain_source = ?config.domain_source,
        ttl = config.default_token_ttl_seconds,
        "Configuration loaded"
    );

    let bridge = SessionBridge::new(config)?;

    let session = bridge.create_session(SessionOptions::default()).await?;
    let domain_id = bridge.resolve_domain_id().await?;

    let options = TokenOptions::for_domain(domain_id).with_role(Role::Moderator);
    let token = bridge.generate_token(&session.session_id, &options)?;

    println!("session_id={}", session.session_id);
    println!("token={}", token);

    Ok(())
}

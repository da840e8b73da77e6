use clap::Parser;
use impostor::prelude::*;
use tracing_subscriber::EnvFilter;

/// Impostor - one shared party game, one secret word, one impostor.
#[derive(Parser, Debug)]
#[command(name = "impostor")]
#[command(version, about)]
struct Args {
    /// port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// bind address
    #[arg(short, long, env = "BIND", default_value = "0.0.0.0")]
    bind: String,

    /// newline-delimited word list, re-read every round
    #[arg(short, long, env = "WORDS_FILE", default_value = "words.txt")]
    words_file: String,

    /// password required to claim the Master role
    #[arg(long, env = "MASTER_PASSWORD", hide_env_values = true)]
    master_password: String,

    /// minimum number of players before a round can start
    #[arg(long, env = "MIN_PLAYERS", default_value_t = 3)]
    min_players: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "impostor=info,impostor_session=info,tower_http=info".into()
            }),
        )
        .init();

    let args = Args::parse();

    let config = SessionConfig {
        min_players: args.min_players,
        ..SessionConfig::with_master_secret(args.master_password)
    };

    let server = ImpostorServer::builder()
        .bind(&format!("{}:{}", args.bind, args.port))
        .session_config(config)
        .word_source(FileWordSource::new(&args.words_file))
        .build()
        .await?;

    tracing::info!(
        addr = %server.local_addr()?,
        words_file = %args.words_file,
        "listening"
    );

    server.run().await?;
    Ok(())
}

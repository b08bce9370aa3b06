use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use twin_health_chat::{
    client::{ChatSession, CommandRecognizer, HttpTransport, Role, SpeechCapability},
    config, telemetry,
};

/// Terminal front end for the Twin Health chat relay.
#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Relay base URL. Falls back to CHAT_BACKEND_URL, then http://localhost:10000.
    #[arg(long)]
    backend_url: Option<String>,

    /// Command whose stdout is used as dictated input for `/mic`.
    #[arg(long)]
    dictation_cmd: Option<String>,
}

const HELP: &str = "Type a message and press Enter. /mic dictates, an empty line sends dictated text, /history shows the transcript, /quit exits.";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_with_default("warn");

    let cli = Cli::parse();
    let backend_url = cli.backend_url.unwrap_or_else(config::backend_url_from_env);

    let speech = match cli.dictation_cmd.as_deref().and_then(CommandRecognizer::parse) {
        Some(recognizer) => SpeechCapability::available(recognizer),
        None => SpeechCapability::Unavailable,
    };

    let transport = HttpTransport::new(&backend_url);
    println!("Twin Health AI ({})", transport.url());
    println!("{HELP}");

    let mut session = ChatSession::new(transport, speech);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => println!("{HELP}"),
            "/history" => {
                for message in session.transcript().snapshot() {
                    let who = match message.role {
                        Role::User => "you",
                        Role::Bot => "bot",
                    };
                    println!("{who}: {}", message.text);
                }
            }
            "/mic" => {
                if !session.speech().is_available() {
                    println!("Speech input is not available. Start with --dictation-cmd to enable it.");
                } else if session.dictate().await {
                    println!("🎤 {} (Enter to send)", session.input());
                } else {
                    println!("Nothing recognized.");
                }
            }
            "" => {
                if let Some(reply) = session.send().await {
                    println!("bot: {}", reply.text);
                }
            }
            _ => {
                if let Some(reply) = session.submit(&line).await {
                    println!("bot: {}", reply.text);
                }
            }
        }
    }

    Ok(())
}

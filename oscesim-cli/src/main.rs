use anyhow::Result;
use clap::{Parser, Subcommand};
use oscesim_core::{ChatMessage, Config, get_completion, transcript};
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "oscesim")]
#[command(about = "Pharmacy consultation simulator backend CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single prompt and print the model's reply
    Ask {
        /// The student pharmacist's message
        prompt: String,

        /// Base64-encoded transcript of prior turns
        #[arg(short, long)]
        transcript: Option<String>,
    },

    /// Interactive consultation loop (history kept between turns)
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Config::from_env loads .env itself
    let config = Config::from_env()?;
    info!("Using model {}", config.completion_model);

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { prompt, transcript } => {
            ask_command(&prompt, transcript.as_deref(), &config).await?;
        }
        Commands::Chat => {
            chat_command(&config).await?;
        }
    }

    Ok(())
}

async fn ask_command(prompt: &str, blob: Option<&str>, config: &Config) -> Result<()> {
    let reply = get_completion(prompt, blob, config).await?;
    println!("{reply}");
    Ok(())
}

async fn chat_command(config: &Config) -> Result<()> {
    println!("Consultation started. Empty line to quit.\n");

    let stdin = std::io::stdin();
    let mut history: Vec<ChatMessage> = Vec::new();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let prompt = line.trim();
        if prompt.is_empty() {
            break;
        }

        // Re-encode each round so every call goes through the wire format
        let blob = transcript::encode(&history);
        let reply = get_completion(prompt, Some(blob.as_str()), config).await?;
        println!("patient> {reply}\n");

        history.push(ChatMessage::user(prompt));
        history.push(ChatMessage::assistant(&reply));
    }

    println!("Consultation ended after {} turns", history.len());
    Ok(())
}

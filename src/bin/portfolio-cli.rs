use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::CONTENT_DISPOSITION;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "portfolio-cli")]
#[command(about = "Command line client for the portfolio backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server is up
    Health,
    /// List submitted contact messages
    Contacts,
    /// Submit a contact message
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Download the resume
    Resume {
        /// Destination file. Defaults to the server-provided filename.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/api/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Contacts => {
            let res = client.get(format!("{}/api/contacts", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Submit {
            name,
            email,
            subject,
            message,
        } => {
            let res = client
                .post(format!("{}/api/contact", cli.url))
                .json(&json!({
                    "name": name,
                    "email": email,
                    "subject": subject,
                    "message": message,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Resume { output } => {
            let res = client
                .get(format!("{}/api/resume/download", cli.url))
                .send()
                .await?;
            if !res.status().is_success() {
                return print_response(res).await;
            }

            let path = output.unwrap_or_else(|| {
                res.headers()
                    .get(CONTENT_DISPOSITION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(filename_from_disposition)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("Resume.txt"))
            });
            let body = res.bytes().await?;
            tokio::fs::write(&path, &body).await?;
            println!("Saved {} bytes to {}", body.len(), path.display());
        }
    }

    Ok(())
}

/// `attachment; filename="Jit_Goria_Resume.txt"` → `Jit_Goria_Resume.txt`
fn filename_from_disposition(value: &str) -> Option<String> {
    let name = value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?
        .trim_matches('"');

    // never write outside the working directory
    let name = name.rsplit(['/', '\\']).next()?;
    (!name.is_empty() && name != "..").then(|| name.to_string())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

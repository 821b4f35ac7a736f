use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ncddns::config::{ConfigStore, DomainEntry};
use ncddns::dns::NamecheapProvider;
use ncddns::eventlog::EventLog;
use ncddns::ip::IpDiscovery;
use ncddns::updater;

#[derive(Parser)]
#[command(name = "ncddns")]
#[command(about = "Namecheap dynamic DNS updater - keeps domains resolving to your current public IP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover the public IP and push it to every configured domain
    Run,

    /// Prompt for host, domain and password and add them to the config
    AddDomain,

    /// Show the current public IP without updating anything
    Check,

    /// Show configuration file location and contents
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Commands::Run => {
            let store = ConfigStore::new();
            let config = store.read()?;

            let discovery = IpDiscovery::new();
            let provider = NamecheapProvider::new();
            let event_log = EventLog::new();

            let summary =
                updater::run_update_pass(&config, &discovery, &provider, &event_log).await?;

            info!(
                "Update pass finished: {} attempted, {} failed",
                summary.attempted, summary.failed
            );

            if summary.failed > 0 {
                anyhow::bail!(
                    "{} of {} domain updates failed",
                    summary.failed,
                    summary.attempted
                );
            }
        }

        Commands::AddDomain => {
            add_domain()?;
        }

        Commands::Check => {
            let discovery = IpDiscovery::new();
            match discovery.get_ip_address().await {
                Ok(ip) => println!("Public IP: {}", ip),
                Err(e) => println!("Public IP: Error - {}", e),
            }
        }

        Commands::Config => {
            show_config()?;
        }
    }

    Ok(())
}

fn add_domain() -> Result<()> {
    use std::io::{self, Write};

    let store = ConfigStore::new();
    let mut config = store.read()?;

    print!("Please enter the host: ");
    io::stdout().flush()?;
    let mut host = String::new();
    io::stdin().read_line(&mut host)?;

    print!("Please enter the domain name: ");
    io::stdout().flush()?;
    let mut domain = String::new();
    io::stdin().read_line(&mut domain)?;

    let password = rpassword::prompt_password("Please enter the dynamicdns password: ")?;

    let entry = DomainEntry {
        host: host.trim().to_string(),
        domain: domain.trim().to_string(),
        password: password.trim().to_string(),
    };

    println!("Adding {}:{} to {}", entry.host, entry.domain, store.path().display());
    config.domains.push(entry);
    store.write(&config)?;

    Ok(())
}

fn show_config() -> Result<()> {
    let store = ConfigStore::new();

    println!("Configuration file location: {}\n", store.path().display());

    if store.path().exists() {
        let config = store.read()?;
        println!("Current configuration:\n");
        println!("{}", serde_yaml::to_string(&config)?);
    } else {
        println!("Configuration file not found.");
        println!("\nRun 'ncddns add-domain' or create one at the location above.");
        println!("Example configuration:\n");
        println!(
            r#"domains:
  - host: "@"
    domain: example.com
    password: your-dynamicdns-password
"#
        );
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use omega_bank::{config::ShellConfig, logging, shell::Shell};

#[derive(Parser, Debug)]
#[command(name = "omega-bank", version, about = "In-memory bank account simulator")]
struct Cli {
    /// Start without the Alice and Bob demonstration accounts
    #[arg(long)]
    no_seed: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = ShellConfig {
        seed_demo_accounts: !cli.no_seed,
    };
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), &mut stdout, &config)?;
    shell.run()
}

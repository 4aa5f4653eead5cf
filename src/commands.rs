use clap::Subcommand;

use crate::keystore::Keystore;
use crate::ops;
use crate::wallet::WalletManager;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new wallet and save it to the keystore
    Create {
        #[arg(long, default_value = "ecdsa", help = "Signature scheme (ecdsa, ed25519, schnorr)")]
        algo: String,
    },
    /// Recover a wallet from an existing mnemonic phrase and save it
    Recover {
        #[arg(long, help = "The 12-word mnemonic phrase")]
        words: String,
        #[arg(long, default_value = "ecdsa", help = "Signature scheme (ecdsa, ed25519, schnorr)")]
        algo: String,
    },
    /// Sign a message with the active wallet
    Sign {
        message: String,
    },
    /// Show the active wallet's scheme and address
    Info,
    /// Compare derivation and signing speed across all schemes
    Benchmark,
}

pub fn execute_command(command: Commands) -> anyhow::Result<()> {
    let keystore = Keystore::open_default()?;
    let mut manager = WalletManager::new(keystore);
    match command {
        Commands::Create { algo } => ops::create_wallet(&mut manager, &algo),
        Commands::Recover { words, algo } => ops::recover_wallet(&mut manager, &words, &algo),
        Commands::Sign { message } => ops::sign_message(&manager, &message),
        Commands::Info => ops::show_info(&manager),
        Commands::Benchmark => ops::run_benchmark(&mut manager),
    }
}

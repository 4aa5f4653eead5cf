use std::time::{Duration, Instant};

use crate::constants::{BENCH_ITERATIONS, BENCH_PAYLOAD};
use crate::scheme::SCHEME_IDS;
use crate::types::WalletSummary;
use crate::wallet::WalletManager;

pub fn create_wallet(manager: &mut WalletManager, algo: &str) -> anyhow::Result<()> {
    let mnemonic = WalletManager::generate_mnemonic();
    println!("\nGenerating new wallet...");
    println!("{}", "-".repeat(50));
    println!("SECRET PHRASE: {}", mnemonic);
    println!("{}", "-".repeat(50));
    match manager.load_from_mnemonic(&mnemonic, algo, true) {
        Ok(summary) => print_summary(&summary, manager),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

pub fn recover_wallet(manager: &mut WalletManager, words: &str, algo: &str) -> anyhow::Result<()> {
    println!("\nRecovering wallet ({})...", algo.to_uppercase());
    match manager.load_from_mnemonic(words, algo, true) {
        Ok(summary) => print_summary(&summary, manager),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

pub fn sign_message(manager: &WalletManager, message: &str) -> anyhow::Result<()> {
    match manager.sign(message) {
        Ok(receipt) => {
            let display = serde_json::json!({
                "Message": &receipt.message,
                "Signature": receipt.signature_preview(),
                "Algorithm": &receipt.algorithm,
            });
            println!("\n--- MESSAGE SIGNED ---");
            println!("{}", serde_json::to_string_pretty(&display)?);
            println!("Took: {:.2} microseconds\n", receipt.elapsed_micros());
        }
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

pub fn show_info(manager: &WalletManager) -> anyhow::Result<()> {
    match manager.active() {
        Some(wallet) => {
            println!("\nActive wallet: {}", wallet.algo().to_uppercase());
            println!("Address: {}\n", wallet.address());
        }
        None => println!("\nNo wallet saved yet. Use `create` or `recover` first.\n"),
    }
    Ok(())
}

/// Time derivation and signing for each scheme with a throwaway mnemonic.
/// Loads run with persist off, so the keystore on disk is never touched.
pub fn run_benchmark(manager: &mut WalletManager) -> anyhow::Result<()> {
    println!("\n--- BENCHMARK ---");
    let mnemonic = WalletManager::generate_mnemonic();

    println!(
        "{:<10} {:>20} {:>20}",
        "Algo", "Derivation (1000x)", "Signing (1000x)"
    );
    for algo in SCHEME_IDS {
        let started = Instant::now();
        for _ in 0..BENCH_ITERATIONS {
            manager.load_from_mnemonic(&mnemonic, algo, false)?;
        }
        let derive_ms = extrapolated_ms(started.elapsed());

        // wallet is already loaded from the derivation pass
        let started = Instant::now();
        for _ in 0..BENCH_ITERATIONS {
            manager.sign(BENCH_PAYLOAD)?;
        }
        let sign_ms = extrapolated_ms(started.elapsed());

        println!("{:<10} {:>18.2}ms {:>18.2}ms", algo, derive_ms, sign_ms);
    }
    println!();
    Ok(())
}

/// Scale a 50-sample wall-clock reading up to a per-1000-operation figure.
fn extrapolated_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0 * (1000.0 / BENCH_ITERATIONS as f64)
}

fn print_summary(summary: &WalletSummary, manager: &WalletManager) {
    match &summary.save_error {
        None => println!("Wallet saved to {}", manager.keystore().path().display()),
        Some(err) => println!("Warning: wallet is active but was not saved: {}", err),
    }
    println!("\nAlgorithm: {}", summary.algorithm);
    println!("Address: {}", summary.address);
    println!("Private Key: {}", summary.private_key_preview);
    println!("Status: {}\n", summary.status);
}

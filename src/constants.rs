pub const WALLET_DIR: &str = ".polysig";
pub const KEYSTORE_FILE: &str = "keystore.json";

/// 16 bytes of entropy = 128-bit strength = 12 mnemonic words.
pub const MNEMONIC_ENTROPY_BYTES: usize = 16;

pub const KEY_PREVIEW_HEAD: usize = 6;
pub const KEY_PREVIEW_TAIL: usize = 4;
pub const SIG_PREVIEW_HEAD: usize = 32;
pub const SIG_PREVIEW_TAIL: usize = 32;

pub const BENCH_ITERATIONS: u32 = 50;
pub const BENCH_PAYLOAD: &str = "Benchmark Payload Test 12345";

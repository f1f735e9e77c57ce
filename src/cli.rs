use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shortcode-tools",
    version,
    about = "Base62 short codes and AES-ECB payload encryption"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Encryption key (16, 24 or 32 bytes); overrides CRYPTO_KEY"
    )]
    pub key: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a u32 as a base62 short code
    Encode { num: u32 },
    /// Decode a base62 short code
    Decode {
        #[arg(allow_hyphen_values = true)]
        code: String,
    },
    /// Encrypt text and print it as base64
    Encrypt { plaintext: String },
    /// Decrypt base64 ciphertext back to text
    Decrypt { ciphertext: String },
}

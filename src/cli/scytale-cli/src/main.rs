//! Scytale CLI - Command line interface.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scytale_ciphers::{
    auto_decrypt_caesar, brute_force_caesar, rank_caesar_candidates, Candidate, Cipher,
    CipherKind, Direction, KeyParams, SubstitutionKey,
};

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "scytale")]
#[command(about = "Scytale - Classical ciphers and Caesar cryptanalysis")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text", env = "SCYTALE_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported ciphers and the key material each needs
    List,
    /// Encrypt text
    Encrypt(TransformArgs),
    /// Decrypt text
    Decrypt(TransformArgs),
    /// Print every Caesar decryption (shifts 1-25)
    BruteForce(InputArgs),
    /// Recover a Caesar shift by frequency analysis
    Crack {
        /// Number of ranked candidates to show
        #[arg(long, default_value = "1")]
        top: usize,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Generate a random substitution alphabet
    Keygen,
}

#[derive(Args)]
struct TransformArgs {
    /// Cipher identifier (see `scytale list`)
    cipher: CipherKind,

    #[command(flatten)]
    key: KeyArgs,

    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
struct KeyArgs {
    /// Shift for caesar / hybrid
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Affine multiplier (coprime with 26)
    #[arg(long, allow_negative_numbers = true)]
    a: Option<i64>,

    /// Affine offset
    #[arg(long, allow_negative_numbers = true)]
    b: Option<i64>,

    /// Keyword for vigenere, columnar, playfair, autokey, beaufort
    #[arg(long, short)]
    keyword: Option<String>,

    /// Rail count for rail-fence
    #[arg(long, allow_negative_numbers = true)]
    rails: Option<i64>,

    /// Hill key matrix, row-major: A,B,C,D
    #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
    matrix: Option<[i64; 4]>,

    /// Substitution alphabet (26 letters)
    #[arg(long)]
    alphabet: Option<String>,
}

impl From<KeyArgs> for KeyParams {
    fn from(args: KeyArgs) -> Self {
        Self {
            shift: args.shift,
            a: args.a,
            b: args.b,
            keyword: args.keyword,
            rails: args.rails,
            matrix: args.matrix,
            alphabet: args.alphabet,
        }
    }
}

fn parse_matrix(s: &str) -> Result<[i64; 4], String> {
    let entries = s
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid matrix entry: {e}"))?;

    <[i64; 4]>::try_from(entries)
        .map_err(|v| format!("matrix needs 4 comma-separated entries, got {}", v.len()))
}

#[derive(Args)]
struct InputArgs {
    /// Text to process (read from stdin when omitted)
    text: Option<String>,

    /// Read the text from a file
    #[arg(long, short, conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(self) -> Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }

        if let Some(path) = self.file {
            return fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }

        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}

// ============================================================================
// Output Types
// ============================================================================

#[derive(Serialize)]
struct CipherInfo {
    id: CipherKind,
    key: &'static str,
    reciprocal: bool,
}

#[derive(Serialize)]
struct TransformOutput {
    cipher: CipherKind,
    direction: Direction,
    output: String,
}

#[derive(Serialize)]
struct BruteForceEntry {
    shift: u8,
    plaintext: String,
}

#[derive(Serialize)]
struct CrackOutput {
    shift: u8,
    plaintext: String,
    candidates: Vec<Candidate>,
}

#[derive(Serialize)]
struct KeygenOutput {
    alphabet: String,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Command Handlers
// ============================================================================

fn cmd_list(format: OutputFormat) -> Result<()> {
    let infos: Vec<CipherInfo> = CipherKind::ALL
        .iter()
        .map(|kind| CipherInfo {
            id: *kind,
            key: kind.key_requirement(),
            reciprocal: kind.is_reciprocal(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&infos),
        OutputFormat::Text => {
            println!("Ciphers:");
            for info in &infos {
                println!("  {:<14} key: {}", info.id, info.key);
            }
            Ok(())
        },
    }
}

fn cmd_transform(format: OutputFormat, args: TransformArgs, direction: Direction) -> Result<()> {
    let kind = args.cipher;
    let params = KeyParams::from(args.key);
    let cipher = Cipher::new(kind, &params).with_context(|| format!("Cannot build {kind}"))?;
    let text = args.input.read()?;

    tracing::debug!(cipher = %kind, %direction, len = text.len(), "running transform");

    let output = cipher.apply(&text, direction);

    match format {
        OutputFormat::Json => print_json(&TransformOutput {
            cipher: kind,
            direction,
            output,
        }),
        OutputFormat::Text => {
            println!("{}", output);
            Ok(())
        },
    }
}

fn cmd_brute_force(format: OutputFormat, input: InputArgs) -> Result<()> {
    let text = input.read()?;
    let entries: Vec<BruteForceEntry> = brute_force_caesar(&text)
        .into_iter()
        .map(|(shift, plaintext)| BruteForceEntry { shift, plaintext })
        .collect();

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for entry in &entries {
                println!("[{}] {}", entry.shift, entry.plaintext);
            }
            Ok(())
        },
    }
}

fn cmd_crack(format: OutputFormat, top: usize, input: InputArgs) -> Result<()> {
    if top == 0 {
        bail!("--top must be at least 1");
    }

    let text = input.read()?;
    if !text.chars().any(|c| c.is_ascii_alphabetic()) {
        tracing::warn!("input has no letters; every shift scores the same");
    }

    let (shift, plaintext) = auto_decrypt_caesar(&text);
    let mut candidates = rank_caesar_candidates(&text);
    candidates.truncate(top);

    match format {
        OutputFormat::Json => print_json(&CrackOutput {
            shift,
            plaintext,
            candidates,
        }),
        OutputFormat::Text => {
            println!("Best shift: {}", shift);
            println!("Decrypted:  {}", plaintext);
            if top > 1 {
                println!();
                println!("Candidates:");
                for c in &candidates {
                    println!("  [{:>2}] chi2={:>10.2}  {}", c.shift, c.score, c.plaintext);
                }
            }
            Ok(())
        },
    }
}

fn cmd_keygen(format: OutputFormat) -> Result<()> {
    let alphabet = SubstitutionKey::generate().alphabet();

    match format {
        OutputFormat::Json => print_json(&KeygenOutput { alphabet }),
        OutputFormat::Text => {
            println!("{}", alphabet);
            Ok(())
        },
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::List => cmd_list(format),
        Commands::Encrypt(args) => cmd_transform(format, args, Direction::Encrypt),
        Commands::Decrypt(args) => cmd_transform(format, args, Direction::Decrypt),
        Commands::BruteForce(input) => cmd_brute_force(format, input),
        Commands::Crack { top, input } => cmd_crack(format, top, input),
        Commands::Keygen => cmd_keygen(format),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_matrix() {
        assert_eq!(parse_matrix("3,3,2,5").unwrap(), [3, 3, 2, 5]);
        assert_eq!(parse_matrix(" -1, 2 ,3,4").unwrap(), [-1, 2, 3, 4]);
        assert!(parse_matrix("1,2,3").is_err());
        assert!(parse_matrix("1,2,x,4").is_err());
    }

    #[test]
    fn test_parse_encrypt_args() {
        let cli = Cli::try_parse_from([
            "scytale", "encrypt", "affine", "--a", "5", "--b", "-8", "HELLO",
        ])
        .unwrap();

        let Commands::Encrypt(args) = cli.command else {
            panic!("expected encrypt");
        };
        assert_eq!(args.cipher, CipherKind::Affine);
        assert_eq!(args.input.text.as_deref(), Some("HELLO"));
        let params = KeyParams::from(args.key);
        assert_eq!((params.a, params.b), (Some(5), Some(-8)));
    }

    #[test]
    fn test_unknown_cipher_rejected() {
        assert!(Cli::try_parse_from(["scytale", "encrypt", "enigma", "X"]).is_err());
    }
}

//! pwd-guard CLI entry point.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};

use pwd_guard::{
    generate_password, generate_passwords, hash_password, validate_password,
    GenerationRequest, PasswordPolicy, DEFAULT_GENERATED_LENGTH,
};

#[derive(Parser, Debug)]
#[command(name = "pwd-guard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Password security toolkit", long_about = None)]
#[command(after_help = "Example: pwd-guard validate 'MyP@ssw0rd'")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Hash a password using SHA-256
    Hash {
        /// Password to hash
        password: String,
    },

    /// Generate random passwords
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = DEFAULT_GENERATED_LENGTH)]
        length: usize,

        /// Number of passwords to generate
        #[arg(short, long, default_value_t = 1)]
        number: usize,

        /// Exclude special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Validate password against the policy
    Validate {
        /// Password to validate
        password: String,

        /// Show detailed validation results
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let policy = PasswordPolicy::from_env().context("failed to load password policy")?;
    tracing::debug!(min_length = policy.min_length(), "policy loaded");

    match command {
        Command::Hash { password } => hash(SecretString::new(password.into())),
        Command::Generate { length, number, no_special } => generate(
            &policy,
            GenerationRequest {
                length,
                include_special: !no_special,
                count: number,
            },
        ),
        Command::Validate { password, verbose } => {
            validate(&policy, SecretString::new(password.into()), verbose)
        }
    }
}

fn hash(password: SecretString) -> Result<()> {
    println!("Password: {}", password.expose_secret());
    println!("SHA-256 Hash: {}", hash_password(&password));
    Ok(())
}

fn generate(policy: &PasswordPolicy, request: GenerationRequest) -> Result<()> {
    if request.count == 1 {
        let password = generate_password(policy, request.length, request.include_special)?;
        println!("Generated Password: {}", password.expose_secret());
        println!("Length: {} characters", password.expose_secret().chars().count());
        println!("SHA-256 Hash: {}", hash_password(&password));
        return Ok(());
    }

    let passwords = generate_passwords(policy, &request)?;
    println!("Generated {} passwords:", passwords.len());
    println!("{}", "-".repeat(30));
    for (i, password) in passwords.iter().enumerate() {
        println!("{:2}. {}", i + 1, password.expose_secret());
    }
    Ok(())
}

fn validate(policy: &PasswordPolicy, password: SecretString, verbose: bool) -> Result<()> {
    let result = validate_password(&password, policy);
    let feedback = result.feedback(policy);

    println!("Password: {}", password.expose_secret());

    if verbose {
        println!("Valid: {}", if result.is_valid() { "YES" } else { "NO" });
        println!();
        println!("Validation Details:");
        println!("{}", "-".repeat(30));
        for (rule, passed) in result.iter() {
            println!("{:15}: {}", rule.name(), if passed { "pass" } else { "FAIL" });
        }

        if feedback.is_empty() {
            println!();
            println!("All requirements met!");
        } else {
            println!();
            println!("Issues found:");
            for issue in &feedback {
                println!("  - {issue}");
            }
        }
        return Ok(());
    }

    if result.is_valid() {
        println!("Status: Valid Password");
    } else {
        println!("Status: Password does not meet requirements");
        println!();
        println!("Issues:");
        for issue in &feedback {
            println!("  - {issue}");
        }
    }
    Ok(())
}

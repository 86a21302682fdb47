//! gRPC README Generator CLI
//!
//! Command-line interface for generating a package README from generated
//! betterproto client stubs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use grpc_readme_generator_common::{GeneratorError, ServiceStub};
use grpc_readme_generator_extractor::{scan_directory, scan_file};
use grpc_readme_generator_generator::{ReadmeGenerator, DEFAULT_PACKAGE_NAME};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit code for the expected "nothing to generate" outcome, distinct from
/// both success and hard failure so calling automation can branch on it.
const ABSENCE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "grpc-readme-generator")]
#[command(version, about = "Generate a README from generated betterproto client stubs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the generated stubs and display the extracted service metadata
    #[command(after_help = "EXAMPLES:\n  \
        # Scan the default generated/ directory\n  \
        grpc-readme-generator scan\n\n  \
        # Scan an explicit stub file\n  \
        grpc-readme-generator scan --file generated/greeter.py")]
    Scan {
        /// Directory containing the generated stub files
        #[arg(short, long, default_value = "generated")]
        dir: PathBuf,

        /// Explicit stub file (bypasses directory discovery)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate the README from the generated stubs
    #[command(after_help = "EXAMPLES:\n  \
        # Generate README.md from the default generated/ directory\n  \
        grpc-readme-generator generate\n\n  \
        # Generate with an explicit package name and output path\n  \
        grpc-readme-generator generate \\\n    \
        --package-name python_viu_api \\\n    \
        --output docs/README.md")]
    Generate {
        /// Directory containing the generated stub files
        #[arg(short, long, default_value = "generated")]
        dir: PathBuf,

        /// Explicit stub file (bypasses directory discovery)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Package name substituted into the README
        #[arg(short, long, default_value = DEFAULT_PACKAGE_NAME)]
        package_name: String,

        /// Output path, overwritten in full on each run
        #[arg(short, long, default_value = "README.md")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    let result = match cli.command {
        Commands::Scan { dir, file } => scan_command(&dir, file.as_deref(), cli.verbose),
        Commands::Generate {
            dir,
            file,
            package_name,
            output,
        } => generate_command(&dir, file.as_deref(), &package_name, &output, cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

/// Map errors to exit status: expected absence gets a message and the
/// distinct absence code; anything else is a hard failure with a diagnostic.
fn report_failure(err: &anyhow::Error) -> ExitCode {
    let absence = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<GeneratorError>())
        .filter(|source| source.is_absence());

    match absence {
        Some(source) => {
            println!("{} {}", "⚠".yellow(), source);
            println!("No gRPC service found!");
            ExitCode::from(ABSENCE_EXIT_CODE)
        }
        None => {
            eprintln!("{} {:?}", "✗".red(), err);
            ExitCode::FAILURE
        }
    }
}

/// Extract the service stub from an explicit file or by directory discovery
fn extract_stub(dir: &Path, file: Option<&Path>) -> Result<ServiceStub> {
    match file {
        Some(path) => {
            println!("{} Scanning stub file: {}", "→".cyan(), path.display());
            scan_file(path).context("Failed to extract service metadata")
        }
        None => {
            println!("{} Scanning directory: {}", "→".cyan(), dir.display());
            scan_directory(dir).context("Failed to extract service metadata")
        }
    }
}

fn scan_command(dir: &Path, file: Option<&Path>, verbose: bool) -> Result<()> {
    let stub = extract_stub(dir, file)?;

    println!("\n{}", "✓ Scan successful!".green().bold());
    println!("\n{}", "Service Stub:".bold());
    println!("  Service: {}", stub.service_name.yellow());
    println!("  Module: {}", stub.module_name.yellow());
    println!("  Methods: {}", stub.methods.len());

    if verbose {
        println!("\n{}", "Methods:".bold());
        for method in &stub.methods {
            match &method.response_type {
                Some(response) => println!(
                    "  • {}({}) -> {}",
                    method.name.cyan(),
                    method.request_type,
                    response
                ),
                None => println!("  • {}({})", method.name.cyan(), method.request_type),
            }
        }
    }

    Ok(())
}

fn generate_command(
    dir: &Path,
    file: Option<&Path>,
    package_name: &str,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    let stub = extract_stub(dir, file)?;

    println!(
        "{} Found service {} with {} methods",
        "✓".green(),
        stub.service_name.yellow(),
        stub.methods.len()
    );

    if verbose {
        println!("  Module: {}", stub.module_name);
        println!("  Package: {}", package_name);
        println!("  Output: {}", output.display());
    }

    println!("{} Rendering README...", "→".cyan());
    let generator =
        ReadmeGenerator::new(stub, package_name).context("Failed to create generator")?;
    generator
        .generate_to_file(output)
        .context("Failed to write README")?;

    println!("\n{}", "✓ README updated!".green().bold());
    println!("  📄 {}", output.display());

    Ok(())
}

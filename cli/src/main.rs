use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use jsonpb_haskell_compiler::error::GenError;
use jsonpb_haskell_compiler::{generate, read_descriptor_set, run, GeneratorConfig};

#[derive(Parser)]
#[command(name = "protoc-gen-jsonpb_haskell", version)]
#[command(about = "Generate proto-lens JSONPB instances; runs as a protoc plugin when no subcommand is given", long_about = None)]
struct Cli {
    /// Directory (and module prefix) of generated files
    #[arg(long, global = true)]
    output_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate from a `FileDescriptorSet` written by `protoc --descriptor_set_out --include_imports`
    Gen {
        /// Serialized `FileDescriptorSet`
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Proto file to generate (repeatable; defaults to every file in the set)
        #[arg(short, long)]
        file: Vec<String>,

        /// Root directory for generated files (if omitted, prints to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the schema model of a `FileDescriptorSet` as JSON
    Dump {
        /// Serialized `FileDescriptorSet`
        #[arg(short, long)]
        descriptor_set: PathBuf,
    },
}

fn main() -> ExitCode {
    // stdout carries the plugin response, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "generation failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), GenError> {
    let mut config = GeneratorConfig::default();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command {
        None => run(io::stdin().lock(), io::stdout().lock(), &config),

        Some(Commands::Gen { descriptor_set, file, out }) => {
            let files = read_descriptor_set(&fs::read(&descriptor_set)?)?;
            let requested = if file.is_empty() {
                files.iter().map(|f| f.path.clone()).collect()
            } else {
                file
            };

            let generated = generate(&requested, &files, &config)?;
            match out {
                Some(root) => {
                    for g in &generated {
                        write_artifact(&root, &g.name, &g.content)?;
                    }
                }
                None => {
                    for g in &generated {
                        println!("-- {}\n{}", g.name, g.content);
                    }
                }
            }
            Ok(())
        }

        Some(Commands::Dump { descriptor_set }) => {
            let files = read_descriptor_set(&fs::read(&descriptor_set)?)?;
            let json = serde_json::to_string_pretty(&files).map_err(io::Error::from)?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn write_artifact(root: &Path, name: &str, content: &str) -> Result<(), GenError> {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    tracing::info!(path = %path.display(), "wrote generated file");
    Ok(())
}

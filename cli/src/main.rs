use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use protowrap_compiler::error::ProtowrapError;
use protowrap_compiler::{generate, scan_file, GeneratorConfig};

#[derive(Parser)]
#[command(name = "protowrap")]
#[command(about = "Generate optional-access wrappers and deserializer descriptors from protobuf schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate both Scala artifacts from a schema directory
    Generate {
        /// Root of the schema tree
        #[arg(short, long, default_value = "schema/proto")]
        schema_dir: PathBuf,

        /// Glob applied beneath the schema directory
        #[arg(long, default_value = "**/*.proto")]
        pattern: String,

        /// Output path for the wrapper artifact
        #[arg(long, default_value = "OptionalProtos.scala")]
        wrapper_out: PathBuf,

        /// Output path for the registry artifact
        #[arg(long, default_value = "Deserializers.scala")]
        registry_out: PathBuf,

        /// Package of the wrapper artifact
        #[arg(long, default_value = "generated.optionals")]
        wrapper_package: String,

        /// Package of the registry artifact
        #[arg(long, default_value = "generated.deserializers")]
        registry_package: String,

        /// Package providing the Optional / OptionalStruct helpers
        #[arg(long, default_value = "generated.util")]
        support_package: String,

        /// Namespace assumed until a file declares java_package
        #[arg(long, default_value = "proto")]
        fallback_package: String,

        /// Package imported wildcard-style into both artifacts (repeatable)
        #[arg(long = "import-group")]
        import_groups: Vec<String>,
    },

    /// Scan a single schema file and print the parsed descriptors as JSON
    Scan {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Namespace assumed until the file declares java_package
        #[arg(long, default_value = "proto")]
        fallback_package: String,
    },
}

fn main() -> Result<(), ProtowrapError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema_dir,
            pattern,
            wrapper_out,
            registry_out,
            wrapper_package,
            registry_package,
            support_package,
            fallback_package,
            import_groups,
        } => {
            let config = GeneratorConfig {
                schema_dir,
                pattern,
                wrapper_out,
                registry_out,
                wrapper_package,
                registry_package,
                support_package,
                fallback_package,
                import_groups,
            };
            let report = generate(&config)?;
            println!(
                "Generated {} and {}",
                report.wrapper_out.display(),
                report.registry_out.display()
            );
            Ok(())
        }

        Commands::Scan { input, fallback_package } => {
            let scan = scan_file(&input, &fallback_package)?;
            println!("{}", serde_json::to_string_pretty(&scan)?);
            Ok(())
        }
    }
}

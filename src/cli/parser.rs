use clap::Parser;

#[derive(Parser)]
#[command(name = "qmd-uninstall")]
#[command(about = "Interactively remove QMD History Search", long_about = None)]
#[command(version = env!("BUILD_VERSION"))]
#[command(after_help = concat!("Built ", env!("BUILD_DATE")))]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all non-error log output
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,
}

use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "seolyzer")]
#[clap(about = "Website performance and SEO audit with AI recommendations", long_about = None)]
pub struct Cli {
    /// Debug-level logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Audit a website
    Analyze {
        url: String,
        /// Print the final result as JSON instead of a report
        #[clap(long)]
        json: bool,
        /// Skip the preliminary report and wait for the full analysis
        #[clap(long)]
        no_stage: bool,
    },
    /// Submit contact details to the lead intake
    Lead {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        phone: String,
        #[clap(long)]
        company: Option<String>,
        #[clap(long)]
        source: Option<String>,
    },
}

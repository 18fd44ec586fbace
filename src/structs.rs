use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the TOML config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}

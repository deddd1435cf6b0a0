use clap::Parser;
use listsapp::config::ListsConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lists", bin_name = "lists", version)]
#[command(about = "Serve todo lists kept in the browser session", long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "N")]
    pub port: Option<u16>,

    /// Keep sessions as files in this directory instead of in memory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, config: &mut ListsConfig) {
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

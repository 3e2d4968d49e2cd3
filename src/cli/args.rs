use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "Plan variable length subnets inside a classful IPv4 network."
)]
pub struct Args {
    #[arg(
        help = "Network address to subnet, e.g. 172.16.0.0.\nAsked for interactively when missing."
    )]
    pub network: Option<String>,

    #[arg(
        short = 'r',
        long = "requests",
        help = "Subnets as <hosts>:<reserve>(<count>), comma separated.\nExample: 150:20(3),30:50,2:0(2)"
    )]
    pub requests: Option<String>,

    #[arg(
        short = 'p',
        long = "prefix",
        conflicts_with = "mask",
        help = "Parent prefix length, at least the classful default.\nExample: 20"
    )]
    pub prefix: Option<String>,

    #[arg(
        short = 'm',
        long = "mask",
        help = "Parent subnet mask, alternative to --prefix.\nExample: 255.255.240.0"
    )]
    pub mask: Option<String>,

    #[arg(
        short = 'c',
        long = "config",
        conflicts_with_all = ["network", "requests"],
        help = "Read network and subnets from a JSON plan file."
    )]
    pub config: Option<PathBuf>,

    #[arg(long = "csv", help = "Export the plan as CSV to this file.")]
    pub csv: Option<PathBuf>,

    #[arg(long = "json", help = "Print the plan as JSON instead of text.")]
    pub json: bool,

    #[arg(
        long = "strict",
        help = "Fail on malformed subnet fragments instead of skipping them."
    )]
    pub strict: bool,

    #[arg(
        long = "no-prompt",
        help = "Never ask questions; missing input is an error."
    )]
    pub no_prompt: bool,
}

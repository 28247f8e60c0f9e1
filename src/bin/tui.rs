use anyhow::Result;
use clap::Parser;
use farpack::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", cli.resolve_config()?.to_toml_string()?);
        return Ok(());
    }
    farpack::tui::run(&cli)
}

use anyhow::Result;
use ginsight::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let code = cli.execute()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

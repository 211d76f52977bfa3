use anyhow::Result;
use clap::Parser;
use relq::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .init();

    let summary = relq::run(&config)?;
    println!("{}", summary);
    Ok(())
}

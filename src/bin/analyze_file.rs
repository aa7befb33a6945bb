//! Print the sentiment report for a UTF-8 file (or stdin) as pretty JSON.
//!
//! Usage: `analyze_file [PATH]`; no path or `-` reads stdin.

use std::io::Read as _;

use anyhow::Context as _;
use sentiment_report::{config::AppConfig, logging};

fn read_input(arg: Option<String>) -> anyhow::Result<String> {
    let bytes = match arg.as_deref() {
        None | Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
        Some(path) => std::fs::read(path).with_context(|| format!("reading {path}"))?,
    };
    String::from_utf8(bytes).map_err(|_| anyhow::anyhow!("input is not valid UTF-8"))
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cfg = AppConfig::load()?;
    logging::init(&cfg.logging);

    let text = read_input(std::env::args().nth(1))?;
    let analyzer = cfg.analysis.build_analyzer()?;
    let report = analyzer.analyze(&text)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

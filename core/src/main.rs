use std::io::Read;
use std::path::PathBuf;

use sse_transport::config::DEFAULT_CONFIG_FILE;
use sse_transport::{logging, Config, Transport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::var("SSE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = Config::load(&PathBuf::from(path))?;
    logging::init(config.log_file())?;

    let mut payload = Vec::new();
    std::io::stdin().read_to_end(&mut payload)?;

    let summary = Transport::new(config)?.send(&payload)?;
    println!("{summary}");
    Ok(())
}

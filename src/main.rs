use std::env;
use std::io;
use std::process;

use rusty_lari::{parse_args, run, Config, Error};

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = try_main().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn try_main() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let input_path = parse_args(&args)?;
    let config = Config::from_env();
    run(input_path, &config, io::stdout()).await
}

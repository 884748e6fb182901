// src/main.rs

use multi_timeout::cli::{self, Invocation};
use multi_timeout::errors::Result;
use multi_timeout::{logging, run};

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("multi-timeout: {err}");
            1
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32> {
    logging::init_logging()?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    match cli::parse_args(&argv)? {
        Invocation::Help => {
            print!("{}", cli::USAGE);
            Ok(0)
        }
        Invocation::Version => {
            println!("{}", cli::version());
            Ok(0)
        }
        Invocation::Run { command, timeouts } => run(&command, timeouts).await,
    }
}

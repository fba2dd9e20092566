use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = signpost::cli::Cli::parse();
    if let Err(e) = signpost::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

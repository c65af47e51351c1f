use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    text2slide_cli::run_cli().await
}

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    soporte::cli::init_tracing();
    soporte::cli::run().await?;
    Ok(())
}

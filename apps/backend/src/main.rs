#[tokio::main]
async fn main() -> anyhow::Result<()> {
    buddystudy_backend::run().await
}

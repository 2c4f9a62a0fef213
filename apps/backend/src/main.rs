#[tokio::main]
async fn main() -> anyhow::Result<()> {
    daily_note_backend::run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcard_generator::run().await
}

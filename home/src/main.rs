use blog_home::{Config, Session, UiEvent};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the rendered list only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "starting");
    let session = Session::new(&config)?;

    let (events_tx, events_rx) = mpsc::channel(32);
    let (frames_tx, mut frames_rx) = mpsc::unbounded_channel::<String>();

    let printer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(frame) = frames_rx.recv().await {
            stdout.write_all(frame.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if events_tx.send(UiEvent::Input(line)).await.is_err() {
                return;
            }
        }
        let _ = events_tx.send(UiEvent::Finish).await;
    });

    session.run(events_rx, frames_tx).await;
    reader.abort();
    printer.await??;
    Ok(())
}

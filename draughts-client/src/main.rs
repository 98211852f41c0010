use anyhow::Result;
use draughts_client::{cli, ClientSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = ClientSettings::load();

    // 初始化日志，RUST_LOG 优先
    let level = settings.log_level.as_directive();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("draughts={}", level).parse()?)
                .add_directive(format!("draughts_client={}", level).parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(&settings, &args, &mut std::io::stdout()).await
}

use std::net::SocketAddr;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use courseadmin::app;
use courseadmin::data::store::{Department, MemoryCourseStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Stage {
    Local,
    Prod,
}

#[derive(Parser)]
struct Args {
    /// Socket address to bind
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Deployment stage; picks the default log filter
    #[arg(long, value_enum, default_value_t = Stage::Local)]
    stage: Stage,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                match args.stage {
                    Stage::Local => [
                        "backend=debug",         // code in this file
                        "courseadmin=debug",     // code in this crate (but not this file)
                        "tower_http=debug",      // http request/response pairs
                        "axum::rejection=trace", // extractor rejections (i.e. bad form input)
                    ]
                    .join(","),
                    Stage::Prod => ["backend=info", "courseadmin=info", "tower_http=info"].join(","),
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = MemoryCourseStore::seeded([
        department("csc", "Computer Science"),
        department("math", "Mathematics"),
        department("engr", "Engineering"),
        department("phys", "Physics"),
    ]);

    // build our application with a route
    let app = app::make_app(store);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| anyhow!("failed to bind listener to {}", args.bind))?;
    info!("listening on http://{}", args.bind);

    axum::serve(listener, app)
        .await
        .context("error while serving app")?;

    Ok(())
}

fn department(id: &str, name: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
    }
}

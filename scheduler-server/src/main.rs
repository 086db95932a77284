mod cli;
mod routes;

use std::{env, fs, io, path::Path, process, sync::Arc};

use tokio::{net::TcpListener, signal, sync::RwLock, task};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use scheduler_core::{
    load_initial_schedule, Clock, ResourceCatalog, ScheduleController, ScheduleSource,
    SystemClock, TemplateEntry,
};

const DEFAULT_LOG_FILTER: &str = "scheduler_server=info,scheduler_core=info";

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    init_tracing();

    let source = match &args.template {
        Some(path) => match read_template(path) {
            Ok(template) => ScheduleSource {
                catalog: ResourceCatalog::sample(),
                template,
            },
            Err(err) => {
                eprintln!("Failed to read template `{}`: {err}", path.display());
                process::exit(1);
            }
        },
        None => ScheduleSource::sample(),
    };

    let controller = Arc::new(RwLock::new(ScheduleController::default()));
    let delay = args.delay;
    let shutdown = CancellationToken::new();

    task::spawn({
        let controller = Arc::clone(&controller);
        let shutdown = shutdown.clone();
        async move {
            let outcome =
                load_initial_schedule(&source, SystemClock.now(), delay, &shutdown).await;
            controller.write().await.install(outcome);
        }
    });

    let listener = TcpListener::bind(args.address).await?;
    info!(address = %args.address, "listening");

    axum::serve(listener, routes::router(controller))
        .with_graceful_shutdown(async move {
            if let Err(err) = signal::ctrl_c().await {
                error!(error = %err, "failed to listen for shutdown signal");
            }
            shutdown.cancel();
        })
        .await
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn read_template(path: &Path) -> Result<Vec<TemplateEntry>, String> {
    let raw = fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&raw).map_err(|err| err.to_string())
}

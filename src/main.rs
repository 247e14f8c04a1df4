mod api;
mod config;
mod datastore;
mod log;
mod model;

use dotenv::dotenv;
use std::env;
use tokio::runtime::Builder;
use tracing::{error, event, Level};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();

    let cfg = match env::var("TASKD_CONFIG") {
        Ok(path) => match config::Config::from_file(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("unable to read config '{}': {}", path, err);
                std::process::exit(1);
            }
        },
        Err(_) => config::Config::default(),
    };

    let env_filter = EnvFilter::try_from_env("TASKD_LOG");
    log::setup(env_filter, &cfg.log);

    event!(Level::INFO, "Starting taskd: {}", env!("CARGO_PKG_VERSION"));

    let store = datastore::MemoryTaskStore::new();
    let scope = api::RequestScope::new(store);
    let server = api::Server::new(cfg.listen, scope);

    let runtime = Builder::new_multi_thread()
        .thread_name("http-api")
        .enable_all()
        .build()
        .expect("[http-api] failed to create runtime");

    if let Err(err) = runtime.block_on(server.start()) {
        error!(reason = %err, "server terminated");
        std::process::exit(1);
    }
}

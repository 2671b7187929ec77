#![recursion_limit = "256"]

use lambda_runtime::{Error, service_fn};
use rag_extract::lambda::handle_request;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    lambda_runtime::run(service_fn(handle_request)).await
}

use lambda_http::{run, tracing, Error};
use linestore::{routes, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let state = AppState::new().await;

    run(routes::router(state)).await
}

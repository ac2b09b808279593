use lambda_http::{run, tracing, Error};
use std::env::set_var;

use api::config::AppConfig;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let config = AppConfig::from_env()?;

    match config.bind_address {
        Some(address) => {
            tracing_subscriber::fmt().init();

            let state = AppState::from_config(&config).await;
            let app = api::app(state, config.admin_routes);

            let listener = tokio::net::TcpListener::bind(address).await?;
            tracing::info!("Listening on {}", address);
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => {
            // required to enable CloudWatch error logging by the runtime
            tracing::init_default_subscriber();

            let state = AppState::from_config(&config).await;
            run(api::app(state, config.admin_routes)).await
        }
    }
}

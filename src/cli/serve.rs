use crate::{config::Config, error, server};

pub async fn serve(config: &Config) {
    config.describe();

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped: {}", e);
    }
}

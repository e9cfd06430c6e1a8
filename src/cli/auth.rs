use crate::{config::Config, error, info, spotify::SpotifyClient, success, warning};

fn client(config: &Config) -> SpotifyClient {
    match SpotifyClient::from_config(config) {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    }
}

pub fn auth_url(config: &Config, open: bool) {
    let url = match client(config).authorize_url() {
        Ok(url) => url,
        Err(e) => error!("{}", e),
    };

    info!("Authorize the application by visiting:\n{}", url);

    if open && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}

pub async fn token(config: &Config, code: &str) {
    match client(config).exchange_code(code).await {
        Ok(token) => {
            success!("Authorization code exchanged");
            match serde_json::to_string_pretty(&token) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Cannot print token. Err: {}", e),
            }
        }
        Err(e) => error!("{}", e),
    }
}

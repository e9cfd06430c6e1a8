use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    error,
    management::PlaylistGenerator,
    success,
    types::{MoodRequest, SongTableRow},
    warning,
};

pub async fn generate(config: &Config, token: &str, num_songs: u32, mood: &str) {
    let generator = match PlaylistGenerator::from_config(config) {
        Ok(generator) => generator,
        Err(e) => error!("Cannot create playlist generator. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Generating playlist for \"{mood}\"..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    match ProgressStyle::with_template("{spinner:.blue} {msg}") {
        Ok(style) => pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")),
        Err(e) => warning!("Invalid spinner template: {}", e),
    }

    let request = MoodRequest::new(mood, num_songs);
    let result = generator.generate(&request, token).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => {
            success!(
                "Created \"{}\" with {} of {} songs",
                playlist.playlist_name,
                playlist.songs.len(),
                num_songs
            );

            let rows: Vec<SongTableRow> = playlist.songs.iter().map(SongTableRow::from).collect();
            println!("{}", Table::new(rows));

            if let Some(url) = playlist.spotify_playlist_url {
                println!("{}", url);
            }
        }
        Err(e) => error!("{}", e),
    }
}

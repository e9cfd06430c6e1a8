use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodlist::{cli, config, error, types::DEFAULT_NUM_SONGS, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP service
    Serve,

    /// Print the Spotify authorization URL
    AuthUrl(AuthUrlOptions),

    /// Exchange an authorization code for an access token
    Token(TokenOptions),

    /// Generate a playlist for a mood
    Generate(GenerateOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthUrlOptions {
    /// Open the URL in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    /// Authorization code received on the redirect URI
    pub code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Spotify access token
    #[clap(long, env = "SPOTIFY_ACCESS_TOKEN")]
    pub token: String,

    /// Number of songs to put in the playlist
    #[clap(long, default_value_t = DEFAULT_NUM_SONGS, value_parser = utils::parse_num_songs)]
    pub songs: u32,

    /// Free-text mood description
    #[clap(required = true, num_args = 1..)]
    pub mood: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Serve => cli::serve(&config).await,
        Command::AuthUrl(opt) => cli::auth_url(&config, opt.open),
        Command::Token(opt) => cli::token(&config, &opt.code).await,
        Command::Generate(opt) => {
            cli::generate(&config, &opt.token, opt.songs, &opt.mood.join(" ")).await
        }
        Command::Completions(_) => {}
    }
}

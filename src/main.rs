use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use fancam::{cli, config, error, logging, types::SortMode};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP backend
    Serve,

    /// Show an artist's top tracks with video links
    TopTracks(TopTracksOptions),

    /// Show artists similar to an artist
    Similar(SimilarOptions),

    /// List cached video links
    Cache(CacheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Artist name as known to Last.fm
    pub artist: String,

    /// Ranking of the tracks
    #[clap(long, value_enum, default_value_t = SortMode::Popularity)]
    pub sort: SortMode,
}

#[derive(Parser, Debug, Clone)]
pub struct SimilarOptions {
    /// Artist name as known to Last.fm
    pub artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CacheOptions {
    /// Only show keys containing this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            logging::init_logging(logging::SERVER_DIRECTIVES);
            cli::serve().await
        }
        Command::TopTracks(opt) => {
            logging::init_logging(logging::CLI_DIRECTIVES);
            cli::top_tracks(opt.artist, opt.sort).await
        }
        Command::Similar(opt) => {
            logging::init_logging(logging::CLI_DIRECTIVES);
            cli::similar(opt.artist).await
        }
        Command::Cache(opt) => {
            logging::init_logging(logging::CLI_DIRECTIVES);
            cli::cache(opt.search).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

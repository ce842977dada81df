use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use yamsync::{cli, config, warning};

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
    /// Manage playlists on the remote library
    Playlists(PlaylistsOptions),

    /// Mirror playlists to the local output directory
    Download(DownloadOptions),

    /// List liked tracks that are in no playlist
    Orphans,

    /// Route orphaned liked tracks into playlists by authorship rules
    Distribute,

    /// Remove every track from the rule-target playlists
    Purge,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Manage playlists on the remote library",
    args_conflicts_with_subcommands = true
)]
pub struct PlaylistsOptions {
    /// Subcommands under `playlists` (e.g., `create`)
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// Create a playlist
    Create(PlaylistsCreateOpts),

    /// Rename a playlist
    Rename(PlaylistsRenameOpts),

    /// Delete a playlist
    Delete(PlaylistsDeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsCreateOpts {
    /// Title of the new playlist
    pub title: String,

    /// Make the playlist publicly visible
    #[clap(long)]
    pub public: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsRenameOpts {
    /// Kind of the playlist to rename
    pub kind: u32,

    /// New title
    pub title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsDeleteOpts {
    /// Kind of the playlist to delete
    pub kind: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Playlist kind(s) to mirror; all playlists when omitted
    #[clap(long = "kind")]
    pub kinds: Vec<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Ctrl-C aborts at the next await point; half-written mirror files are
    // left behind and picked up (or not) by the next run's dedup scan.
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            warning!("Interrupted.");
        }
        _ = run(cli) => {}
    }
}

async fn run(cli: Cli) {
    match cli.command {
        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Create(o)) => cli::create_playlist(o.title, o.public).await,
            Some(PlaylistsSubcommand::Rename(o)) => cli::rename_playlist(o.kind, o.title).await,
            Some(PlaylistsSubcommand::Delete(o)) => cli::delete_playlist(o.kind).await,
            None => cli::list_playlists().await,
        },

        Command::Download(opt) => cli::download(opt.kinds).await,
        Command::Orphans => cli::orphans().await,
        Command::Distribute => cli::distribute().await,
        Command::Purge => cli::purge().await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

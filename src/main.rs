use anyhow::{Context, Result};
use clap::Parser;
use music_playlist::crawler::LoftyTagSource;
use music_playlist::render::render_table;
use music_playlist::{codec, CrawlConfig, MusicCrawler, PlaylistError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "music-playlist")]
#[command(about = "Build, play through and save music playlists", long_about = None)]
struct Args {
    /// Directory of audio files to build the playlist from
    #[arg(short = 'd', long, conflicts_with = "load", required_unless_present = "load")]
    dir: Option<String>,

    /// Load a previously saved playlist instead of scanning a directory
    #[arg(short = 'l', long)]
    load: Option<String>,

    /// Playlist name (also used for the saved file name)
    #[arg(short = 'n', long, default_value = "My Playlist")]
    name: String,

    /// Scan subdirectories too
    #[arg(short = 'r', long)]
    recursive: bool,

    /// File extensions to pick up (can be specified multiple times)
    #[arg(long = "ext", default_value = "mp3")]
    extensions: Vec<String>,

    /// Start over from the first song after the last one
    #[arg(long)]
    repeat: bool,

    /// Shuffle the song order when playback starts
    #[arg(long)]
    shuffle: bool,

    /// Advance playback this many times before saving
    #[arg(short = 'p', long, default_value = "0")]
    play: usize,

    /// Directory to save the playlist into
    #[arg(short = 'o', long, default_value = ".")]
    output: String,

    /// Don't write the playlist file
    #[arg(long)]
    no_save: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut playlist = if let Some(load) = &args.load {
        let path = PathBuf::from(shellexpand::tilde(load).as_ref());
        codec::load(&path).with_context(|| format!("Failed to load playlist: {:?}", path))?
    } else {
        let dir = args.dir.as_deref().unwrap_or(".");
        let root = PathBuf::from(shellexpand::tilde(dir).as_ref());
        let config = CrawlConfig::new(root)
            .with_extensions(&args.extensions)
            .recursive(args.recursive);

        let crawler = MusicCrawler::new(config, LoftyTagSource::new());
        crawler.generate_playlist(&args.name)?
    };

    if args.repeat {
        playlist.set_repeat(true);
    }
    if args.shuffle {
        playlist.set_shuffle(true);
    }

    println!("{}", render_table(playlist.rows()));
    println!("Total length: {} seconds", playlist.total_length());

    for i in 0..args.play {
        match playlist.next_song() {
            Ok(song) => log::info!("[{}/{}] Now playing: {}", i + 1, args.play, song),
            Err(PlaylistError::Exhausted) => {
                log::info!("End of playlist reached after {} song(s)", i);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if !args.no_save {
        let output = PathBuf::from(shellexpand::tilde(&args.output).as_ref());
        let path = codec::save(&playlist, &output)
            .with_context(|| format!("Failed to save playlist to {:?}", output))?;
        log::info!("Playlist saved to: {:?}", path);
    }

    Ok(())
}

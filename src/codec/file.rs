//! Reading and writing playlist files

use super::{deserialize, serialize};
use crate::error::{PlaylistError, Result};
use crate::model::Playlist;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name for a playlist, plus `.json`
///
/// Spaces and path separators (`/`, `\`) become hyphens, so the file always
/// lands directly in the directory passed to [`save`].
pub fn file_name(playlist_name: &str) -> String {
    let stem: String = playlist_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            c => c,
        })
        .collect();
    format!("{}.json", stem)
}

/// Write a playlist as pretty-printed JSON, indented by four spaces
pub fn write_json<W: Write>(playlist: &Playlist, writer: W) -> Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    serialize(playlist).serialize(&mut serializer)?;
    serializer
        .into_inner()
        .flush()
        .map_err(serde_json::Error::io)?;
    Ok(())
}

/// Write a playlist into `dir` and return the path of the new file
///
/// The document is written to a temporary file in `dir` first and then
/// renamed over the target, so readers never see a half-written playlist.
pub fn save(playlist: &Playlist, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(playlist.name()));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PlaylistError::io(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();
    write_json(playlist, BufWriter::new(&mut tmp)).map_err(|e| match e {
        PlaylistError::Json(e) if e.is_io() => PlaylistError::io(&tmp_path, e.into()),
        e => e,
    })?;
    tmp.persist(&path)
        .map_err(|e| PlaylistError::io(&path, e.error))?;

    log::info!(
        "Saved playlist {:?} ({} songs) to {:?}",
        playlist.name(),
        playlist.len(),
        path
    );
    Ok(path)
}

/// Read a playlist file written by [`save`]
pub fn load(path: &Path) -> Result<Playlist> {
    let text = fs::read_to_string(path).map_err(|e| PlaylistError::io(path, e))?;
    let document: Value = serde_json::from_str(&text)?;
    let playlist = deserialize(&document)?;

    log::info!(
        "Loaded playlist {:?} ({} songs, {} played) from {:?}",
        playlist.name(),
        playlist.len(),
        playlist.played().len(),
        path
    );
    Ok(playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;
    use tempfile::TempDir;

    fn playlist() -> Playlist {
        let mut playlist = Playlist::new("Rihanna Playlist");
        playlist.add_song(Song::new("Stay", "Rihanna", "Unapologetic", "0:4:0").unwrap());
        playlist
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Rihanna Playlist"), "Rihanna-Playlist.json");
        assert_eq!(file_name("a  b"), "a--b.json");
        assert_eq!(file_name(""), ".json");
        assert_eq!(file_name("AC/DC Live"), "AC-DC-Live.json");
        assert_eq!(file_name("..\\up/../out"), "..-up-..-out.json");
    }

    #[test]
    fn test_save_name_with_path_separators() {
        let dir = TempDir::new().unwrap();
        let mut p = Playlist::new("AC/DC ../Best");
        p.add_song(Song::new("Back in Black", "AC/DC", "Back in Black", "0:4:15").unwrap());

        let path = save(&p, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("AC-DC-..-Best.json"));
        assert_eq!(path.parent().unwrap(), dir.path());
        assert_eq!(load(&path).unwrap(), p);
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = save(&playlist(), &dir.path().join("missing"));
        assert!(matches!(result, Err(PlaylistError::Io { .. })));
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let mut buf = Vec::new();
        write_json(&playlist(), &mut buf).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.starts_with("{\n    \"name\": \"Rihanna Playlist\","));
        assert!(json.contains("\n            \"duration\": {\n                \"hours\": 0,"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut original = playlist();
        original.next_song().unwrap();

        let path = save(&original, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Rihanna-Playlist.json"));

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let mut p = playlist();
        save(&p, dir.path()).unwrap();

        p.add_song(Song::new("Umbrella", "Rihanna", "GGGB", "0:4:35").unwrap());
        let path = save(&p, dir.path()).unwrap();

        assert_eq!(load(&path).unwrap().len(), 2);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();

        let missing = load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(PlaylistError::Io { .. })));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(load(&garbled), Err(PlaylistError::Json(_))));

        let wrong_shape = dir.path().join("shape.json");
        fs::write(&wrong_shape, r#"{"name": 1}"#).unwrap();
        assert!(matches!(load(&wrong_shape), Err(PlaylistError::Type(_))));
    }
}

//! High-score persistence: a single decimal integer in a plain text file.

use bevy::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

/// Best score seen so far. `just_beaten` is set when the most recent round
/// exceeded the stored value, which drives the congratulations line on the
/// game-over screen.
#[derive(Resource, Default)]
pub struct Highscore {
    pub value: u32,
    pub just_beaten: bool,
}

/// Read the high score from `path`. A missing file or non-numeric content
/// is treated as a score of 0; neither surfaces an error.
pub fn load(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                debug!("ignoring malformed high score file {}", path.display());
                0
            }
        },
        Err(_) => 0,
    }
}

/// Write `value` to `path` as decimal text, replacing any previous content.
pub fn save(path: &Path, value: u32) -> io::Result<()> {
    fs::write(path, value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake_game_{}_{}", std::process::id(), name))
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_file("roundtrip.txt");

        save(&path, 42).unwrap();
        assert_eq!(load(&path), 42);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let path = scratch_file("does_not_exist.txt");
        assert_eq!(load(&path), 0);
    }

    #[test]
    fn malformed_content_loads_as_zero() {
        let path = scratch_file("malformed.txt");
        fs::write(&path, "not a number").unwrap();

        assert_eq!(load(&path), 0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let path = scratch_file("whitespace.txt");
        fs::write(&path, " 17\n").unwrap();

        assert_eq!(load(&path), 17);

        fs::remove_file(&path).unwrap();
    }
}

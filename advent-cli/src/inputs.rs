//! Puzzle input resolution
//!
//! Inputs live on disk under the `day{N}input.txt` convention. A handful
//! of locations are tried in order so the binary works whether it is
//! launched from the repository root or from next to the input files;
//! solvers themselves never see a path, only the file contents.

use std::fs;
use std::path::{Path, PathBuf};

use advent_solver::input_file_name;
use thiserror::Error;

/// Input lookup failures
#[derive(Debug, Error)]
pub enum InputError {
    /// No candidate location had the file
    #[error("input file {file_name:?} not found; searched {}", list_paths(.searched))]
    NotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves and reads day input files.
pub struct InputLocator {
    input_dir: PathBuf,
}

impl InputLocator {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Candidate locations for a file, most specific first.
    fn candidates(&self, file_name: &str) -> Vec<PathBuf> {
        let mut candidates = vec![
            self.input_dir.join(file_name),
            Path::new("inputs").join(file_name),
            PathBuf::from(file_name),
        ];
        candidates.dedup();
        candidates
    }

    /// Find and read the input for a day.
    pub fn read_day(&self, day: u8) -> Result<String, InputError> {
        let file_name = input_file_name(day);
        let searched = self.candidates(&file_name);
        let Some(found) = searched.iter().find(|path| path.is_file()) else {
            return Err(InputError::NotFound {
                file_name,
                searched,
            });
        };
        fs::read_to_string(found).map_err(|source| InputError::Unreadable {
            path: found.clone(),
            source,
        })
    }
}

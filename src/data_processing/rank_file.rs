use crate::error::ProcessError;
use std::collections::HashMap;
use std::path::Path;

/// A contest's standings as read from a rank file: handle -> 1-based rank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankList {
    pub ranks: HashMap<String, usize>,
    /// Number of non-blank lines consumed, each of which advanced the rank.
    pub lines_read: usize,
    /// Handles that appeared on more than one line, sorted.
    pub duplicates: Vec<String>,
}

impl RankList {
    /// Builds the standings from lines in finishing order. A handle listed twice
    /// keeps the rank of its last line.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ranks = HashMap::new();
        let mut duplicates = vec![];
        let mut lines_read = 0;

        for line in lines {
            let handle = line.trim_end();
            if handle.is_empty() {
                continue;
            }
            lines_read += 1;
            if ranks.insert(handle.to_owned(), lines_read).is_some() {
                duplicates.push(handle.to_owned());
            }
        }
        duplicates.sort_unstable();
        duplicates.dedup();

        Self {
            ranks,
            lines_read,
            duplicates,
        }
    }

    pub fn has_duplicates(&self) -> bool {
        self.ranks.len() != self.lines_read
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Reads a rank file holding one handle per line, best finisher first.
pub fn read_rank_file(path: impl AsRef<Path>) -> Result<RankList, ProcessError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ProcessError::io(path, e))?;
    let rank_list = RankList::from_lines(contents.lines());

    if rank_list.has_duplicates() {
        tracing::error!(
            "Duplicate handles provided in {:?}: {:?}",
            path,
            rank_list.duplicates
        );
    }
    tracing::info!(
        "Read {} ranked handles from {:?}",
        rank_list.len(),
        path
    );
    Ok(rank_list)
}

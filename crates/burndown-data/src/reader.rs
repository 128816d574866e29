//! Board export discovery and loading for wekan-burndown.
//!
//! Reads the `.json` files produced by wekan's "export board" action and
//! converts them into [`BoardExport`] structs for downstream resolution.

use std::path::{Path, PathBuf};

use burndown_core::error::{BurndownError, Result};
use burndown_core::models::{Board, BoardList, Card};
use burndown_core::time_utils;
use tracing::{debug, warn};

// ── BoardExport ───────────────────────────────────────────────────────────────

/// One parsed board export file: the board header plus its lists and cards.
#[derive(Debug, Clone)]
pub struct BoardExport {
    /// The exported board.
    pub board: Board,
    /// Lists (columns) belonging to the board.
    pub lists: Vec<BoardList>,
    /// Cards belonging to the board, in file order.
    pub cards: Vec<Card>,
    /// File the export was read from.
    pub source: PathBuf,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` files recursively under `data_path`, sorted by path.
pub fn find_export_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load and parse every board export under `data_path`.
///
/// A file that cannot be read or is not a board export is skipped with a
/// warning; a malformed list or card entry inside an otherwise valid export
/// is skipped with a debug log. Returns an error when the directory itself
/// is missing or holds no export files at all, so "no board data" is never
/// confused with "board matched, zero cards".
pub fn load_board_exports(data_path: &Path) -> Result<Vec<BoardExport>> {
    if !data_path.exists() {
        return Err(BurndownError::DataPathNotFound(data_path.to_path_buf()));
    }

    let files = find_export_files(data_path);
    if files.is_empty() {
        return Err(BurndownError::NoExportFiles(data_path.to_path_buf()));
    }

    let mut exports: Vec<BoardExport> = Vec::new();
    for file_path in &files {
        match parse_export_file(file_path) {
            Ok(export) => exports.push(export),
            Err(e) => {
                warn!("Skipping {}: {}", file_path.display(), e);
            }
        }
    }

    debug!(
        "Loaded {} board exports from {} files",
        exports.len(),
        files.len()
    );

    Ok(exports)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse a single export file into a [`BoardExport`].
fn parse_export_file(path: &Path) -> Result<BoardExport> {
    let content = std::fs::read_to_string(path).map_err(|source| BurndownError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data: serde_json::Value = serde_json::from_str(&content)?;

    // The board header lives at the top level of the export document.
    let title = data
        .get("title")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            BurndownError::Config(format!("{} has no board title", path.display()))
        })?
        .to_string();
    let id = string_field(&data, "_id").unwrap_or_default();
    let board = Board { id, title };

    let mut lists: Vec<BoardList> = Vec::new();
    let mut skipped_lists = 0u64;
    for value in array_field(&data, "lists") {
        match map_to_list(value, &board.id) {
            Some(list) => lists.push(list),
            None => skipped_lists += 1,
        }
    }

    let mut cards: Vec<Card> = Vec::new();
    let mut skipped_cards = 0u64;
    for value in array_field(&data, "cards") {
        match map_to_card(value, &board.id) {
            Some(card) => cards.push(card),
            None => skipped_cards += 1,
        }
    }

    debug!(
        "Export {}: board \"{}\", {} lists ({} skipped), {} cards ({} skipped)",
        path.display(),
        board.title,
        lists.len(),
        skipped_lists,
        cards.len(),
        skipped_cards,
    );

    Ok(BoardExport {
        board,
        lists,
        cards,
        source: path.to_path_buf(),
    })
}

/// Map a raw list entry to a [`BoardList`], returning `None` when the title
/// is absent.
fn map_to_list(data: &serde_json::Value, board_id: &str) -> Option<BoardList> {
    let title = data.get("title")?.as_str()?.to_string();
    Some(BoardList {
        id: string_field(data, "_id").unwrap_or_default(),
        title,
        board_id: string_field(data, "boardId").unwrap_or_else(|| board_id.to_string()),
    })
}

/// Map a raw card entry to a [`Card`], returning `None` when the title is
/// absent. Timestamps that fail to parse are dropped to `None` rather than
/// rejecting the card; the aggregator skips the card if the selected field
/// ends up missing.
fn map_to_card(data: &serde_json::Value, board_id: &str) -> Option<Card> {
    let title = data.get("title")?.as_str()?.to_string();

    let created_at = string_field(data, "createdAt")
        .as_deref()
        .and_then(time_utils::parse_timestamp);
    let date_last_activity = string_field(data, "dateLastActivity")
        .as_deref()
        .and_then(time_utils::parse_timestamp);

    Some(Card {
        id: string_field(data, "_id").unwrap_or_default(),
        title,
        board_id: string_field(data, "boardId").unwrap_or_else(|| board_id.to_string()),
        list_id: string_field(data, "listId").unwrap_or_default(),
        created_at,
        date_last_activity,
    })
}

/// Extract a string field from a JSON object, `None` when absent or not a
/// string.
fn string_field(data: &serde_json::Value, key: &str) -> Option<String> {
    data.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Iterate an array field, yielding nothing when the field is absent or not
/// an array.
fn array_field<'a>(
    data: &'a serde_json::Value,
    key: &str,
) -> impl Iterator<Item = &'a serde_json::Value> {
    data.get(key)
        .and_then(|v| v.as_array())
        .map(|a| a.iter())
        .into_iter()
        .flatten()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_export(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    fn sample_export(board_title: &str) -> String {
        serde_json::json!({
            "_id": "board-1",
            "title": board_title,
            "lists": [
                {"_id": "list-1", "title": "Backlog", "boardId": "board-1"},
                {"_id": "list-2", "title": "Done", "boardId": "board-1"},
            ],
            "cards": [
                {
                    "_id": "card-1",
                    "title": "Fix bug (3)",
                    "boardId": "board-1",
                    "listId": "list-2",
                    "createdAt": "2018-02-09T10:00:00.000Z",
                    "dateLastActivity": "2018-02-14T22:01:52.334Z",
                },
                {
                    "_id": "card-2",
                    "title": "Write docs",
                    "boardId": "board-1",
                    "listId": "list-1",
                    "createdAt": "2018-02-10T09:00:00.000Z",
                    "dateLastActivity": "2018-02-10T09:00:00.000Z",
                },
            ],
        })
        .to_string()
    }

    // ── find_export_files ─────────────────────────────────────────────────────

    #[test]
    fn test_find_export_files_in_flat_dir() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "a.json", "{}");
        write_export(dir.path(), "b.json", "{}");
        write_export(dir.path(), "notes.txt", "ignored");

        let files = find_export_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "json"));
    }

    #[test]
    fn test_find_export_files_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("archive");
        std::fs::create_dir_all(&sub).unwrap();
        write_export(dir.path(), "root.json", "{}");
        write_export(&sub, "nested.json", "{}");

        let files = find_export_files(dir.path());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_find_export_files_nonexistent_path() {
        let files = find_export_files(Path::new("/tmp/does-not-exist-burndown-test-xyz"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_export_files_sorted() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "c.json", "{}");
        write_export(dir.path(), "a.json", "{}");
        write_export(dir.path(), "b.json", "{}");

        let files = find_export_files(dir.path());
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    }

    // ── load_board_exports ────────────────────────────────────────────────────

    #[test]
    fn test_load_board_exports_basic() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "board.json", &sample_export("Module Polishing"));

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].board.title, "Module Polishing");
        assert_eq!(exports[0].lists.len(), 2);
        assert_eq!(exports[0].cards.len(), 2);
        assert_eq!(exports[0].cards[0].title, "Fix bug (3)");
        assert!(exports[0].cards[0].date_last_activity.is_some());
    }

    #[test]
    fn test_load_board_exports_missing_path_is_error() {
        let err =
            load_board_exports(Path::new("/tmp/does-not-exist-burndown-test-xyz")).unwrap_err();
        assert!(err.to_string().contains("Data path not found"));
    }

    #[test]
    fn test_load_board_exports_empty_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_board_exports(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No board export files"));
    }

    #[test]
    fn test_load_board_exports_skips_malformed_file() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "bad.json", "{not valid json{{");
        write_export(dir.path(), "good.json", &sample_export("Sprint 4"));

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].board.title, "Sprint 4");
    }

    #[test]
    fn test_load_board_exports_skips_file_without_title() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "untitled.json", r#"{"_id": "x", "cards": []}"#);
        write_export(dir.path(), "good.json", &sample_export("Sprint 4"));

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports.len(), 1);
    }

    #[test]
    fn test_load_board_exports_multiple_boards_in_file_order() {
        let dir = TempDir::new().unwrap();
        write_export(dir.path(), "a.json", &sample_export("Alpha"));
        write_export(dir.path(), "b.json", &sample_export("Beta"));

        let exports = load_board_exports(dir.path()).unwrap();
        let titles: Vec<&str> = exports.iter().map(|e| e.board.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    // ── card/list mapping ─────────────────────────────────────────────────────

    #[test]
    fn test_card_without_title_skipped() {
        let dir = TempDir::new().unwrap();
        let export = serde_json::json!({
            "_id": "board-1",
            "title": "Sprint 4",
            "lists": [],
            "cards": [
                {"_id": "card-1", "listId": "l1"},
                {"_id": "card-2", "title": "Real card (2)", "listId": "l1"},
            ],
        })
        .to_string();
        write_export(dir.path(), "board.json", &export);

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports[0].cards.len(), 1);
        assert_eq!(exports[0].cards[0].title, "Real card (2)");
    }

    #[test]
    fn test_card_with_bad_timestamp_kept_without_timestamp() {
        let dir = TempDir::new().unwrap();
        let export = serde_json::json!({
            "_id": "board-1",
            "title": "Sprint 4",
            "lists": [],
            "cards": [
                {
                    "_id": "card-1",
                    "title": "Odd dates (2)",
                    "listId": "l1",
                    "createdAt": "last tuesday",
                },
            ],
        })
        .to_string();
        write_export(dir.path(), "board.json", &export);

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports[0].cards.len(), 1);
        assert!(exports[0].cards[0].created_at.is_none());
    }

    #[test]
    fn test_card_inherits_board_id_when_absent() {
        let dir = TempDir::new().unwrap();
        let export = serde_json::json!({
            "_id": "board-1",
            "title": "Sprint 4",
            "lists": [{"_id": "l1", "title": "Done"}],
            "cards": [{"_id": "c1", "title": "Task (1)", "listId": "l1"}],
        })
        .to_string();
        write_export(dir.path(), "board.json", &export);

        let exports = load_board_exports(dir.path()).unwrap();
        assert_eq!(exports[0].cards[0].board_id, "board-1");
        assert_eq!(exports[0].lists[0].board_id, "board-1");
    }
}

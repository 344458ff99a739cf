//! End-to-end checks of the diagnostic channel through a file sink.

use primetally::config::{DiagConfig, DiagFormat};
use primetally::diag::{Category, DiagLogger};

fn file_logger(dir: &tempfile::TempDir, level: u8, format: DiagFormat) -> DiagLogger {
    DiagLogger::new(DiagConfig {
        level,
        format,
        file: Some(dir.path().join("diag.log")),
    })
}

fn read_lines(dir: &tempfile::TempDir) -> Vec<String> {
    let content = std::fs::read_to_string(dir.path().join("diag.log")).expect("sink file");
    content.lines().map(|line| line.to_string()).collect()
}

#[test]
fn writes_both_verbosities_at_level_two() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(&dir, 2, DiagFormat::Text);

    logger.log("counter panel rendered", 1, None);
    logger.log("calculating initial-value primality", 2, Some(Category::Other));
    logger.close();

    let lines = read_lines(&dir);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("v1 [render] counter panel rendered"));
    assert!(lines[1].contains("v2 [other] calculating initial-value primality"));
}

#[test]
fn level_one_drops_detail_lines() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(&dir, 1, DiagFormat::Text);

    logger.log("counter panel rendered", 1, None);
    logger.log("calculating initial-value primality", 2, Some(Category::Other));
    logger.close();

    let lines = read_lines(&dir);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("counter panel rendered"));
}

#[test]
fn level_zero_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(&dir, 0, DiagFormat::Text);

    logger.log("counter panel rendered", 1, None);
    logger.close();

    let lines = read_lines(&dir);
    assert!(lines.is_empty());
}

#[test]
fn json_lines_parse_and_carry_the_fields() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(&dir, 2, DiagFormat::Json);

    logger.log("counter panel rendered", 1, None);
    logger.close();

    let lines = read_lines(&dir);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).expect("valid json");
    assert_eq!(value["verbosity"], 1);
    assert_eq!(value["category"], "render");
    assert_eq!(value["message"], "counter panel rendered");
    assert!(value["ts"].is_string());
}

#[test]
fn close_flushes_a_burst_of_events() {
    let dir = tempfile::tempdir().unwrap();
    let logger = file_logger(&dir, 1, DiagFormat::Text);

    for _ in 0..100 {
        logger.log("counter panel rendered", 1, None);
    }
    logger.close();

    let lines = read_lines(&dir);
    assert_eq!(lines.len(), 100);
}

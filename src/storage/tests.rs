//! Unit tests for draft storage

use super::*;
use crate::cli::types::LeagueId;

fn pick(league: &str, round: u32, pick_number: u32, player: &str) -> DraftPickRecord {
    DraftPickRecord {
        id: None,
        league_id: LeagueId::new(league),
        round,
        pick_number,
        member_id: "100".to_string(),
        player_name: player.to_string(),
        position: Some("RB".to_string()),
        team: None,
    }
}

#[test]
fn test_database_creation() {
    let db = DraftDatabase::new_in_memory().unwrap();
    // Creating the table twice is a no-op
    db.create_table().unwrap();
}

#[test]
fn test_add_and_get_in_draft_order() {
    let mut db = DraftDatabase::new_in_memory().unwrap();

    db.add_draft_pick(&pick("111", 2, 13, "Second Rounder")).unwrap();
    db.add_draft_pick(&pick("111", 1, 2, "Second Pick")).unwrap();
    db.add_draft_pick(&pick("111", 1, 1, "First Pick")).unwrap();
    db.add_draft_pick(&pick("222", 1, 1, "Other League")).unwrap();

    let board = db.get_draft_by_league(&LeagueId::new("111")).unwrap();
    let names: Vec<&str> = board.iter().map(|p| p.player_name.as_str()).collect();
    assert_eq!(names, vec!["First Pick", "Second Pick", "Second Rounder"]);
    assert!(board.iter().all(|p| p.id.is_some()));
    assert_eq!(board[0].position.as_deref(), Some("RB"));
    assert_eq!(board[0].team, None);
}

#[test]
fn test_same_slot_is_replaced() {
    let mut db = DraftDatabase::new_in_memory().unwrap();

    let first = db.add_draft_pick(&pick("111", 1, 1, "Original")).unwrap();
    let second = db.add_draft_pick(&pick("111", 1, 1, "Replacement")).unwrap();
    assert_ne!(first, second);

    let board = db.get_draft_by_league(&LeagueId::new("111")).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].player_name, "Replacement");
    assert_eq!(board[0].id, Some(second));
}

#[test]
fn test_bulk_insert() {
    let mut db = DraftDatabase::new_in_memory().unwrap();
    let picks: Vec<DraftPickRecord> = (1..=12)
        .map(|n| pick("111", 1, n, &format!("Player {n}")))
        .collect();

    assert_eq!(db.add_draft_picks(&picks).unwrap(), 12);
    assert_eq!(db.get_draft_by_league(&LeagueId::new("111")).unwrap().len(), 12);
}

#[test]
fn test_delete_draft_pick() {
    let mut db = DraftDatabase::new_in_memory().unwrap();
    let id = db.add_draft_pick(&pick("111", 1, 1, "Gone")).unwrap();

    assert!(db.delete_draft_pick(id).unwrap());
    assert!(!db.delete_draft_pick(id).unwrap());
    assert!(db.get_draft_by_league(&LeagueId::new("111")).unwrap().is_empty());
}

#[test]
fn test_unknown_league_is_empty() {
    let db = DraftDatabase::new_in_memory().unwrap();
    assert!(db.get_draft_by_league(&LeagueId::new("999")).unwrap().is_empty());
}

#[test]
fn test_file_backed_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("drafts.db");

    {
        let mut db = DraftDatabase::new(Some(&path)).unwrap();
        db.add_draft_pick(&pick("111", 1, 1, "Persisted")).unwrap();
    }

    let db = DraftDatabase::new(Some(&path)).unwrap();
    let board = db.get_draft_by_league(&LeagueId::new("111")).unwrap();
    assert_eq!(board[0].player_name, "Persisted");
}

//! Embedded SQL migrations

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_snapshot_ledger",
        sql: include_str!("../../migrations/001_snapshot_ledger.sql"),
    }]
}

//! Server-like resource registries
//!
//! Backs the MCP server and ConnectJunction environment screens. Each
//! registry is local to its screen: it is re-seeded on every screen mount
//! and dropped on navigation away. Known limitation carried over from the
//! product: edits do not survive leaving the screen.

use serde::{Deserialize, Serialize};

/// Up/down state of a managed resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Up,
    Down,
}

impl ServerStatus {
    /// Label shown in tables and dashboard cards
    pub fn label(self) -> &'static str {
        match self {
            ServerStatus::Up => "Running",
            ServerStatus::Down => "Down",
        }
    }
}

/// A managed resource row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Unique, monotonically assigned id
    pub id: u32,
    pub name: String,
    pub status: ServerStatus,
}

/// Screen-local list of resource records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRegistry {
    entries: Vec<ServerRecord>,
}

impl ServerRegistry {
    /// Create a registry from explicit records
    pub fn with_records(entries: Vec<ServerRecord>) -> Self {
        Self { entries }
    }

    /// The five MCP servers every mount of the server screen starts with
    pub fn seed_mcp_servers() -> Self {
        let entries = (1..=5)
            .map(|i| ServerRecord {
                id: i,
                name: format!("MCP-Server-{i}"),
                status: if i == 5 {
                    ServerStatus::Down
                } else {
                    ServerStatus::Up
                },
            })
            .collect();
        Self { entries }
    }

    /// The three environments every mount of the env screen starts with
    pub fn seed_environments() -> Self {
        let entries = (1..=3)
            .map(|i| ServerRecord {
                id: i,
                name: format!("Env-{i}"),
                status: if i == 3 {
                    ServerStatus::Down
                } else {
                    ServerStatus::Up
                },
            })
            .collect();
        Self { entries }
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[ServerRecord] {
        &self.entries
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record by id
    pub fn get(&self, id: u32) -> Option<&ServerRecord> {
        self.entries.iter().find(|record| record.id == id)
    }

    /// Next id to assign: one past the current maximum
    fn next_id(&self) -> u32 {
        self.entries
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Append a new record with the given name and status
    pub fn add(&mut self, name: impl Into<String>, status: ServerStatus) -> u32 {
        let id = self.next_id();
        self.entries.push(ServerRecord {
            id,
            name: name.into(),
            status,
        });
        id
    }

    /// Clone the record with the given id: same status, name suffixed with
    /// `-Copy`, id assigned as `max(existing ids) + 1`. Returns the new id,
    /// or `None` if the source id does not exist.
    pub fn clone_record(&mut self, id: u32) -> Option<u32> {
        let source = self.get(id)?.clone();
        let new_id = self.next_id();
        self.entries.push(ServerRecord {
            id: new_id,
            name: format!("{}-Copy", source.name),
            status: source.status,
        });
        Some(new_id)
    }

    /// Replace a record's name. Returns whether the id existed.
    pub fn rename(&mut self, id: u32, name: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove a record. Returns whether the id existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|record| record.id != id);
        self.entries.len() != before
    }

    /// Count of (up, down) records for the dashboard cards
    pub fn status_counts(&self) -> (usize, usize) {
        let up = self
            .entries
            .iter()
            .filter(|record| record.status == ServerStatus::Up)
            .count();
        (up, self.entries.len() - up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_seed() {
        let registry = ServerRegistry::seed_mcp_servers();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.status_counts(), (4, 1));
        assert_eq!(registry.get(1).unwrap().name, "MCP-Server-1");
        assert_eq!(registry.get(5).unwrap().status, ServerStatus::Down);
    }

    #[test]
    fn test_env_seed() {
        let registry = ServerRegistry::seed_environments();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.status_counts(), (2, 1));
    }

    #[test]
    fn test_clone_appends_copy_with_next_id() {
        let mut registry = ServerRegistry::seed_mcp_servers();

        let new_id = registry.clone_record(3).unwrap();
        assert_eq!(new_id, 6);

        let clone = registry.get(6).unwrap();
        assert_eq!(clone.name, "MCP-Server-3-Copy");
        assert_eq!(clone.status, ServerStatus::Up);
        // Source untouched
        assert_eq!(registry.get(3).unwrap().name, "MCP-Server-3");
    }

    #[test]
    fn test_clone_fills_id_gap_above_max() {
        let mut registry = ServerRegistry::seed_mcp_servers();
        registry.remove(5);

        // Max id is now 4, so the clone takes 5 even though 5 was used once.
        let new_id = registry.clone_record(4).unwrap();
        assert_eq!(new_id, 5);
    }

    #[test]
    fn test_clone_unknown_id() {
        let mut registry = ServerRegistry::seed_mcp_servers();
        assert!(registry.clone_record(99).is_none());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_rename_is_idempotent() {
        let mut registry = ServerRegistry::seed_mcp_servers();

        assert!(registry.rename(2, "Renamed"));
        let after_first = registry.list().to_vec();

        assert!(registry.rename(2, "Renamed"));
        assert_eq!(registry.list(), &after_first[..]);
    }

    #[test]
    fn test_remove() {
        let mut registry = ServerRegistry::seed_mcp_servers();

        assert!(registry.remove(3));
        assert_eq!(registry.len(), 4);
        assert!(registry.get(3).is_none());
        assert!(!registry.remove(3));
    }

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let mut registry = ServerRegistry::default();
        assert_eq!(registry.add("First", ServerStatus::Up), 1);
        assert_eq!(registry.add("Second", ServerStatus::Down), 2);
        registry.remove(2);
        assert_eq!(registry.add("Third", ServerStatus::Up), 2);
    }
}

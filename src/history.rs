use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::client_info::ClientInfo;

/// One creation event. Entries are append-only and never mutated; view
/// counters deliberately live in the mapping store, not here.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub short_code: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
    pub client: ClientInfo,
}

/// Per-client (by IP) creation history. Sequences grow unbounded for the
/// process lifetime; there is no compaction or TTL.
#[derive(Default)]
pub struct HistoryLedger {
    clients: Mutex<HashMap<String, Vec<HistoryEntry>>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the client's sequence, creating it if absent.
    pub fn record(&self, client_ip: &str, entry: HistoryEntry) {
        let mut clients = self.clients.lock().expect("history ledger lock poisoned");
        clients.entry(client_ip.to_string()).or_default().push(entry);
    }

    /// Returns the client's entries in creation order, oldest first. An
    /// unknown client yields an empty sequence, not an error.
    pub fn list(&self, client_ip: &str) -> Vec<HistoryEntry> {
        let clients = self.clients.lock().expect("history ledger lock poisoned");
        clients.get(client_ip).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, ip: &str) -> HistoryEntry {
        HistoryEntry {
            short_code: code.to_string(),
            destination_url: format!("https://example.com/{code}"),
            created_at: Utc::now(),
            client: ClientInfo::derive(ip, "curl/8.6.0"),
        }
    }

    #[test]
    fn unknown_client_has_empty_history() {
        let ledger = HistoryLedger::new();
        assert!(ledger.list("10.0.0.1").is_empty());
    }

    #[test]
    fn entries_are_listed_in_creation_order() {
        let ledger = HistoryLedger::new();
        ledger.record("10.0.0.1", entry("aaaaaa", "10.0.0.1"));
        ledger.record("10.0.0.1", entry("bbbbbb", "10.0.0.1"));
        ledger.record("10.0.0.1", entry("cccccc", "10.0.0.1"));

        let codes: Vec<_> = ledger
            .list("10.0.0.1")
            .into_iter()
            .map(|e| e.short_code)
            .collect();
        assert_eq!(codes, ["aaaaaa", "bbbbbb", "cccccc"]);
    }

    #[test]
    fn clients_do_not_see_each_other() {
        let ledger = HistoryLedger::new();
        ledger.record("10.0.0.1", entry("aaaaaa", "10.0.0.1"));
        ledger.record("10.0.0.2", entry("bbbbbb", "10.0.0.2"));

        assert_eq!(ledger.list("10.0.0.1").len(), 1);
        assert_eq!(ledger.list("10.0.0.2").len(), 1);
        assert_eq!(ledger.list("10.0.0.1")[0].short_code, "aaaaaa");
    }
}

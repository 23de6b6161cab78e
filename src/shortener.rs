use chrono::Utc;

use crate::client_info::ClientInfo;
use crate::codegen::CodeGenerator;
use crate::errors::ShortenerError;
use crate::history::{HistoryEntry, HistoryLedger};
use crate::model::{HistoryItem, LinkStats};
use crate::store::MappingStore;

/// The shortening core behind the HTTP routes: code generation, the mapping
/// store and the history ledger, plus the externally visible domain used to
/// compose short URLs. The store and ledger lock independently; no operation
/// holds both locks at once.
pub struct UrlShortener {
    codes: CodeGenerator,
    store: MappingStore,
    history: HistoryLedger,
    domain: String,
}

impl UrlShortener {
    pub fn new(domain: String) -> Self {
        Self {
            codes: CodeGenerator::new(),
            store: MappingStore::new(),
            history: HistoryLedger::new(),
            domain,
        }
    }

    /// Shortens a URL and records the creation in the requesting client's
    /// history. Fails only on an empty URL, in which case nothing is stored.
    pub fn create_short_link(
        &self,
        destination_url: &str,
        client: ClientInfo,
    ) -> Result<String, ShortenerError> {
        let code = self.store.create(&self.codes, destination_url)?;
        let client_ip = client.ip.clone();
        self.history.record(
            &client_ip,
            HistoryEntry {
                short_code: code.clone(),
                destination_url: destination_url.to_string(),
                created_at: Utc::now(),
                client,
            },
        );
        Ok(code)
    }

    pub fn redirect(&self, code: &str, client_ip: &str) -> Result<String, ShortenerError> {
        self.store.resolve(code, client_ip)
    }

    pub fn stats(&self, code: &str) -> Result<LinkStats, ShortenerError> {
        self.store.stats(code)
    }

    /// The client's creations, oldest first, with live view counters joined
    /// from the mapping store. Counters are absent for links deleted since
    /// creation. Never fails; an unknown client gets an empty list.
    pub fn history(&self, client_ip: &str) -> Vec<HistoryItem> {
        self.history
            .list(client_ip)
            .into_iter()
            .map(|entry| {
                let stats = self.store.stats(&entry.short_code).ok();
                HistoryItem {
                    short_url: self.short_url(&entry.short_code),
                    short_code: entry.short_code,
                    destination_url: entry.destination_url,
                    created_at: entry.created_at,
                    client: entry.client,
                    view_count: stats.as_ref().map(|s| s.view_count),
                    unique_view_count: stats.map(|s| s.unique_view_count),
                }
            })
            .collect()
    }

    pub fn delete(&self, code: &str) {
        self.store.delete(code);
    }

    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.domain, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortener() -> UrlShortener {
        UrlShortener::new("http://sho.rt".to_string())
    }

    fn client(ip: &str) -> ClientInfo {
        ClientInfo::derive(ip, "curl/8.6.0")
    }

    #[test]
    fn created_link_redirects_to_its_destination() {
        let shortener = shortener();
        let code = shortener
            .create_short_link("https://example.com", client("10.0.0.1"))
            .unwrap();
        assert_eq!(
            shortener.redirect(&code, "10.0.0.2").unwrap(),
            "https://example.com"
        );
        assert_eq!(shortener.short_url(&code), format!("http://sho.rt/{code}"));
    }

    #[test]
    fn history_joins_live_counters_from_the_store() {
        let shortener = shortener();
        let code = shortener
            .create_short_link("https://example.com", client("10.0.0.1"))
            .unwrap();
        shortener.redirect(&code, "10.0.0.2").unwrap();
        shortener.redirect(&code, "10.0.0.3").unwrap();
        shortener.redirect(&code, "10.0.0.2").unwrap();

        let history = shortener.history("10.0.0.1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].view_count, Some(3));
        assert_eq!(history[0].unique_view_count, Some(2));
    }

    #[test]
    fn history_keeps_deleted_links_without_counters() {
        let shortener = shortener();
        let code = shortener
            .create_short_link("https://example.com", client("10.0.0.1"))
            .unwrap();
        shortener.delete(&code);

        assert_eq!(
            shortener.redirect(&code, "10.0.0.1"),
            Err(ShortenerError::NotFound)
        );
        let history = shortener.history("10.0.0.1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].view_count, None);
        assert_eq!(history[0].unique_view_count, None);
    }

    #[test]
    fn empty_url_leaves_no_history_behind() {
        let shortener = shortener();
        assert_eq!(
            shortener.create_short_link("", client("10.0.0.1")),
            Err(ShortenerError::InvalidInput)
        );
        assert!(shortener.history("10.0.0.1").is_empty());
    }
}

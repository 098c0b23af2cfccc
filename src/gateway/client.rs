//! HTTP gateway for the notes REST collection

use super::error::{TransportError, TransportResult};
use super::traits::NoteGateway;
use crate::notes::{Draft, Note, NoteId};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

/// Name of the collection resource under the base URL
const COLLECTION: &str = "notes";

/// [`NoteGateway`] backed by a REST server.
///
/// Any non-2xx status is turned into an error via `error_for_status`. Only
/// `list` decodes a body; create and update succeed on any 2xx, whatever the
/// server echoes back.
#[derive(Debug, Clone)]
pub struct HttpNoteGateway {
    client: Client,
    collection_url: Url,
}

impl HttpNoteGateway {
    /// Create a gateway for `{base_url}/notes` with a default client
    pub fn new(base_url: &str) -> TransportResult<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a gateway reusing an existing client (timeouts, proxies, ...)
    pub fn with_client(base_url: &str, client: Client) -> TransportResult<Self> {
        let mut collection_url = Url::parse(base_url)
            .map_err(|e| TransportError::Url(format!("{}: {}", base_url, e)))?;
        collection_url
            .path_segments_mut()
            .map_err(|_| TransportError::Url(format!("{}: cannot be a base", base_url)))?
            .pop_if_empty()
            .push(COLLECTION);

        Ok(Self {
            client,
            collection_url,
        })
    }

    /// URL of the collection resource
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// URL of a single note; the id is percent-encoded as one path segment
    pub fn note_url(&self, id: &NoteId) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }
}

#[async_trait]
impl NoteGateway for HttpNoteGateway {
    async fn list(&self) -> TransportResult<Vec<Note>> {
        debug!(url = %self.collection_url, "GET notes");
        let notes = self
            .client
            .get(self.collection_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Note>>()
            .await?;
        Ok(notes)
    }

    async fn create(&self, draft: &Draft) -> TransportResult<()> {
        debug!(url = %self.collection_url, "POST note");
        self.client
            .post(self.collection_url.clone())
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: &NoteId, draft: &Draft) -> TransportResult<()> {
        let url = self.note_url(id);
        debug!(url = %url, "PUT note");
        self.client.put(url).json(draft).send().await?.error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> TransportResult<()> {
        let url = self.note_url(id);
        debug!(url = %url, "DELETE note");
        self.client.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_collection_url() {
        let gateway = HttpNoteGateway::new("http://localhost:8080").unwrap();
        assert_eq!(
            gateway.collection_url().as_str(),
            "http://localhost:8080/notes"
        );
    }

    #[test]
    fn test_new_keeps_base_path_and_trims_trailing_slash() {
        let gateway = HttpNoteGateway::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            gateway.collection_url().as_str(),
            "http://localhost:8080/api/notes"
        );
    }

    #[test]
    fn test_note_url_encodes_id_segment() {
        let gateway = HttpNoteGateway::new("http://localhost:8080").unwrap();
        assert_eq!(
            gateway.note_url(&NoteId::Number(5)).as_str(),
            "http://localhost:8080/notes/5"
        );
        assert_eq!(
            gateway.note_url(&NoteId::from("a/b")).as_str(),
            "http://localhost:8080/notes/a%2Fb"
        );
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let err = HttpNoteGateway::new("not a url").unwrap_err();
        assert!(matches!(err, TransportError::Url(_)));
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        let err = HttpNoteGateway::new("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, TransportError::Url(_)));
    }

    #[tokio::test]
    async fn test_list_unreachable_server_is_transport_error() {
        // Port 1, nothing listening
        let gateway = HttpNoteGateway::new("http://127.0.0.1:1").unwrap();
        let err = gateway.list().await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}

use crate::document::Document;
use crate::error::Error;

/// In-memory ordered collection of documents.
///
/// Insertion order is crawl discovery order. The store is append-only during
/// a crawl; search and lookup only read from it.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document, rejecting a URL that is already stored
    pub fn append(&mut self, doc: Document) -> Result<(), Error> {
        if self.find_by_url(&doc.url).is_some() {
            return Err(Error::DuplicateUrl(doc.url));
        }
        self.documents.push(doc);
        Ok(())
    }

    /// Look up a document by its identifier
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Look up a document by its absolute URL
    pub fn find_by_url(&self, url: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.url == url)
    }

    /// All stored documents in insertion order
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

//! Document service adapter: upload, list, fetch, delete

use crate::client::ApiClient;
use crate::error::Result;
use crate::upload::validate_upload;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Upload stream chunk size
const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// One row in the document list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_id: String,
    pub file_name: String,
    pub file_type: String,
    pub text_length: usize,
    pub entities_count: usize,
    pub chunks_count: usize,
}

/// Response of `GET /api/documents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    pub total: usize,
    pub documents: Vec<DocumentSummary>,
}

/// Response of `GET /api/documents/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub document_id: String,
    pub file_name: String,
    pub file_type: String,
    pub text_length: usize,
    pub chunks_count: usize,
    pub entities_count: usize,
    pub relations_count: usize,
    /// Parser metadata (title, author, page count) when the file carried any
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Backend-side processing flags reported after upload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingFlags {
    pub knowledge_graph: bool,
    pub vector_store: bool,
}

/// Extraction summary returned by `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReport {
    pub document_id: String,
    pub file_name: String,
    pub file_type: String,
    pub text_length: usize,
    pub chunks_count: usize,
    pub entities_count: usize,
    pub relations_count: usize,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub processing: ProcessingFlags,
    pub status: String,
}

/// Full document text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentText {
    pub document_id: String,
    pub text: String,
}

/// An extracted entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

/// Response of `GET /api/documents/{id}/entities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityList {
    pub document_id: String,
    pub entities_count: usize,
    pub entities: Vec<Entity>,
}

/// An extracted subject-predicate-object relation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub evidence: Option<String>,
}

/// Response of `GET /api/documents/{id}/relations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationList {
    pub document_id: String,
    pub relations_count: usize,
    pub relations: Vec<Relation>,
}

/// Acknowledgement of a delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

impl ApiClient {
    /// Upload a document for parsing and extraction.
    ///
    /// The file is validated locally (type, 10 MiB ceiling) before any
    /// request is made. Progress is reported as `(sent_bytes, total_bytes)`
    /// while the body streams.
    pub async fn upload_document<F>(
        &self,
        path: &Path,
        progress: Option<F>,
    ) -> Result<UploadReport>
    where
        F: Fn(u64, u64) + Send + Sync + 'static,
    {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let size = tokio::fs::metadata(path).await?.len();
        let kind = validate_upload(&file_name, size)?;

        // Bounded by the validation above, so reading fully is fine.
        let data = tokio::fs::read(path).await?;
        let total = data.len() as u64;

        let sent = Arc::new(AtomicU64::new(0));
        let callback = progress.map(Arc::new);

        let chunks: Vec<Vec<u8>> = data
            .chunks(UPLOAD_CHUNK_BYTES)
            .map(|c| c.to_vec())
            .collect();

        // Chunks are pulled lazily as the body transmits, so the callback
        // tracks actual upload progress.
        let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
            let done = sent.fetch_add(chunk.len() as u64, Ordering::Relaxed) + chunk.len() as u64;
            if let Some(ref cb) = callback {
                cb(done, total);
            }
            Ok::<Vec<u8>, std::io::Error>(chunk)
        }));

        let part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            total,
        )
        .file_name(file_name)
        .mime_str(kind.mime())?;

        let form = reqwest::multipart::Form::new().part("file", part);

        let report: UploadReport = self.post_multipart("/api/upload", form).await?;
        tracing::info!(
            "uploaded {} ({} entities, {} relations, {} chunks)",
            report.file_name,
            report.entities_count,
            report.relations_count,
            report.chunks_count
        );
        Ok(report)
    }

    /// List all documents
    pub async fn list_documents(&self) -> Result<DocumentList> {
        self.get_json("/api/documents", &[]).await
    }

    /// Fetch one document's detail
    pub async fn get_document(&self, document_id: &str) -> Result<DocumentDetail> {
        let url = self.endpoint_with_segment("/api/documents", document_id)?;
        self.get_json_at(url, &[]).await
    }

    /// Fetch a document's full extracted text
    pub async fn get_document_text(&self, document_id: &str) -> Result<DocumentText> {
        self.get_json(&format!("/api/documents/{}/text", document_id), &[])
            .await
    }

    /// Fetch a document's extracted entities
    pub async fn get_document_entities(&self, document_id: &str) -> Result<EntityList> {
        self.get_json(&format!("/api/documents/{}/entities", document_id), &[])
            .await
    }

    /// Fetch a document's extracted relations (backend caps at 100)
    pub async fn get_document_relations(&self, document_id: &str) -> Result<RelationList> {
        self.get_json(&format!("/api/documents/{}/relations", document_id), &[])
            .await
    }

    /// Delete a document and its derived data
    pub async fn delete_document(&self, document_id: &str) -> Result<DeleteAck> {
        self.delete_json(&format!("/api/documents/{}", document_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upload_report() {
        // Response shape for a small PDF per the backend contract.
        let json = r#"{
            "document_id": "4f1c2a9e",
            "file_name": "paper.pdf",
            "file_type": "pdf",
            "text_length": 20480,
            "chunks_count": 5,
            "entities_count": 12,
            "relations_count": 7,
            "metadata": {"title": "Sample"},
            "processing": {"knowledge_graph": true, "vector_store": true},
            "status": "success"
        }"#;
        let report: UploadReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.entities_count, 12);
        assert_eq!(report.chunks_count, 5);
        assert_eq!(report.file_type, "pdf");
        assert!(report.processing.knowledge_graph);
    }

    #[test]
    fn decodes_document_list() {
        let json = r#"{
            "total": 2,
            "documents": [
                {"document_id": "a", "file_name": "a.pdf", "file_type": "pdf",
                 "text_length": 100, "entities_count": 3, "chunks_count": 1},
                {"document_id": "b", "file_name": "b.docx", "file_type": "docx",
                 "text_length": 200, "entities_count": 5, "chunks_count": 2}
            ]
        }"#;
        let list: DocumentList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, list.documents.len());
    }

    #[test]
    fn detail_tolerates_missing_metadata() {
        let json = r#"{
            "document_id": "a", "file_name": "a.pdf", "file_type": "pdf",
            "text_length": 100, "chunks_count": 1, "entities_count": 3,
            "relations_count": 2
        }"#;
        let detail: DocumentDetail = serde_json::from_str(json).unwrap();
        assert!(detail.metadata.is_null());
    }
}

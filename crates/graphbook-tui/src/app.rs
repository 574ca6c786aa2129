//! TUI application state

use graphbook_api::api::qa::AskRequest;
use graphbook_api::{
    ApiClient, Config, DocumentSummary, FeatureFlags, GraphView, NodeObjectCache, ProviderPanel,
    RenderSettings, SearchHit, Session, Transcript,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Login,
    Documents,
    Search,
    Qa,
    Graph,
    Providers,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchMode {
    Semantic,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginField {
    Username,
    Password,
}

pub struct App {
    pub client: ApiClient,
    pub session: Session,
    pub features: FeatureFlags,
    pub mode: AppMode,

    pub login_username: String,
    pub login_password: String,
    pub login_field: LoginField,

    pub documents: Vec<DocumentSummary>,
    pub doc_selected: usize,
    pub summary_popup: Option<String>,
    pub upload_input_active: bool,
    pub upload_path: String,

    pub search_mode: SearchMode,
    pub query: String,
    /// Byte offset into `query`, always on a char boundary
    pub cursor_pos: usize,
    pub top_k: usize,
    pub semantic_weight: f32,
    pub results: Vec<SearchHit>,
    pub result_selected: usize,

    pub question: String,
    pub question_cursor: usize,
    pub transcript: Transcript,
    pub transcript_scroll: usize,

    pub graph_doc: Option<String>,
    pub graph_view: Option<GraphView>,
    pub render_settings: RenderSettings,
    pub object_cache: NodeObjectCache,
    pub graph_scroll: usize,

    pub panels: Vec<ProviderPanel>,
    pub panel_selected: usize,
    pub key_input_active: bool,

    pub status_message: Option<String>,
    pub is_loading: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, config: &Config, session: Session, features: FeatureFlags) -> Self {
        let mode = if session.logged_in {
            AppMode::Documents
        } else {
            AppMode::Login
        };
        Self {
            client,
            session,
            features,
            mode,
            login_username: String::new(),
            login_password: String::new(),
            login_field: LoginField::Username,
            documents: Vec::new(),
            doc_selected: 0,
            summary_popup: None,
            upload_input_active: false,
            upload_path: String::new(),
            search_mode: SearchMode::Semantic,
            query: String::new(),
            cursor_pos: 0,
            top_k: config.top_k,
            semantic_weight: config.semantic_weight,
            results: Vec::new(),
            result_selected: 0,
            question: String::new(),
            question_cursor: 0,
            transcript: Transcript::new(),
            transcript_scroll: 0,
            graph_doc: None,
            graph_view: None,
            render_settings: RenderSettings::default(),
            object_cache: NodeObjectCache::new(),
            graph_scroll: 0,
            panels: Vec::new(),
            panel_selected: 0,
            key_input_active: false,
            status_message: None,
            is_loading: false,
            should_quit: false,
        }
    }

    /// Every failure becomes a status message; the view keeps its state.
    fn report_error(&mut self, context: &str, e: graphbook_api::GraphbookError) {
        self.status_message = Some(format!("{}: {}", context, e));
    }

    pub fn try_login(&mut self) {
        match Session::login(&self.login_username, &self.login_password) {
            Ok(session) => {
                self.session = session;
                self.mode = AppMode::Documents;
                self.status_message = None;
            }
            Err(e) => {
                self.login_password.clear();
                self.report_error("Login failed", e);
            }
        }
    }

    pub async fn refresh_documents(&mut self) {
        self.is_loading = true;
        match self.client.list_documents().await {
            Ok(list) => {
                self.documents = list.documents;
                if self.doc_selected >= self.documents.len() {
                    self.doc_selected = self.documents.len().saturating_sub(1);
                }
            }
            Err(e) => self.report_error("Could not load documents", e),
        }
        self.is_loading = false;
    }

    pub fn selected_document(&self) -> Option<&DocumentSummary> {
        self.documents.get(self.doc_selected)
    }

    pub async fn delete_selected(&mut self) {
        let Some(id) = self.selected_document().map(|d| d.document_id.clone()) else {
            return;
        };
        match self.client.delete_document(&id).await {
            Ok(ack) => {
                self.status_message = Some(ack.message);
                self.refresh_documents().await;
            }
            Err(e) => self.report_error("Delete failed", e),
        }
    }

    pub async fn upload_from_input(&mut self) {
        let path = std::path::PathBuf::from(self.upload_path.trim());
        if path.as_os_str().is_empty() {
            self.upload_input_active = false;
            return;
        }
        self.upload_input_active = false;
        self.is_loading = true;
        match self.client.upload_document(&path, None::<fn(u64, u64)>).await {
            Ok(report) => {
                self.status_message = Some(format!(
                    "Uploaded {} ({} entities, {} chunks)",
                    report.file_name, report.entities_count, report.chunks_count
                ));
                self.upload_path.clear();
                self.refresh_documents().await;
            }
            Err(e) => self.report_error("Upload failed", e),
        }
        self.is_loading = false;
    }

    pub async fn summarize_selected(&mut self) {
        let Some(id) = self.selected_document().map(|d| d.document_id.clone()) else {
            return;
        };
        self.is_loading = true;
        match self.client.summarize(&id, None).await {
            Ok(summary) => self.summary_popup = Some(summary.summary),
            Err(e) => self.report_error("Summarize failed", e),
        }
        self.is_loading = false;
    }

    pub async fn run_search(&mut self) {
        if self.query.is_empty() {
            self.results.clear();
            return;
        }

        self.is_loading = true;
        let outcome = match self.search_mode {
            SearchMode::Semantic => {
                self.client
                    .semantic_search(&self.query, self.top_k, None)
                    .await
            }
            SearchMode::Hybrid => {
                self.client
                    .hybrid_search(&self.query, self.top_k, self.semantic_weight)
                    .await
            }
        };
        match outcome {
            Ok(response) => {
                self.results = response.results;
                self.result_selected = 0;
            }
            Err(e) => self.report_error("Search failed", e),
        }
        self.is_loading = false;
    }

    pub fn toggle_search_mode(&mut self) {
        self.search_mode = match self.search_mode {
            SearchMode::Semantic => SearchMode::Hybrid,
            SearchMode::Hybrid => SearchMode::Semantic,
        };
    }

    pub fn adjust_weight(&mut self, delta: f32) {
        if self.search_mode == SearchMode::Hybrid {
            self.semantic_weight = (self.semantic_weight + delta).clamp(0.0, 1.0);
        }
    }

    pub async fn ask(&mut self) {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return;
        }
        self.question.clear();
        self.question_cursor = 0;
        self.transcript.push_question(&question);

        self.is_loading = true;
        let mut request = AskRequest::new(question);
        request.top_k = self.top_k;
        match self.client.ask(&request).await {
            Ok(answer) => self.transcript.push_answer(&answer),
            Err(e) => {
                // A failed ask stays visible as an error turn.
                self.transcript
                    .push_failure(format!("Unable to answer: {}", e));
            }
        }
        self.is_loading = false;
    }

    pub async fn load_graph_for_selected(&mut self) {
        let Some(id) = self.selected_document().map(|d| d.document_id.clone()) else {
            self.status_message = Some("Select a document first".to_string());
            return;
        };
        self.is_loading = true;
        match self.client.document_graph(&id).await {
            Ok(data) => {
                if data.nodes.is_empty() {
                    self.status_message =
                        Some("No knowledge-graph data for this document yet".to_string());
                } else {
                    self.status_message = Some(format!(
                        "Loaded {} nodes, {} edges",
                        data.nodes.len(),
                        data.edges.len()
                    ));
                }
                self.graph_view = Some(GraphView::build(&data, GraphView::seed_for(&id)));
                self.graph_doc = Some(id);
                self.graph_scroll = 0;
                self.object_cache.invalidate();
                self.mode = AppMode::Graph;
            }
            Err(e) => self.report_error("Could not load graph", e),
        }
        self.is_loading = false;
    }

    pub fn cycle_quality(&mut self) {
        self.render_settings.quality = self.render_settings.quality.cycle();
        self.object_cache.invalidate();
        self.graph_scroll = 0;
    }

    pub fn toggle_labels(&mut self) {
        self.render_settings.show_labels = !self.render_settings.show_labels;
        self.object_cache.invalidate();
    }

    pub fn adjust_node_size(&mut self, delta: f32) {
        self.render_settings.node_size = (self.render_settings.node_size + delta).clamp(0.5, 8.0);
        self.object_cache.invalidate();
    }

    pub async fn load_providers(&mut self) {
        self.is_loading = true;
        match self.client.llm_all_providers().await {
            Ok(providers) => {
                self.panels = providers.iter().map(ProviderPanel::new).collect();
                self.panel_selected = 0;
                self.mode = AppMode::Providers;
            }
            Err(e) => self.report_error("Could not load providers", e),
        }
        self.is_loading = false;
    }

    pub async fn test_selected_panel(&mut self) {
        let Some(panel) = self.panels.get_mut(self.panel_selected) else {
            return;
        };
        if let Err(e) = panel.begin_test() {
            self.report_error("Cannot test", e);
            return;
        }

        let (provider, key, model) = {
            let panel = &self.panels[self.panel_selected];
            (
                panel.provider_id.clone(),
                panel.api_key.clone(),
                panel.selected_model.clone(),
            )
        };
        self.is_loading = true;
        let outcome = self.client.llm_test(&provider, &key, model.as_deref()).await;
        self.is_loading = false;

        let panel = &mut self.panels[self.panel_selected];
        match outcome {
            Ok(result) => panel.record_test(result.success, result.message),
            Err(e) => panel.record_test(false, e.to_string()),
        }
    }

    pub async fn save_selected_panel(&mut self) {
        let Some(panel) = self.panels.get_mut(self.panel_selected) else {
            return;
        };
        if let Err(e) = panel.begin_save() {
            self.report_error("Cannot save", e);
            return;
        }

        let (provider, key, model) = {
            let panel = &self.panels[self.panel_selected];
            (
                panel.provider_id.clone(),
                panel.api_key.clone(),
                panel.selected_model.clone(),
            )
        };
        self.is_loading = true;
        let outcome = self
            .client
            .llm_configure(&provider, &key, model.as_deref(), true)
            .await;
        self.is_loading = false;

        let panel = &mut self.panels[self.panel_selected];
        match outcome {
            Ok(result) => {
                panel.record_save(result.success, result.message.clone());
                if result.success {
                    self.status_message = Some(result.message);
                }
            }
            Err(e) => panel.record_save(false, e.to_string()),
        }
    }

    pub async fn switch_selected_panel(&mut self) {
        let Some(panel) = self.panels.get(self.panel_selected) else {
            return;
        };
        let provider = panel.provider_id.clone();
        let model = panel.selected_model.clone();
        match self.client.llm_switch(&provider, model.as_deref()).await {
            Ok(outcome) => self.status_message = Some(outcome.message),
            Err(e) => self.report_error("Switch failed", e),
        }
    }

    pub fn cycle_panel_model(&mut self) {
        if let Some(panel) = self.panels.get_mut(self.panel_selected) {
            if panel.models.is_empty() {
                return;
            }
            let next = match &panel.selected_model {
                Some(current) => {
                    let idx = panel.models.iter().position(|m| m == current).unwrap_or(0);
                    panel.models[(idx + 1) % panel.models.len()].clone()
                }
                None => panel.models[0].clone(),
            };
            panel.select_model(next);
        }
    }

    pub fn select_next_doc(&mut self) {
        if self.doc_selected + 1 < self.documents.len() {
            self.doc_selected += 1;
        }
    }

    pub fn select_prev_doc(&mut self) {
        self.doc_selected = self.doc_selected.saturating_sub(1);
    }
}

/// Whether the backend advertises the capability behind a view
pub fn mode_enabled(features: &FeatureFlags, mode: AppMode) -> bool {
    match mode {
        AppMode::Search => features.vector_search,
        AppMode::Qa => features.rag_qa,
        AppMode::Graph => features.knowledge_graph,
        _ => true,
    }
}

// Input-box editing. The cursor is a byte offset kept on a char boundary,
// so multi-byte input (CJK entity names, for one) edits cleanly.

pub fn insert_char(text: &mut String, cursor: &mut usize, c: char) {
    text.insert(*cursor, c);
    *cursor += c.len_utf8();
}

pub fn delete_char_before(text: &mut String, cursor: &mut usize) {
    if let Some((idx, _)) = text[..*cursor].char_indices().next_back() {
        text.remove(idx);
        *cursor = idx;
    }
}

pub fn move_cursor_left(text: &str, cursor: &mut usize) {
    if let Some((idx, _)) = text[..*cursor].char_indices().next_back() {
        *cursor = idx;
    }
}

pub fn move_cursor_right(text: &str, cursor: &mut usize) {
    if let Some(c) = text[*cursor..].chars().next() {
        *cursor += c.len_utf8();
    }
}

/// Terminal column of the cursor (chars, not bytes)
pub fn cursor_column(text: &str, cursor: usize) -> u16 {
    text[..cursor].chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbook_api::{ApiClient, Config, FeatureFlags, Session};

    #[test]
    fn multibyte_input_edits_on_char_boundaries() {
        let mut text = String::new();
        let mut cursor = 0;

        insert_char(&mut text, &mut cursor, '中');
        insert_char(&mut text, &mut cursor, '文');
        assert_eq!(text, "中文");
        assert_eq!(cursor, text.len());

        move_cursor_left(&text, &mut cursor);
        insert_char(&mut text, &mut cursor, 'a');
        assert_eq!(text, "中a文");

        delete_char_before(&mut text, &mut cursor);
        assert_eq!(text, "中文");

        move_cursor_right(&text, &mut cursor);
        assert_eq!(cursor, text.len());
        assert_eq!(cursor_column(&text, cursor), 2);
    }

    #[test]
    fn cursor_moves_are_bounded() {
        let text = "实体".to_string();
        let mut cursor = 0;
        move_cursor_left(&text, &mut cursor);
        assert_eq!(cursor, 0);

        cursor = text.len();
        move_cursor_right(&text, &mut cursor);
        assert_eq!(cursor, text.len());

        let mut empty = String::new();
        let mut c = 0;
        delete_char_before(&mut empty, &mut c);
        assert_eq!(c, 0);
    }

    #[test]
    fn search_defaults_come_from_config() {
        let config = Config {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            top_k: 3,
            semantic_weight: 0.4,
        };
        let client = ApiClient::new(&config).unwrap();
        let app = App::new(client, &config, Session::default(), FeatureFlags::default());
        assert_eq!(app.top_k, 3);
        assert!((app.semantic_weight - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn views_map_to_their_feature_flags() {
        let features = FeatureFlags {
            file_parsing: true,
            nlp_processing: true,
            knowledge_graph: false,
            vector_search: true,
            rag_qa: false,
        };
        assert!(mode_enabled(&features, AppMode::Documents));
        assert!(mode_enabled(&features, AppMode::Search));
        assert!(!mode_enabled(&features, AppMode::Qa));
        assert!(!mode_enabled(&features, AppMode::Graph));
        assert!(mode_enabled(&features, AppMode::Providers));
    }
}

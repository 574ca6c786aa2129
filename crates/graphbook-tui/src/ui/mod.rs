//! TUI rendering

use crate::app::{self, App, AppMode, LoginField, SearchMode};
use graphbook_api::{ConfidenceBand, NodeKind, PanelState, Turn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_main(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);

    if app.summary_popup.is_some() {
        render_summary_popup(frame, app, chunks[1]);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = [
        (AppMode::Documents, "1 Documents"),
        (AppMode::Search, "2 Search"),
        (AppMode::Qa, "3 Ask"),
        (AppMode::Graph, "4 Graph"),
        (AppMode::Providers, "5 Providers"),
    ];

    let mut spans = Vec::new();
    for (mode, label) in tabs {
        let style = if app.mode == mode {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if !app::mode_enabled(&app.features, mode) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw("|"));
    }
    spans.pop();

    let user = if app.session.logged_in {
        format!(" {} ", app.session.username.as_deref().unwrap_or("-"))
    } else {
        " not logged in ".to_string()
    };
    spans.push(Span::styled(user, Style::default().fg(Color::Green)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" graphbook "),
    );
    frame.render_widget(header, area);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.mode {
        AppMode::Login => render_login(frame, app, area),
        AppMode::Documents => render_documents(frame, app, area),
        AppMode::Search => render_search(frame, app, area),
        AppMode::Qa => render_qa(frame, app, area),
        AppMode::Graph => render_graph(frame, app, area),
        AppMode::Providers => render_providers(frame, app, area),
        AppMode::Help => render_help(frame, app, area),
    }
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let form = centered_rect(50, 9, area);
    frame.render_widget(Clear, form);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form);

    let field_style = |field: LoginField| {
        if app.login_field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let username = Paragraph::new(app.login_username.as_str())
        .style(field_style(LoginField::Username))
        .block(Block::default().borders(Borders::ALL).title(" Username "));
    frame.render_widget(username, chunks[0]);

    let masked = "*".repeat(app.login_password.len());
    let password = Paragraph::new(masked)
        .style(field_style(LoginField::Password))
        .block(Block::default().borders(Borders::ALL).title(" Password "));
    frame.render_widget(password, chunks[1]);

    let hint = Paragraph::new("Tab: switch field | Enter: log in | Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

fn render_documents(frame: &mut Frame, app: &App, area: Rect) {
    let (list_area, input_area) = if app.upload_input_active {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let items: Vec<ListItem> = app
        .documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let style = if i == app.doc_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<6} ", doc.file_type),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(&doc.file_name, Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    "  {} chars, {} entities, {} chunks",
                    doc.text_length, doc.entities_count, doc.chunks_count
                )),
            ]);

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Documents ({}) ", app.documents.len())),
    );
    frame.render_widget(list, list_area);

    if let Some(input_area) = input_area {
        let input = Paragraph::new(app.upload_path.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Upload file path (Enter to send, Esc to cancel) "),
            );
        frame.render_widget(input, input_area);
        frame.set_cursor_position((
            input_area.x + app::cursor_column(&app.upload_path, app.upload_path.len()) + 1,
            input_area.y + 1,
        ));
    }
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mode_indicator = match app.search_mode {
        SearchMode::Semantic => "[SEM]".to_string(),
        SearchMode::Hybrid => format!("[HYB {:.1}]", app.semantic_weight),
    };

    let input = Paragraph::new(format!("{} {}", mode_indicator, app.query))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Tab to change mode, +/- weight) "),
        );
    frame.render_widget(input, chunks[0]);

    frame.set_cursor_position((
        chunks[0].x + mode_indicator.len() as u16 + app::cursor_column(&app.query, app.cursor_pos) + 2,
        chunks[0].y + 1,
    ));

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .take((chunks[1].height as usize).saturating_sub(2))
        .map(|(i, hit)| {
            let style = if i == app.result_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let score = hit.display_score();
            let score_color = if score >= 0.7 {
                Color::Green
            } else if score >= 0.4 {
                Color::Yellow
            } else {
                Color::DarkGray
            };

            let snippet: String = hit.text.chars().take(120).collect();
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>3}% ", (score * 100.0) as u32),
                    Style::default().fg(score_color),
                ),
                Span::raw(snippet),
            ]);

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({}) ", app.results.len())),
    );
    frame.render_widget(list, chunks[1]);
}

fn render_qa(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(app.question.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ask a question (Enter to send) "),
        );
    frame.render_widget(input, chunks[0]);

    frame.set_cursor_position((
        chunks[0].x + app::cursor_column(&app.question, app.question_cursor) + 1,
        chunks[0].y + 1,
    ));

    let mut lines: Vec<Line> = Vec::new();
    for turn in app.transcript.turns() {
        match turn {
            Turn::Question { text, .. } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "You: ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(text.as_str()),
                ]));
            }
            Turn::Answer {
                text,
                sources,
                confidence,
                model,
                ..
            } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", model),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        format!("[{:.0}%]", confidence * 100.0),
                        Style::default().fg(confidence_color(*confidence)),
                    ),
                ]));
                for answer_line in text.lines() {
                    lines.push(Line::from(Span::raw(answer_line.to_string())));
                }
                if !sources.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {} source passages", sources.len()),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            Turn::Failure { message, .. } => {
                lines.push(Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let transcript = Paragraph::new(lines)
        .scroll((app.transcript_scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL).title(" Transcript "))
        .wrap(Wrap { trim: false });
    frame.render_widget(transcript, chunks[1]);
}

fn render_graph(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref view) = app.graph_view else {
        let empty = Paragraph::new("No graph loaded. Select a document and press g.")
            .block(Block::default().borders(Borders::ALL).title(" Graph "));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let visible = view.visible(&app.render_settings);
    let truncated = visible.nodes.len() < view.nodes.len();

    let mut lines: Vec<Line> = Vec::new();
    for node in &visible.nodes {
        let object = app.object_cache.obtain(node.kind, &app.render_settings).clone();
        let mut spans = vec![Span::styled(
            format!("{:>10} ", node.kind.label()),
            Style::default().fg(kind_color(node.kind)),
        )];
        if object.label_visible {
            spans.push(Span::raw(node.name.clone()));
        }
        spans.push(Span::styled(
            format!(
                "  w={:.1} r={:.1} seg={}",
                node.weight, object.radius, object.sphere_segments
            ),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    let doc = app.graph_doc.as_deref().unwrap_or("-");
    let mut title = format!(
        " Graph: {} ({} nodes, {} links",
        doc,
        visible.nodes.len(),
        visible.links.len()
    );
    if truncated {
        title.push_str(", truncated");
    }
    title.push_str(") ");

    let nodes = Paragraph::new(lines)
        .scroll((app.graph_scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(nodes, chunks[0]);

    let mut legend: Vec<Line> = vec![
        Line::from(format!("quality: {}", app.render_settings.quality.label())),
        Line::from(format!("node size: {:.1}", app.render_settings.node_size)),
        Line::from(format!(
            "labels: {}",
            if app.render_settings.show_labels {
                "on"
            } else {
                "off"
            }
        )),
        Line::from(""),
    ];
    for (kind, count) in view.kind_counts() {
        legend.push(Line::from(vec![
            Span::styled(
                format!("{:>12} ", kind.label()),
                Style::default().fg(kind_color(kind)),
            ),
            Span::raw(format!("{}", count)),
        ]));
    }

    let panel = Paragraph::new(legend).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings (c/l/+/-) "),
    );
    frame.render_widget(panel, chunks[1]);
}

fn render_providers(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .panels
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            let style = if i == app.panel_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let state_color = match panel.state {
                PanelState::TestPassed | PanelState::Saved => Color::Green,
                PanelState::TestFailed => Color::Red,
                PanelState::Testing | PanelState::Saving => Color::Yellow,
                _ => Color::DarkGray,
            };

            let key_display = if panel.api_key.is_empty() {
                "(no key)".to_string()
            } else if i == app.panel_selected && app.key_input_active {
                panel.api_key.clone()
            } else {
                "*".repeat(panel.api_key.len().min(12))
            };

            let mut spans = vec![
                Span::styled(
                    format!("{:<12}", panel.display_name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("[{}] ", panel.state.label()),
                    Style::default().fg(state_color),
                ),
                Span::raw(format!(
                    "model: {}  key: {}",
                    panel.selected_model.as_deref().unwrap_or("-"),
                    key_display
                )),
            ];
            if let Some(ref msg) = panel.last_message {
                spans.push(Span::styled(
                    format!("  {}", msg),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = if app.key_input_active {
        " Providers (typing key, Enter/Esc to finish) "
    } else {
        " Providers (i: key, m: model, t: test, s: save, w: switch) "
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_summary_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref summary) = app.summary_popup else {
        return;
    };
    let popup = centered_rect(70, area.height.saturating_sub(6).max(8), area);
    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(summary.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary (Esc to close) "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        "Graphbook TUI - Keyboard Shortcuts",
        "",
        "Global:",
        "  1-5       - Switch view (Documents/Search/Ask/Graph/Providers)",
        "  ?         - This help screen",
        "",
        "Documents:",
        "  j/k       - Navigate up/down",
        "  r         - Refresh list",
        "  u         - Upload a document",
        "  d         - Delete selected document",
        "  s         - Summarize selected document",
        "  g/Enter   - Open knowledge graph",
        "  Esc/q     - Quit",
        "",
        "Search:",
        "  Type to search, Enter to run",
        "  Tab       - Toggle semantic/hybrid",
        "  +/-       - Adjust semantic weight (hybrid)",
        "  Ctrl+y    - Copy selected snippet",
        "",
        "Ask:",
        "  Type a question, Enter to send",
        "  Up/Down   - Scroll transcript",
        "",
        "Graph:",
        "  c         - Cycle render quality",
        "  l         - Toggle labels",
        "  +/-       - Node size",
        "  j/k       - Scroll",
        "",
        "Providers:",
        "  j/k       - Navigate",
        "  i         - Edit API key",
        "  m         - Cycle model",
        "  t         - Test key",
        "  s         - Save configuration",
        "  w         - Switch to this provider",
    ];

    let mut lines: Vec<Line> = help_text
        .iter()
        .map(|&text| Line::from(Span::raw(text)))
        .collect();

    let disabled: Vec<&str> = [
        (app.features.vector_search, "search"),
        (app.features.rag_qa, "question answering"),
        (app.features.knowledge_graph, "knowledge graph"),
        (app.features.file_parsing, "file parsing"),
    ]
    .iter()
    .filter(|(enabled, _)| !enabled)
    .map(|(_, name)| *name)
    .collect();
    if !disabled.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Not enabled on this backend: {}", disabled.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (q/Esc to close) "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = if app.is_loading {
        "Loading...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        let mode_help = match app.mode {
            AppMode::Login => "Tab: field | Enter: log in | Esc: quit",
            AppMode::Documents => {
                "j/k: navigate | r: refresh | u: upload | d: delete | s: summary | g: graph"
            }
            AppMode::Search => "Enter: search | Tab: mode | +/-: weight | 1-5: views",
            AppMode::Qa => "Enter: ask | Up/Down: scroll | 1-5: views",
            AppMode::Graph => "c: quality | l: labels | +/-: size | Esc: back",
            AppMode::Providers => "i: key | m: model | t: test | s: save | w: switch | Esc: back",
            AppMode::Help => "q/Esc: back",
        };
        mode_help.to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn confidence_color(confidence: f32) -> Color {
    match ConfidenceBand::of(confidence) {
        ConfidenceBand::High => Color::Green,
        ConfidenceBand::Good => Color::Blue,
        ConfidenceBand::Fair => Color::Yellow,
        ConfidenceBand::Low => Color::Red,
    }
}

fn kind_color(kind: NodeKind) -> Color {
    match kind {
        NodeKind::Person => Color::Magenta,
        NodeKind::Organization => Color::LightMagenta,
        NodeKind::Location => Color::Cyan,
        NodeKind::Date => Color::LightYellow,
        NodeKind::Number => Color::Yellow,
        NodeKind::Product => Color::Blue,
        NodeKind::Module => Color::LightBlue,
        NodeKind::Technology => Color::Green,
        NodeKind::Unknown => Color::LightCyan,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbook_api::api::search::ChunkRef;
    use graphbook_api::{ApiClient, Config, FeatureFlags, SearchHit, Session};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app(features: FeatureFlags) -> App {
        let config = Config {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        App::new(client, &config, Session::default(), features)
    }

    fn all_features() -> FeatureFlags {
        FeatureFlags {
            file_parsing: true,
            nlp_processing: true,
            knowledge_graph: true,
            vector_search: true,
            rag_qa: true,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn tiny_results_pane_renders_without_panic() {
        let mut app = test_app(all_features());
        app.mode = AppMode::Search;
        app.results = vec![SearchHit {
            id: None,
            text: "a passage".to_string(),
            score: 0.9,
            combined_score: None,
            keyword_score: None,
            metadata: ChunkRef::default(),
        }];

        // Too short for the results list to keep any rows
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
    }

    #[test]
    fn help_lists_disabled_features() {
        let mut app = test_app(FeatureFlags {
            file_parsing: true,
            nlp_processing: true,
            knowledge_graph: false,
            vector_search: true,
            rag_qa: false,
        });
        app.mode = AppMode::Help;

        let backend = TestBackend::new(80, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Not enabled on this backend"));
        assert!(text.contains("question answering"));
        assert!(text.contains("knowledge graph"));
    }
}

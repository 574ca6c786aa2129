//! TUI event handling

use crate::app::{self, App, AppMode, LoginField};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub async fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match app.mode {
                AppMode::Login => handle_login_input(app, key),
                AppMode::Documents => handle_documents_input(app, key).await,
                AppMode::Search => handle_search_input(app, key).await,
                AppMode::Qa => handle_qa_input(app, key).await,
                AppMode::Graph => handle_graph_input(app, key),
                AppMode::Providers => handle_providers_input(app, key).await,
                AppMode::Help => handle_help_input(app, key),
            }
        }
    }
    Ok(())
}

/// Mode switching shared by every non-input context
async fn switch_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('1') => {
            enter_mode(app, AppMode::Documents);
            true
        }
        KeyCode::Char('2') => {
            enter_mode(app, AppMode::Search);
            true
        }
        KeyCode::Char('3') => {
            enter_mode(app, AppMode::Qa);
            true
        }
        KeyCode::Char('4') => {
            enter_mode(app, AppMode::Graph);
            true
        }
        KeyCode::Char('5') => {
            if app.panels.is_empty() {
                app.load_providers().await;
            } else {
                app.mode = AppMode::Providers;
            }
            true
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help;
            true
        }
        _ => false,
    }
}

fn enter_mode(app: &mut App, mode: AppMode) {
    app.mode = mode;
    if !app::mode_enabled(&app.features, mode) {
        app.status_message = Some("This feature is not enabled on the backend".to_string());
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            app.login_field = match app.login_field {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
        KeyCode::Enter => match app.login_field {
            LoginField::Username => app.login_field = LoginField::Password,
            LoginField::Password => app.try_login(),
        },
        KeyCode::Char(c) => match app.login_field {
            LoginField::Username => app.login_username.push(c),
            LoginField::Password => app.login_password.push(c),
        },
        KeyCode::Backspace => {
            match app.login_field {
                LoginField::Username => app.login_username.pop(),
                LoginField::Password => app.login_password.pop(),
            };
        }
        _ => {}
    }
}

async fn handle_documents_input(app: &mut App, key: KeyEvent) {
    if app.summary_popup.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.summary_popup = None;
        }
        return;
    }

    if app.upload_input_active {
        match key.code {
            KeyCode::Esc => {
                app.upload_input_active = false;
                app.upload_path.clear();
            }
            KeyCode::Enter => app.upload_from_input().await,
            KeyCode::Char(c) => app.upload_path.push(c),
            KeyCode::Backspace => {
                app.upload_path.pop();
            }
            _ => {}
        }
        return;
    }

    if switch_mode(app, key).await {
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next_doc(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_doc(),
        KeyCode::Char('r') => app.refresh_documents().await,
        KeyCode::Char('u') => app.upload_input_active = true,
        KeyCode::Char('d') => app.delete_selected().await,
        KeyCode::Char('s') => app.summarize_selected().await,
        KeyCode::Char('g') | KeyCode::Enter => app.load_graph_for_selected().await,
        _ => {}
    }
}

async fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if !app.query.is_empty() {
                app.query.clear();
                app.cursor_pos = 0;
                app.results.clear();
            } else {
                app.mode = AppMode::Documents;
            }
        }
        KeyCode::Tab => app.toggle_search_mode(),
        KeyCode::Char('+') => app.adjust_weight(0.1),
        KeyCode::Char('-') => app.adjust_weight(-0.1),
        KeyCode::Enter => app.run_search().await,
        KeyCode::Down => {
            if app.result_selected + 1 < app.results.len() {
                app.result_selected += 1;
            }
        }
        KeyCode::Up => {
            app.result_selected = app.result_selected.saturating_sub(1);
        }
        KeyCode::Char('y') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
            copy_selected_result(app);
        }
        KeyCode::Char(c) => app::insert_char(&mut app.query, &mut app.cursor_pos, c),
        KeyCode::Backspace => app::delete_char_before(&mut app.query, &mut app.cursor_pos),
        KeyCode::Left => app::move_cursor_left(&app.query, &mut app.cursor_pos),
        KeyCode::Right => app::move_cursor_right(&app.query, &mut app.cursor_pos),
        _ => {}
    }
}

fn copy_selected_result(app: &mut App) {
    if let Some(hit) = app.results.get(app.result_selected) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(&hit.text);
            app.status_message = Some("Copied snippet to clipboard".to_string());
        }
    }
}

async fn handle_qa_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if !app.question.is_empty() {
                app.question.clear();
                app.question_cursor = 0;
            } else {
                app.mode = AppMode::Documents;
            }
        }
        KeyCode::Enter => app.ask().await,
        KeyCode::Down => app.transcript_scroll += 1,
        KeyCode::Up => app.transcript_scroll = app.transcript_scroll.saturating_sub(1),
        KeyCode::Left => app::move_cursor_left(&app.question, &mut app.question_cursor),
        KeyCode::Right => app::move_cursor_right(&app.question, &mut app.question_cursor),
        KeyCode::Char(c) => app::insert_char(&mut app.question, &mut app.question_cursor, c),
        KeyCode::Backspace => {
            app::delete_char_before(&mut app.question, &mut app.question_cursor)
        }
        _ => {}
    }
}

fn handle_graph_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.mode = AppMode::Documents;
        }
        KeyCode::Char('1') => app.mode = AppMode::Documents,
        KeyCode::Char('2') => app.mode = AppMode::Search,
        KeyCode::Char('3') => app.mode = AppMode::Qa,
        KeyCode::Char('?') => app.mode = AppMode::Help,
        KeyCode::Char('c') => app.cycle_quality(),
        KeyCode::Char('l') => app.toggle_labels(),
        KeyCode::Char('+') => app.adjust_node_size(0.5),
        KeyCode::Char('-') => app.adjust_node_size(-0.5),
        KeyCode::Down | KeyCode::Char('j') => app.graph_scroll += 1,
        KeyCode::Up | KeyCode::Char('k') => {
            app.graph_scroll = app.graph_scroll.saturating_sub(1)
        }
        _ => {}
    }
}

async fn handle_providers_input(app: &mut App, key: KeyEvent) {
    if app.key_input_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.key_input_active = false,
            KeyCode::Char(c) => {
                if let Some(panel) = app.panels.get_mut(app.panel_selected) {
                    let mut key_text = panel.api_key.clone();
                    key_text.push(c);
                    panel.edit_key(key_text);
                }
            }
            KeyCode::Backspace => {
                if let Some(panel) = app.panels.get_mut(app.panel_selected) {
                    let mut key_text = panel.api_key.clone();
                    key_text.pop();
                    panel.edit_key(key_text);
                }
            }
            _ => {}
        }
        return;
    }

    if switch_mode(app, key).await {
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.mode = AppMode::Documents;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.panel_selected + 1 < app.panels.len() {
                app.panel_selected += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.panel_selected = app.panel_selected.saturating_sub(1);
        }
        KeyCode::Char('i') => app.key_input_active = true,
        KeyCode::Char('m') => app.cycle_panel_model(),
        KeyCode::Char('t') => app.test_selected_panel().await,
        KeyCode::Char('s') => app.save_selected_panel().await,
        KeyCode::Char('w') => app.switch_selected_panel().await,
        _ => {}
    }
}

fn handle_help_input(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.mode = AppMode::Documents;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use graphbook_api::{ApiClient, Config, FeatureFlags, Session};

    fn test_app() -> App {
        let config = Config {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        App::new(client, &config, Session::default(), FeatureFlags::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn question_box_accepts_multibyte_input() {
        let mut app = test_app();
        app.mode = AppMode::Qa;

        handle_qa_input(&mut app, key(KeyCode::Char('中'))).await;
        handle_qa_input(&mut app, key(KeyCode::Char('文'))).await;
        assert_eq!(app.question, "中文");

        handle_qa_input(&mut app, key(KeyCode::Backspace)).await;
        assert_eq!(app.question, "中");
        assert_eq!(app.question_cursor, "中".len());
    }

    #[tokio::test]
    async fn search_box_edits_multibyte_input_mid_string() {
        let mut app = test_app();
        app.mode = AppMode::Search;

        for c in "实体".chars() {
            handle_search_input(&mut app, key(KeyCode::Char(c))).await;
        }
        handle_search_input(&mut app, key(KeyCode::Left)).await;
        handle_search_input(&mut app, key(KeyCode::Char('个'))).await;
        assert_eq!(app.query, "实个体");

        handle_search_input(&mut app, key(KeyCode::Right)).await;
        assert_eq!(app.cursor_pos, app.query.len());
    }
}

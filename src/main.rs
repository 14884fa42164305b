mod api;
mod catalog;
mod config;
mod cookies;
mod form;
mod format;
mod logging;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::{io, time::Duration};

use crate::api::{PredictionClient, PredictionResponse};
use crate::catalog::VehicleSpec;
use crate::config::AppConfig;
use crate::form::FormState;
use crate::ui::localization::tr;
use crate::ui::tabs::predict::PredictAction;
use crate::ui::{UIRenderer, UIState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppTab {
    Predict,
    Settings,
}

pub struct AppState {
    pub catalog: Vec<VehicleSpec>,
    pub form: FormState,
    pub client: PredictionClient,
    pub results: Option<PredictionResponse>,
    pub alert: Option<String>,

    pub active_tab: AppTab,
    pub ui_state: UIState,
    pub config: AppConfig,
}

impl AppState {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_default();

        Self {
            catalog: catalog::presets(),
            form: FormState::new(),
            client: PredictionClient::new(&config.api_base_url),
            results: None,
            alert: None,

            active_tab: AppTab::Predict,
            ui_state: UIState::new(&config.theme),
            config,
        }
    }

    fn tick(&mut self) {
        self.ui_state.update_blink();

        if let Some(outcome) = self.client.poll_finished() {
            match outcome {
                Ok(resp) => self.results = Some(resp),
                // Every failure kind collapses into the same alert; the
                // status code or transport detail rides along in the text.
                Err(msg) => {
                    self.alert = Some(format!(
                        "{}: {}",
                        tr("alert_predict", &self.config.language),
                        msg
                    ));
                }
            }
        }
    }

    fn submit(&mut self) {
        let request = self.form.to_request(&self.config.fallback_country);
        let token = cookies::load_csrf_token(&self.config.cookie_file);
        self.client.submit(request, token);
    }

    fn is_editing(&self) -> bool {
        match self.active_tab {
            AppTab::Predict => self.ui_state.predict.is_editing,
            AppTab::Settings => self.ui_state.settings.is_editing,
        }
    }

    fn route_key(&mut self, code: KeyCode) {
        match self.active_tab {
            AppTab::Predict => {
                let action =
                    self.ui_state
                        .predict
                        .handle_input(code, &mut self.form, &self.catalog);
                if action == PredictAction::Submit {
                    self.submit();
                }
            }
            AppTab::Settings => {
                self.ui_state.settings.handle_input(code, &mut self.config);
            }
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let mut app = AppState::new();
    logging::init(app.config.enable_logging)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let renderer = UIRenderer::new();

    loop {
        app.tick();

        terminal.draw(|f| {
            renderer.render(f, &app);
        })?;

        if event::poll(Duration::from_millis(app.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    // A raised alert blocks everything until dismissed.
                    if app.alert.is_some() {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                            app.alert = None;
                        }
                        continue;
                    }

                    match (key.code, key.modifiers) {
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,

                        // While a field is being edited, every key belongs
                        // to the editor, including q/1/2/Tab.
                        _ if app.is_editing() => app.route_key(key.code),

                        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => break,

                        (KeyCode::Char('1'), _) | (KeyCode::F(1), _) => {
                            app.active_tab = AppTab::Predict
                        }
                        (KeyCode::Char('2'), _) | (KeyCode::F(2), _) => {
                            app.active_tab = AppTab::Settings
                        }

                        (KeyCode::Tab, _) => {
                            app.active_tab = match app.active_tab {
                                AppTab::Predict => AppTab::Settings,
                                AppTab::Settings => AppTab::Predict,
                            };
                        }

                        _ => app.route_key(key.code),
                    }
                }
                Event::Resize(_, _) => {
                    // Auto-resize handled in UI
                }
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if app.config.auto_save {
        app.config.save().ok();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn test_app() -> AppState {
        // Never touch ./config.json from tests.
        let config = AppConfig::default();
        AppState {
            catalog: catalog::presets(),
            form: FormState::new(),
            client: PredictionClient::new(&config.api_base_url),
            results: None,
            alert: None,
            active_tab: AppTab::Predict,
            ui_state: UIState::new(&config.theme),
            config,
        }
    }

    #[test]
    fn test_failed_request_raises_alert_and_keeps_results_hidden() {
        let mut app = test_app();
        *app.client.status.lock().unwrap() =
            api::PredictStatus::Failed("HTTP error! status: 500".to_string());

        app.tick();

        let alert = app.alert.as_deref().unwrap();
        assert!(alert.contains("HTTP error! status: 500"), "{alert}");
        assert!(app.results.is_none());
    }

    #[test]
    fn test_successful_request_reveals_results() {
        let mut app = test_app();
        let mut resp = BTreeMap::new();
        resp.insert("Germany".to_string(), 24500.5);
        *app.client.status.lock().unwrap() = api::PredictStatus::Ready(resp);

        app.tick();

        assert!(app.alert.is_none());
        let results = app.results.as_ref().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results["Germany"], 24500.5);
    }

    #[test]
    fn test_submit_without_selection_uses_fallback() {
        let app = test_app();
        let request = app.form.to_request(&app.config.fallback_country);
        assert_eq!(request.country, "Spain");
    }
}

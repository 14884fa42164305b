use crate::config::{AppConfig, Language};
use crate::ui::localization::tr;
use crate::AppState;
use crossterm::event::KeyCode;
use ratatui::{prelude::*, widgets::*};

/// Countries the fallback setting cycles through; every country that appears
/// in the preset catalog, with the service default first.
const COUNTRIES: [&str; 5] = ["Spain", "Finland", "Germany", "Belgium", "France"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsCategory {
    System,
    Connection,
}

pub struct SettingsState {
    pub category: SettingsCategory,
    pub selected_index: usize,
    pub is_editing: bool,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            category: SettingsCategory::System,
            selected_index: 0,
            is_editing: false,
        }
    }

    pub fn next_category(&mut self) {
        self.category = match self.category {
            SettingsCategory::System => SettingsCategory::Connection,
            SettingsCategory::Connection => SettingsCategory::System,
        };
        self.selected_index = 0;
        self.is_editing = false;
    }

    pub fn handle_input(&mut self, key: KeyCode, config: &mut AppConfig) {
        if !self.is_editing {
            match key {
                KeyCode::Down => self.selected_index += 1,
                KeyCode::Up => {
                    if self.selected_index > 0 {
                        self.selected_index -= 1
                    }
                }

                KeyCode::Right | KeyCode::Left => self.next_category(),

                KeyCode::Char('a') | KeyCode::Char('A') => {
                    self.category = SettingsCategory::System;
                    self.selected_index = 0;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.category = SettingsCategory::Connection;
                    self.selected_index = 0;
                }

                KeyCode::Enter => {
                    if self.category == SettingsCategory::System {
                        self.is_editing = true;
                    }
                }
                _ => {}
            }

            let max_items = self.get_item_count();
            if self.selected_index >= max_items {
                self.selected_index = max_items.saturating_sub(1);
            }
        } else {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.is_editing = false,
                KeyCode::Left => self.modify_value(config, -1),
                KeyCode::Right => self.modify_value(config, 1),
                _ => {}
            }
        }
    }

    fn get_item_count(&self) -> usize {
        match self.category {
            SettingsCategory::System => 5,
            SettingsCategory::Connection => 2,
        }
    }

    fn modify_value(&self, config: &mut AppConfig, delta: i64) {
        match self.category {
            SettingsCategory::System => match self.selected_index {
                0 => {
                    config.language = match config.language {
                        Language::English => Language::Spanish,
                        Language::Spanish => Language::English,
                    }
                }
                1 => {
                    config.fallback_country = cycle_country(&config.fallback_country, delta);
                }
                2 => config.auto_save = !config.auto_save,
                3 => config.enable_logging = !config.enable_logging,
                4 => {
                    config.tick_rate_ms =
                        (config.tick_rate_ms as i64 + delta).clamp(10, 1000) as u64
                }
                _ => {}
            },
            // Connection values are file-edited in config.json; shown read-only.
            SettingsCategory::Connection => {}
        }

        if config.auto_save {
            let _res = config.save();
        }
    }

    fn get_description(&self, lang: &Language) -> String {
        let is_es = *lang == Language::Spanish;
        match self.category {
            SettingsCategory::System => match self.selected_index {
                0 => {
                    if is_es {
                        "Idioma de la interfaz / Interface Language"
                    } else {
                        "Interface Language / Idioma de la interfaz"
                    }
                }
                1 => {
                    if is_es {
                        "País enviado cuando no se ha elegido ningún modelo."
                    } else {
                        "Country sent when no preset model was selected."
                    }
                }
                2 => {
                    if is_es {
                        "Guardar los ajustes automáticamente al cambiarlos."
                    } else {
                        "Automatically save settings when they change."
                    }
                }
                3 => {
                    if is_es {
                        "Escribir trazas en voltworth-tui.log (requiere reinicio)."
                    } else {
                        "Write traces to voltworth-tui.log (takes effect on restart)."
                    }
                }
                4 => {
                    if is_es {
                        "Intervalo de refresco de la interfaz (ms)."
                    } else {
                        "UI refresh interval (ms)."
                    }
                }
                _ => "",
            },
            SettingsCategory::Connection => match self.selected_index {
                0 => {
                    if is_es {
                        "Dirección del servicio de predicción. Editar en config.json."
                    } else {
                        "Prediction service address. Edit in config.json."
                    }
                }
                1 => {
                    if is_es {
                        "Fichero del que se lee la cookie csrftoken."
                    } else {
                        "File the csrftoken cookie is read from."
                    }
                }
                _ => "",
            },
        }
        .to_string()
    }
}

fn cycle_country(current: &str, delta: i64) -> String {
    let pos = COUNTRIES.iter().position(|c| *c == current).unwrap_or(0) as i64;
    let len = COUNTRIES.len() as i64;
    let next = (pos + delta).rem_euclid(len);
    COUNTRIES[next as usize].to_string()
}

pub fn render(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(app.ui_state.get_color(&theme.border)))
        .title(format!(" {} ", tr("settings_title", lang)))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let inner_area = main_block.inner(area);
    f.render_widget(main_block, area);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(inner_area);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(main_layout[1]);

    render_sidebar(f, main_layout[0], app);
    render_settings_list(f, right_layout[0], app);
    render_description_panel(f, right_layout[1], app);
}

fn render_sidebar(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::new(0, 1, 1, 1));

    let categories = vec![
        (SettingsCategory::System, tr("cat_system", lang), "💻", "[A]"),
        (
            SettingsCategory::Connection,
            tr("cat_connection", lang),
            "🔌",
            "[S]",
        ),
    ];

    let items: Vec<ListItem<'_>> = categories
        .iter()
        .map(|(cat, name, icon, key)| {
            let is_selected = app.ui_state.settings.category == *cat;

            let (bg, fg, modif) = if is_selected {
                (
                    app.ui_state.get_color(&theme.highlight),
                    Color::Black,
                    Modifier::BOLD,
                )
            } else {
                (Color::Reset, Color::Gray, Modifier::empty())
            };

            let key_style = if is_selected {
                Style::default()
                    .bg(bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let name_span = Span::styled(
                format!(" {} {}", icon, name),
                Style::default().bg(bg).fg(fg).add_modifier(modif),
            );
            let key_span = Span::styled(format!(" {} ", key), key_style);

            let spacer = Span::styled(
                " ".repeat(area.width.saturating_sub(name.len() as u16 + 8) as usize),
                Style::default().bg(bg),
            );

            ListItem::new(Line::from(vec![name_span, spacer, key_span]))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_settings_list(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let count = app.ui_state.settings.get_item_count();
    let constraints = vec![Constraint::Length(3); count];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    match app.ui_state.settings.category {
        SettingsCategory::System => render_system_settings(f, &rows, app),
        SettingsCategory::Connection => render_connection_settings(f, &rows, app),
    }
}

fn render_item(
    f: &mut Frame<'_>,
    area: Rect,
    idx: usize,
    label: String,
    value: String,
    is_toggle: bool,
    app: &AppState,
) {
    let selected = idx == app.ui_state.settings.selected_index;
    let editing = app.ui_state.settings.is_editing;
    let theme = &app.ui_state.theme;

    let row_style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let block = Block::default()
        .style(row_style)
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let label_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    f.render_widget(
        Paragraph::new(label)
            .style(label_style)
            .alignment(Alignment::Left),
        chunks[0],
    );

    let val_style = if selected && editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default()
            .fg(app.ui_state.get_color(&theme.highlight))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let val_text = if selected && editing {
        format!("◄ {} ►", value)
    } else if is_toggle {
        let is_on = value.contains("ON") || value.contains("SÍ");
        let box_char = if is_on { "[■]" } else { "[ ]" };
        format!("{} {}", box_char, value)
    } else if selected {
        format!("≡ {} ≡", value)
    } else {
        format!("  {}  ", value)
    };

    f.render_widget(
        Paragraph::new(val_text)
            .style(val_style)
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_system_settings(f: &mut Frame<'_>, areas: &[Rect], app: &AppState) {
    let config = &app.config;
    let lang = &config.language;
    let is_es = *lang == Language::Spanish;

    let lang_str = match config.language {
        Language::English => "ENGLISH",
        Language::Spanish => "ESPAÑOL",
    };

    let on_off = |on: bool| {
        if on {
            if is_es { "SÍ" } else { "ON" }
        } else {
            if is_es { "NO" } else { "OFF" }
        }
        .to_string()
    };

    let items = vec![
        (tr("lang", lang), lang_str.to_string(), false),
        (
            tr("fallback_country", lang),
            config.fallback_country.clone(),
            false,
        ),
        (tr("auto_save", lang), on_off(config.auto_save), true),
        (tr("logging", lang), on_off(config.enable_logging), true),
        (
            tr("tick_rate", lang),
            format!("{} ms", config.tick_rate_ms),
            false,
        ),
    ];

    for (i, (label, val, is_toggle)) in items.into_iter().enumerate() {
        if i < areas.len() {
            render_item(f, areas[i], i, label, val, is_toggle, app);
        }
    }
}

fn render_connection_settings(f: &mut Frame<'_>, areas: &[Rect], app: &AppState) {
    let config = &app.config;
    let lang = &config.language;

    let items = vec![
        (tr("api_url", lang), config.api_base_url.clone(), false),
        (
            tr("cookie_file", lang),
            config.cookie_file.display().to_string(),
            false,
        ),
    ];

    for (i, (label, val, is_toggle)) in items.into_iter().enumerate() {
        if i < areas.len() {
            render_item(f, areas[i], i, label, val, is_toggle, app);
        }
    }
}

fn render_description_panel(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let desc = app.ui_state.settings.get_description(&app.config.language);
    let lang = &app.config.language;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::new(2, 2, 1, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let p_desc = Paragraph::new(format!("ℹ️ {}", desc)).style(Style::default().fg(Color::White));
    let p_ctrl = Paragraph::new(tr("footer_keys_settings", lang))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);

    f.render_widget(p_desc, chunks[0]);
    f.render_widget(p_ctrl, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_country_wraps_both_ways() {
        assert_eq!(cycle_country("Spain", 1), "Finland");
        assert_eq!(cycle_country("France", 1), "Spain");
        assert_eq!(cycle_country("Spain", -1), "France");
        // Unknown value restarts from the default.
        assert_eq!(cycle_country("Atlantis", 1), "Finland");
    }

    #[test]
    fn test_language_toggle() {
        let mut config = AppConfig::default();
        config.auto_save = false;
        let state = SettingsState::new();

        assert_eq!(config.language, Language::Spanish);
        state.modify_value(&mut config, 1);
        assert_eq!(config.language, Language::English);
        state.modify_value(&mut config, 1);
        assert_eq!(config.language, Language::Spanish);
    }

    #[test]
    fn test_selection_clamped_to_item_count() {
        let mut config = AppConfig::default();
        config.auto_save = false;
        let mut state = SettingsState::new();

        for _ in 0..10 {
            state.handle_input(KeyCode::Down, &mut config);
        }
        assert_eq!(state.selected_index, state.get_item_count() - 1);
    }

    #[test]
    fn test_connection_category_is_read_only() {
        let mut config = AppConfig::default();
        config.auto_save = false;
        let mut state = SettingsState::new();
        state.category = SettingsCategory::Connection;

        // Enter must not start editing, and modify must not change anything.
        state.handle_input(KeyCode::Enter, &mut config);
        assert!(!state.is_editing);

        let before = config.api_base_url.clone();
        state.modify_value(&mut config, 1);
        assert_eq!(config.api_base_url, before);
    }
}

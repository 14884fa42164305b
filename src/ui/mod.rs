use crate::ui::localization::tr;
use crate::{AppState, AppTab};
use ratatui::{prelude::*, widgets::*};

pub mod localization;
pub mod tabs;

pub struct UIState {
    pub theme: crate::config::Theme,
    pub blink_state: bool,
    pub last_blink: std::time::Instant,
    pub predict: tabs::predict::PredictState,
    pub settings: tabs::settings::SettingsState,
}

impl UIState {
    pub fn new(theme: &crate::config::Theme) -> Self {
        Self {
            theme: theme.clone(),
            blink_state: false,
            last_blink: std::time::Instant::now(),
            predict: tabs::predict::PredictState::new(),
            settings: tabs::settings::SettingsState::new(),
        }
    }

    pub fn get_color(&self, color_tuple: &crate::config::ColorTuple) -> Color {
        Color::Rgb(color_tuple.r, color_tuple.g, color_tuple.b)
    }

    pub fn update_blink(&mut self) {
        if self.last_blink.elapsed() >= std::time::Duration::from_millis(500) {
            self.blink_state = !self.blink_state;
            self.last_blink = std::time::Instant::now();
        }
    }
}

pub struct UIRenderer;

impl UIRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, app: &AppState) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(f.size());

        self.render_header(f, main_layout[0], app);

        match app.active_tab {
            AppTab::Predict => tabs::predict::render(f, main_layout[1], app),
            AppTab::Settings => tabs::settings::render(f, main_layout[1], app),
        }

        self.render_footer(f, main_layout[2], app);

        // The alert is a blocking popup: drawn last, over everything.
        if let Some(message) = &app.alert {
            self.render_alert(f, f.size(), message, app);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, app: &AppState) {
        let theme = &app.ui_state.theme;
        let lang = &app.config.language;

        let titles = vec![
            format!("🚗 {}", tr("tab_predict", lang)),
            format!("⚙️ {}", tr("tab_set", lang)),
        ];

        let tab_widget = Tabs::new(titles)
            .select(match app.active_tab {
                AppTab::Predict => 0,
                AppTab::Settings => 1,
            })
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(app.ui_state.get_color(&theme.border)))
                    .title(format!(" ⚡ VOLTWORTH v{} ", env!("CARGO_PKG_VERSION")))
                    .title_style(
                        Style::default()
                            .fg(app.ui_state.get_color(&theme.accent))
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().fg(app.ui_state.get_color(&theme.text)))
            .highlight_style(
                Style::default()
                    .fg(app.ui_state.get_color(&theme.highlight))
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");

        f.render_widget(tab_widget, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, app: &AppState) {
        let lang = &app.config.language;

        let (status, status_color) = if app.client.is_sending() {
            let blink = if app.ui_state.blink_state { "●" } else { "○" };
            (
                format!("{} {}", blink, tr("footer_sending", lang)),
                Color::Yellow,
            )
        } else {
            (format!("● {}", tr("footer_idle", lang)), Color::Green)
        };

        let keys = match app.active_tab {
            AppTab::Predict => {
                if app.ui_state.predict.is_editing {
                    tr("footer_keys_edit", lang)
                } else if app.ui_state.predict.focus == tabs::predict::PredictFocus::Cards {
                    tr("footer_keys_cards", lang)
                } else {
                    tr("footer_keys_form", lang)
                }
            }
            AppTab::Settings => tr("footer_keys_settings", lang),
        };

        let footer = Paragraph::new(format!("{} | {}", status, keys))
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(footer, area);
    }

    fn render_alert(&self, f: &mut Frame, area: Rect, message: &str, app: &AppState) {
        let lang = &app.config.language;
        let popup_area = center_rect(area, 60, 9);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .title(" ⚠ ERROR ")
            .title_alignment(Alignment::Center);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                tr("alert_dismiss", lang),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let p = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, popup_area);
        f.render_widget(p, popup_area);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}

use crate::catalog::VehicleSpec;
use crate::form::{FormField, FormState};
use crate::format::format_price;
use crate::ui::localization::tr;
use crate::AppState;
use crossterm::event::KeyCode;
use ratatui::{prelude::*, widgets::*};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictFocus {
    Cards,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictAction {
    None,
    Submit,
}

pub struct PredictState {
    pub focus: PredictFocus,
    pub card_cursor: usize,
    pub field_cursor: usize,
    pub is_editing: bool,
}

impl PredictState {
    pub fn new() -> Self {
        Self {
            focus: PredictFocus::Cards,
            card_cursor: 0,
            field_cursor: 0,
            is_editing: false,
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyCode,
        form: &mut FormState,
        catalog: &[VehicleSpec],
    ) -> PredictAction {
        if self.is_editing {
            let field = FormField::ALL[self.field_cursor];
            match key {
                KeyCode::Enter | KeyCode::Esc => self.is_editing = false,
                KeyCode::Backspace => {
                    form.value_mut(field).pop();
                }
                KeyCode::Char(c) => form.value_mut(field).push(c),
                _ => {}
            }
            return PredictAction::None;
        }

        match key {
            KeyCode::F(5) => return PredictAction::Submit,
            KeyCode::Left => self.focus = PredictFocus::Cards,
            KeyCode::Right => self.focus = PredictFocus::Form,
            KeyCode::Down => match self.focus {
                PredictFocus::Cards => {
                    if self.card_cursor + 1 < catalog.len() {
                        self.card_cursor += 1;
                    }
                }
                PredictFocus::Form => {
                    if self.field_cursor + 1 < FormField::ALL.len() {
                        self.field_cursor += 1;
                    }
                }
            },
            KeyCode::Up => match self.focus {
                PredictFocus::Cards => self.card_cursor = self.card_cursor.saturating_sub(1),
                PredictFocus::Form => self.field_cursor = self.field_cursor.saturating_sub(1),
            },
            KeyCode::Enter => match self.focus {
                PredictFocus::Cards => {
                    if self.card_cursor < catalog.len() {
                        form.select(self.card_cursor, catalog);
                    }
                }
                PredictFocus::Form => self.is_editing = true,
            },
            _ => {}
        }

        PredictAction::None
    }
}

pub fn render(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    render_cards(f, main_layout[0], app);

    if let Some(results) = &app.results {
        let height = (results.len() as u16 + 2).min(main_layout[1].height / 2);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height)])
            .split(main_layout[1]);

        render_form(f, right[0], app);
        render_results(f, right[1], app);
    } else {
        // Results pane stays hidden until a response arrives.
        render_form(f, main_layout[1], app);
    }
}

fn render_cards(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;
    let focused = app.ui_state.predict.focus == PredictFocus::Cards;

    let border_color = if focused {
        app.ui_state.get_color(&theme.highlight)
    } else {
        app.ui_state.get_color(&theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" 🚗 {} ", tr("cards_title", lang)));

    let items: Vec<ListItem<'_>> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(i, car)| {
            let is_selected = app.form.selected_card == Some(i);
            let is_cursor = focused && app.ui_state.predict.card_cursor == i;

            let marker = if is_selected { "▌" } else { " " };
            let name_style = if is_selected {
                Style::default()
                    .fg(app.ui_state.get_color(&theme.highlight))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(app.ui_state.get_color(&theme.text))
                    .add_modifier(Modifier::BOLD)
            };

            let row_style = if is_cursor {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        marker,
                        Style::default().fg(app.ui_state.get_color(&theme.highlight)),
                    ),
                    Span::styled(car.name.clone(), name_style),
                ]),
                Line::from(Span::styled(
                    format!("  {} {}", car.brand, car.model),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .style(row_style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_form(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;
    let focused = app.ui_state.predict.focus == PredictFocus::Form;

    let border_color = if focused {
        app.ui_state.get_color(&theme.highlight)
    } else {
        app.ui_state.get_color(&theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" 📋 {} ", tr("form_title", lang)))
        .padding(Padding::new(1, 1, 0, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints = vec![Constraint::Length(1); FormField::ALL.len()];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormField::ALL.into_iter().enumerate() {
        if i < rows.len() {
            render_field_row(f, rows[i], i, field, app, focused);
        }
    }
}

fn render_field_row(
    f: &mut Frame<'_>,
    area: Rect,
    idx: usize,
    field: FormField,
    app: &AppState,
    pane_focused: bool,
) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;
    let selected = pane_focused && idx == app.ui_state.predict.field_cursor;
    let editing = selected && app.ui_state.predict.is_editing;

    let row_style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let label_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    f.render_widget(
        Paragraph::new(tr(field.label_key(), lang))
            .style(label_style.patch(row_style))
            .alignment(Alignment::Left),
        chunks[0],
    );

    let value = app.form.value(field);
    let val_text = if editing {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let val_style = if editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default()
            .fg(app.ui_state.get_color(&theme.highlight))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.ui_state.get_color(&theme.text))
    };

    f.render_widget(
        Paragraph::new(val_text)
            .style(val_style.patch(row_style))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_results(f: &mut Frame<'_>, area: Rect, app: &AppState) {
    let theme = &app.ui_state.theme;
    let lang = &app.config.language;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.ui_state.get_color(&theme.accent)))
        .title(format!(" 💶 {} ", tr("results_title", lang)))
        .padding(Padding::new(1, 1, 0, 0));

    let lines: Vec<Line<'_>> = match &app.results {
        Some(results) if !results.is_empty() => results
            .iter()
            .map(|(country, price)| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", country),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{} €", format_price(*price, lang)),
                        Style::default()
                            .fg(app.ui_state.get_color(&theme.accent))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect(),
        _ => vec![Line::from(Span::styled(
            tr("no_results", lang),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

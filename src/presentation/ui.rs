use crate::application::{Alert, App, AppMode};
use crate::domain::{Answer, Question, QuestionType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Home => render_home(f, app),
        AppMode::Completed => render_completed(f),
        AppMode::Onboarding | AppMode::Alert => render_onboarding(f, app),
    }

    if let Some(alert) = &app.alert {
        render_alert_popup(f, alert);
    }
}

fn render_onboarding(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_progress_header(f, app, chunks[0]);
    render_question(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_progress_header(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let (step, total) = app.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(step as f64 / total as f64)
        .label("");
    f.render_widget(gauge, rows[0]);

    let progress = Paragraph::new(format!("{} of {}", step, total))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(progress, rows[1]);

    let section = Paragraph::new(app.current_question().section.title().to_uppercase())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(section, rows[2]);
}

fn render_question(f: &mut Frame, app: &App, area: Rect) {
    let question = app.current_question();
    match question.kind {
        QuestionType::Single | QuestionType::Multi => {
            render_choice_question(f, app, question, area)
        }
        QuestionType::Text => render_text_question(f, app, question, area),
        // No dedicated view; the gate still treats scale like single-choice.
        QuestionType::Scale => {}
    }
}

fn prompt_line(question: &Question) -> Line<'_> {
    let mut spans = vec![Span::styled(
        question.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if question.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn render_choice_question(f: &mut Frame, app: &App, question: &Question, area: Rect) {
    let mut lines = vec![prompt_line(question), Line::from("")];

    if question.kind == QuestionType::Multi {
        if let Some(limit) = question.max_selections {
            let picked = app
                .current_answer()
                .and_then(Answer::as_selections)
                .map(<[String]>::len)
                .unwrap_or(0);
            lines.push(Line::from(Span::styled(
                format!("Select up to {} options ({}/{})", limit, picked, limit),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
    }

    for (index, option) in question.options.iter().enumerate() {
        let selected = match app.current_answer() {
            Some(Answer::Text(value)) => value == option,
            Some(Answer::Selections(values)) => values.iter().any(|v| v == option),
            _ => false,
        };
        let marker = match (question.kind, selected) {
            (QuestionType::Multi, true) => "[x]",
            (QuestionType::Multi, false) => "[ ]",
            (_, true) => "(*)",
            (_, false) => "( )",
        };

        let mut style = Style::default();
        if selected {
            style = style.fg(Color::Cyan);
        }
        if index == app.selected_option {
            style = Style::default().bg(Color::Blue).fg(Color::White);
        }
        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, option),
            style,
        )));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Onboarding"));
    f.render_widget(body, area);
}

fn render_text_question(f: &mut Frame, app: &App, question: &Question, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let prompt = Paragraph::new(prompt_line(question)).wrap(Wrap { trim: false });
    f.render_widget(prompt, chunks[0]);

    let input_line = if app.input.is_empty() {
        let placeholder = question
            .placeholder
            .as_deref()
            .unwrap_or("Type your answer here...");
        Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        cursor_line(&app.input, app.cursor_position)
    };
    let input = Paragraph::new(input_line)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Your answer"));
    f.render_widget(input, chunks[1]);

    let count = Paragraph::new(format!("{} characters", app.input.chars().count()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(count, chunks[2]);
}

/// Splits the input at the cursor and renders the character under it
/// reversed, so the cursor stays visible inside the bordered field.
fn cursor_line(input: &str, cursor: usize) -> Line<'_> {
    let (before, rest) = input.split_at(cursor);
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) => Line::from(vec![
            Span::raw(before),
            Span::styled(
                c.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(chars.as_str()),
        ]),
        None => Line::from(vec![
            Span::raw(before),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]),
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(status) = &app.status_message {
        status.clone()
    } else {
        let next_label = if app.is_last_question() {
            "complete"
        } else {
            "next"
        };
        match app.current_question().kind {
            QuestionType::Text => format!(
                "type your answer | Enter/Tab: {} | Shift+Tab: back | Esc: quit",
                next_label
            ),
            _ => format!(
                "↑↓: choose | Space: select | Tab: {} | Shift+Tab: back | Esc: quit",
                next_label
            ),
        }
    };

    let bar = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Alert => Style::default().fg(Color::Yellow),
            _ => Style::default(),
        });
    f.render_widget(bar, area);
}

fn render_completed(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(f.area());

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to Hint!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your personalized romantic journey begins now."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start exploring",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(body, chunks[1]);
}

fn render_home(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Hint",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your daily romantic mission generator",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let welcome =
        Paragraph::new("Your preferences have been saved. Ready for romantic adventures!")
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Welcome Back!"));
    f.render_widget(welcome, chunks[1]);

    let mission = Paragraph::new(
        "Send your partner a sweet message telling them what you appreciate about them.",
    )
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Today's Mission"),
    );
    f.render_widget(mission, chunks[2]);

    let actions = Paragraph::new(vec![
        Line::from("[u] Update preferences"),
        Line::from(Span::styled(
            "    Mission history (coming soon)",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    New mission (coming soon)",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick Actions"),
    );
    f.render_widget(actions, chunks[3]);

    let status = app
        .status_message
        .clone()
        .unwrap_or_else(|| "u: update preferences | q: quit".to_string());
    let bar = Paragraph::new(status).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(bar, chunks[5]);
}

fn render_alert_popup(f: &mut Frame, alert: &Alert) {
    let area = f.area();
    let width = area.width.min(48);
    let height = area.height.min(7);
    let popup_area = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "(press Enter)",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(alert.title.as_str())
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(popup, popup_area);
}

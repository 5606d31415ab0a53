//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::session::{Feedback, SessionStatus};
use crate::tui::app::App;
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render<F: Feedback>(frame: &mut Frame<'_>, app: &App<F>) {
    // Create layout: header, breathing panel, controls, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Breathing panel
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_breathing(frame, app, chunks[1]);
    render_controls(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Color for a phase name or notice.
fn instruction_color(instruction: &str) -> Color {
    match instruction {
        "Inhale" => Color::Cyan,
        "Hold" => Color::Yellow,
        "Exhale" => Color::Green,
        "Wait" => Color::Magenta,
        _ => Color::White,
    }
}

/// Render the header.
fn render_header<F: Feedback>(frame: &mut Frame<'_>, app: &App<F>, area: Rect) {
    let state = app.controller.state();
    let title = format!(" Box Breathing ({}) ", state.status);

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render instruction, countdown, phase progress, and elapsed time.
fn render_breathing<F: Feedback>(frame: &mut Frame<'_>, app: &App<F>, area: Rect) {
    let display = app.display();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instruction
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Phase progress
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Elapsed
            Constraint::Min(0),
        ])
        .split(inner);

    let instruction = Paragraph::new(Line::from(Span::styled(
        display.instruction.as_str(),
        Style::default()
            .fg(instruction_color(&display.instruction))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(instruction, rows[0]);

    let countdown = display
        .countdown
        .map(|value| value.to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(countdown)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[1],
    );

    let state = app.controller.state();
    if state.status == SessionStatus::Running || state.status == SessionStatus::Paused {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(instruction_color(state.phase().display_name())))
            .ratio(state.phase_progress())
            .label("");
        frame.render_widget(gauge, rows[3]);
    }

    let elapsed = Paragraph::new(Line::from(vec![
        Span::styled("Elapsed ", Style::default().fg(Color::DarkGray)),
        Span::raw(display.elapsed.as_str()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(elapsed, rows[5]);
}

/// Render the run control, time-limit field, and sound state.
fn render_controls<F: Feedback>(frame: &mut Frame<'_>, app: &App<F>, area: Rect) {
    let display = app.display();
    let mut spans = vec![Span::styled(
        format!("[space] {}", display.run_label),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];

    if display.controls_visible {
        let field = if app.editing_limit {
            Span::styled(
                format!("{}_", app.limit_input),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        } else {
            Span::styled(app.limit_label(), Style::default().fg(Color::Yellow))
        };
        spans.push(Span::raw("   [l] Time limit (min): "));
        spans.push(field);
    }

    let sound = if app.controller.sound_enabled() { "on" } else { "off" };
    spans.push(Span::styled(
        format!("   [m] Sound: {sound}"),
        Style::default().fg(Color::DarkGray),
    ));

    let controls = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(controls, area);
}

/// Render the status bar.
fn render_status_bar<F: Feedback>(frame: &mut Frame<'_>, app: &App<F>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

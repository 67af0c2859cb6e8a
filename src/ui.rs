use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::form::{Field, TaskForm};
use crate::task::{Priority, Status};
use crate::task_board::TaskBoard;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, board: &mut TaskBoard) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, board))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if board.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn draw(f: &mut Frame, board: &TaskBoard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(Span::styled(
        "TODO LIST",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    draw_table(f, board, chunks[1]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "n: new task  e: edit  d: delete  r: refresh  ↑/↓: select  q: quit",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[2]);

    if let Some(form) = &board.form {
        draw_form(f, form);
    }
    if board.confirm_delete.is_some() {
        draw_confirm(f);
    }
}

fn draw_table(f: &mut Frame, board: &TaskBoard, area: Rect) {
    let rows: Vec<Row> = board
        .store
        .tasks()
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.assigned_to.label()),
                Cell::from(Span::styled(t.status.label(), status_style(t.status))),
                Cell::from(t.due_date.as_str()),
                Cell::from(Span::styled(t.priority.label(), priority_style(t.priority))),
                Cell::from(t.comments.as_str()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(13),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(["Assigned To", "Status", "Due Date", "Priority", "Comments"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title("tasks"))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(board.selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_form(f: &mut Frame, form: &TaskForm) {
    let popup = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    for field in Field::ORDER {
        let focused = form.focus == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let (value, placeholder) = match field {
            Field::AssignedTo => (
                form.assigned_to.map(|a| a.label().to_string()),
                "Select user",
            ),
            Field::Status => (form.status.map(|s| s.label().to_string()), "Select status"),
            Field::DueDate => (
                (!form.due_date.is_empty()).then(|| form.due_date.clone()),
                "Select date (YYYY-MM-DD)",
            ),
            Field::Priority => (
                form.priority.map(|p| p.label().to_string()),
                "Select priority",
            ),
            Field::Description => ((!form.description.is_empty()).then(|| form.description.clone()), ""),
            Field::Comments => ((!form.comments.is_empty()).then(|| form.comments.clone()), ""),
        };

        let value_span = match value {
            Some(v) => Span::raw(v),
            None => Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", field.label()), label_style),
            value_span,
        ];
        if focused && !field.is_select() {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));

        if let Some(msg) = form.errors.for_field(field) {
            lines.push(Line::from(Span::styled(
                format!("    {msg}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "Enter: save  Esc: cancel  Tab: next field  ←/→: choose option",
        Style::default().fg(Color::Gray),
    )));

    let body = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(form.title()))
        .wrap(Wrap { trim: false });
    f.render_widget(body, popup);
}

fn draw_confirm(f: &mut Frame) {
    let popup = centered_rect(50, 20, f.area());
    f.render_widget(Clear, popup);

    let body = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::from("Are you sure you want to delete this task?"),
        Line::from(Span::styled(
            "(y)es / (n)o",
            Style::default().fg(Color::Gray),
        )),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Delete Task"))
    .wrap(Wrap { trim: false });
    f.render_widget(body, popup);
}

fn status_style(status: Status) -> Style {
    match status {
        Status::NotStarted => Style::default().fg(Color::Gray),
        Status::InProgress => Style::default().fg(Color::Yellow),
        Status::Completed => Style::default().fg(Color::Green),
    }
}

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Low => Style::default().fg(Color::Blue),
        Priority::Normal => Style::default(),
        Priority::High => Style::default().fg(Color::Red),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

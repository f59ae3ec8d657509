use crate::application::{App, AppMode};
use crate::domain::{Priority, Task, TaskStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.mode {
        AppMode::SignIn | AppMode::SignUp => render_auth(f, app, chunks[1]),
        AppMode::Projects | AppMode::NewProject => render_projects(f, app, chunks[1]),
        AppMode::Board | AppMode::NewTask => render_board(f, app, chunks[1]),
    }

    render_status_bar(f, app, chunks[2]);

    match app.mode {
        AppMode::NewProject => render_project_modal(f, app),
        AppMode::NewTask => render_task_modal(f, app),
        _ => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let text = match (app.session.identity(), app.workspace.selected_project()) {
        (Some(identity), Some(project))
            if matches!(app.mode, AppMode::Board | AppMode::NewTask) =>
        {
            format!("StoryFlow | {} | {}", identity.email, project.name)
        }
        (Some(identity), _) => format!("StoryFlow | {}", identity.email),
        (None, _) => "StoryFlow - collaborative project tracking".to_string(),
    };
    let header = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn field_style(app: &App, index: usize) -> Style {
    if app.focus == index {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn field_marker(app: &App, index: usize) -> &'static str {
    if app.focus == index { "> " } else { "  " }
}

fn masked(value: &str, visible: bool) -> String {
    if visible {
        value.to_string()
    } else {
        "*".repeat(value.chars().count())
    }
}

fn render_auth(f: &mut Frame, app: &App, area: Rect) {
    let (title, subtitle) = match app.mode {
        AppMode::SignUp => ("Create Account", "Join our collaborative platform"),
        _ => ("Welcome Back", "Sign in to your account"),
    };

    let mut lines = vec![
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];

    match app.mode {
        AppMode::SignUp => {
            let form = &app.sign_up_form;
            lines.push(Line::from(Span::styled(
                format!("{}Full Name         {}", field_marker(app, 0), form.name),
                field_style(app, 0),
            )));
            lines.push(Line::from(Span::styled(
                format!("{}Email             {}", field_marker(app, 1), form.email),
                field_style(app, 1),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "{}Password          {}",
                    field_marker(app, 2),
                    masked(&form.password, form.show_password)
                ),
                field_style(app, 2),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "{}Confirm Password  {}",
                    field_marker(app, 3),
                    masked(&form.confirm_password, false)
                ),
                field_style(app, 3),
            )));
        }
        _ => {
            let form = &app.sign_in_form;
            lines.push(Line::from(Span::styled(
                format!("{}Email     {}", field_marker(app, 0), form.email),
                field_style(app, 0),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "{}Password  {}",
                    field_marker(app, 1),
                    masked(&form.password, form.show_password)
                ),
                field_style(app, 1),
            )));
        }
    }

    lines.push(Line::from(""));
    if let Some(ref error) = app.form_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    let hint = match app.mode {
        AppMode::SignUp => "Already have an account? Press Esc to sign in",
        _ => "Don't have an account? Press Ctrl+N to sign up",
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let card_height = lines.len() as u16 + 2;
    let card = centered_rect(56, card_height, area);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(match app.mode {
                AppMode::SignUp => "Sign Up",
                _ => "Sign In",
            }),
    );
    f.render_widget(widget, card);
}

fn render_projects(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Yellow)),
        Cell::from("Code").style(Style::default().fg(Color::Yellow)),
        Cell::from("Members").style(Style::default().fg(Color::Yellow)),
        Cell::from("Tasks").style(Style::default().fg(Color::Yellow)),
        Cell::from("Created").style(Style::default().fg(Color::Yellow)),
        Cell::from("Description").style(Style::default().fg(Color::Yellow)),
    ])
    .height(1);

    let mut rows = vec![header];
    for (index, project) in app.workspace.projects().iter().enumerate() {
        let style = if index == app.project_cursor {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.share_code.clone()),
                Cell::from(format!("{}", project.members)),
                Cell::from(format!("{}", project.tasks)),
                Cell::from(project.created_at.clone()),
                Cell::from(project.description.clone()),
            ])
            .style(style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Length(26),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Min(0),
    ];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Projects"))
        .column_spacing(2);

    f.render_widget(table, area);
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Gray,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let board = app.workspace.board();
    for (index, status) in TaskStatus::ALL.iter().enumerate() {
        let tasks = board.column(*status);
        let selected_column = *status == app.board_column;
        render_board_column(f, app, columns[index], *status, tasks, selected_column);
    }
}

fn render_board_column(
    f: &mut Frame,
    app: &App,
    area: Rect,
    status: TaskStatus,
    tasks: &[&Task],
    selected_column: bool,
) {
    let border_style = if selected_column {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = format!("{} ({})", status.label(), tasks.len());

    let mut lines: Vec<Line> = Vec::new();
    for (row, task) in tasks.iter().enumerate() {
        let selected = selected_column && row == app.board_row;
        let base = if selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(task.title.clone(), base.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" [{}]", task.priority.label()),
                if selected { base } else { base.fg(priority_color(task.priority)) },
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} - due {}", task.assignee, task.due_date),
            if selected { base } else { base.fg(Color::DarkGray) },
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, Style::default().fg(status_color(status)))),
    );
    f.render_widget(widget, area);
}

fn render_project_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 8, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{}Project Name  {}", field_marker(app, 0), app.project_form.name),
            field_style(app, 0),
        )),
        Line::from(Span::styled(
            format!("{}Description   {}", field_marker(app, 1), app.project_form.description),
            field_style(app, 1),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: create | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Create New Project"),
    );
    f.render_widget(widget, area);
}

fn render_task_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(54, 11, f.area());
    f.render_widget(Clear, area);

    let form = &app.task_form;
    let lines = vec![
        Line::from(Span::styled(
            format!("{}Task Title   {}", field_marker(app, 0), form.title),
            field_style(app, 0),
        )),
        Line::from(Span::styled(
            format!("{}Description  {}", field_marker(app, 1), form.description),
            field_style(app, 1),
        )),
        Line::from(Span::styled(
            format!("{}Assignee     {}", field_marker(app, 2), form.assignee),
            field_style(app, 2),
        )),
        Line::from(Span::styled(
            format!("{}Priority     < {} >", field_marker(app, 3), form.priority.label()),
            field_style(app, 3),
        )),
        Line::from(Span::styled(
            format!("{}Due Date     {}", field_marker(app, 4), form.due_date),
            field_style(app, 4),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: create | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Create New Task"),
    );
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::SignIn => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab: next field | Enter: sign in | Ctrl+P: show/hide password | Ctrl+N: sign up | Esc: quit".to_string()
            }
        }
        AppMode::SignUp => {
            "Tab: next field | Enter: create account | Ctrl+P: show/hide password | Esc: back to sign in".to_string()
        }
        AppMode::Projects => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Up/Down/jk: select | Enter: open board | n: new project | c: copy share code | x: sign out | q: quit".to_string()
            }
        }
        AppMode::Board => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Left/Right/hl: column | Up/Down/jk: task | Enter: advance | d: delete | n: new task | Esc: projects | q: quit".to_string()
            }
        }
        AppMode::NewProject => "Tab: next field | Enter: create project | Esc: cancel".to_string(),
        AppMode::NewTask => {
            "Tab: next field | Left/Right: priority | Enter: create task | Esc: cancel".to_string()
        }
    };

    let style = match app.mode {
        AppMode::SignIn | AppMode::SignUp => Style::default().fg(Color::Green),
        AppMode::Projects | AppMode::Board => Style::default(),
        AppMode::NewProject | AppMode::NewTask => Style::default().fg(Color::Yellow),
    };
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(widget, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

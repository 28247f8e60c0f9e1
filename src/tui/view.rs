use crate::stats::Stats;
use crate::store::CLEAR_PROMPT;
use crate::tui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    draw_at(f, state, Instant::now());
}

pub fn draw_at(f: &mut Frame, state: &mut AppState, now: Instant) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    // --- Logo ---
    let logo = Paragraph::new("🏝️ Far Away 🧳")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(logo, v_chunks[0]);

    draw_form(f, state, v_chunks[1], now);

    // --- Packing List ---
    let items: Vec<ListItem> = state
        .view_ids
        .iter()
        .filter_map(|id| state.store.get(*id))
        .map(|item| {
            let checkbox = if item.packed { "[x]" } else { "[ ]" };
            let text_style = if item.packed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", checkbox)),
                Span::styled(format!("{} {}", item.quantity, item.description), text_style),
            ]))
        })
        .collect();

    let list_style = if state.mode == InputMode::Normal {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = format!(" Packing List ({}) · {} ", state.view_ids.len(), state.sort_by.label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(list_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(list, v_chunks[2], &mut state.list_state);

    // --- Stats ---
    let stats = state.store.stats();
    let stats_color = match stats {
        Stats::Empty => Color::Gray,
        Stats::AllPacked { .. } => Color::Green,
        Stats::Progress { .. } => Color::Cyan,
    };
    let stats_widget = Paragraph::new(Span::styled(
        stats.message(),
        Style::default().fg(stats_color).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Stats "));
    f.render_widget(stats_widget, v_chunks[3]);

    // --- Footer ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[4]);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = match state.mode {
        InputMode::Adding => "Enter:Add | Up/Down:Qty | Esc:Cancel",
        InputMode::ConfirmClear => "y:Clear | n:Keep",
        InputMode::Normal => "a:Add | Space:Pack | d:Del | s:Sort | c:Clear | q:Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);

    if state.mode == InputMode::ConfirmClear {
        draw_confirm(f);
    }
}

fn draw_form(f: &mut Frame, state: &AppState, area: Rect, now: Instant) {
    let bouncing = state.form.is_bouncing(now);
    let active = state.mode == InputMode::Adding;
    let border_color = if bouncing {
        Color::Red
    } else if active {
        Color::Yellow
    } else {
        Color::Reset
    };

    let prefix = format!("({:>2}) > ", state.form.quantity);
    let mut lines = vec![Line::from(vec![
        Span::styled(prefix.clone(), Style::default().fg(Color::Magenta)),
        Span::raw(state.form.description.clone()),
    ])];
    if let Some(err) = &state.form.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let input = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What do you need for your 😍 trip? ")
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);

    if active {
        let cursor_x = cursor_column(
            area,
            &prefix,
            &state.form.description,
            state.form.cursor_position,
        );
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Terminal column of the input cursor, by display width, kept inside the
/// block's borders.
pub fn cursor_column(area: Rect, prefix: &str, description: &str, cursor: usize) -> u16 {
    let typed: usize = description
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let offset = u16::try_from(prefix.width().saturating_add(typed)).unwrap_or(u16::MAX);
    let last_inner = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(offset).min(last_inner)
}

fn draw_confirm(f: &mut Frame) {
    let area = centered_rect(50, 5, f.area());
    let popup = Paragraph::new(vec![
        Line::from(CLEAR_PROMPT),
        Line::from(""),
        Line::from(Span::styled(
            "y: Yes    n: No",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Clear List ")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = r.width * percent_x / 100;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width.saturating_sub(width)) / 2,
        y: r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, RoundPhase};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_lines: u16 = 2;
    let status_height: u16 = status_lines + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // hand
            Constraint::Min(12),               // payouts + last round
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let limits = app.config().limits;
    let header_lines = vec![
        Line::from(format!(
            "Balance: ${}   Table: {}   Rounds: {}",
            app.balance(),
            app.config().table.label(),
            app.rounds_played()
        )),
        Line::from(format!(
            "Bet: {} [{}-{}]   Risk: {} [{}-{}]",
            app.bet(),
            limits.min_bet(),
            limits.max_bet(),
            app.risk(),
            limits.min_risk(),
            limits.max_risk()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("pokerbet").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Hand (5 slots)
    let last = app.last_round();
    let hand_title = match (app.phase(), last) {
        (RoundPhase::Submitted, _) => "Hand (dealing...)".to_string(),
        (_, Some(rec)) => format!("Hand #{}: {}", rec.round, rec.outcome.result),
        (_, None) => "Hand".to_string(),
    };
    let hand_block = Block::default().title(hand_title).borders(Borders::ALL);
    let hand_area = chunks[1];
    let hand_inner = inner(hand_area);
    let card_width = hand_inner.width.saturating_sub(2) / 5;
    let hand_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(hand_inner);
    f.render_widget(hand_block, hand_area);
    let shown = last.filter(|_| app.phase() != RoundPhase::Submitted);
    for (i, slot) in hand_chunks.iter().enumerate() {
        let card = shown.map(|rec| rec.outcome.hand.cards()[i]);
        let border = shown.map(|rec| {
            if rec.outcome.winnings.is_negative() {
                Color::DarkGray
            } else {
                Color::Yellow
            }
        });
        render_card_widget(f, *slot, card, border);
    }

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    draw_payouts(f, middle[0], app);
    draw_last_round(f, middle[1], app);

    // Status bar: split horizontally for info vs keys, render two lines of content
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = match app.phase() {
        RoundPhase::Idle => vec![Line::from("Press Space to deal a hand at the current bet.")],
        RoundPhase::Submitted => vec![Line::from("Bet submitted, dealing...")],
        RoundPhase::Resolved => vec![Line::from("Round settled. Space deals again.")],
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else {
        left_info.push(Line::from(Span::styled(
            "A amount • < > risk",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn draw_payouts(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Payouts").borders(Borders::ALL);
    let hit = app
        .last_round()
        .filter(|_| app.phase() == RoundPhase::Resolved)
        .map(|rec| rec.outcome.result);
    let table = app.config().payout_table();
    let lines: Vec<Line> = table
        .iter()
        .rev()
        .map(|(category, multiplier)| {
            let text = format!("{:<16} x{multiplier}", category.name());
            if Some(category) == hit {
                Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_last_round(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Last Round").borders(Borders::ALL);
    let lines = match app.last_round() {
        None => vec![Line::from(Span::styled(
            "No rounds yet.",
            Style::default().add_modifier(Modifier::DIM),
        ))],
        Some(rec) => {
            let (label, color) = if rec.outcome.winnings.is_negative() {
                ("Lost", Color::Red)
            } else {
                ("Won", Color::Green)
            };
            vec![
                Line::from(format!("Result: {}", rec.outcome.result)),
                Line::from(format!("Bet {} at risk {}", rec.bet, rec.risk)),
                Line::from(format!("Multiplier: x{}", rec.outcome.multiplier)),
                Line::from(Span::styled(
                    format!("{label}: {}", rec.outcome.winnings),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Balance after: ${}", rec.balance_after)),
            ]
        }
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for rec in entries {
            let hand: Vec<String> =
                rec.outcome.hand.cards().iter().map(|c| short_card(*c)).collect();
            lines.push(Line::from(format!(
                "#{} {} {} bet {} risk {} -> {} (${})",
                rec.round,
                hand.join(" "),
                rec.outcome.result,
                rec.bet,
                rec.risk,
                rec.outcome.winnings,
                rec.balance_after
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: submit bet and deal"),
        Line::from("- A: amount entry"),
        Line::from("- < / >: risk down / up by 0.1"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Amount Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 0-9 and .: edit amount"),
        Line::from("- Backspace: delete character"),
        Line::from("- + / -: adjust by minimum bet"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let limits = app.config().limits;
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Current: {current}")),
        Line::from(format!("Min: {}  Max: {}", limits.min_bet(), limits.max_bet())),
        Line::from("Digits and . to edit, Backspace to delete"),
        Line::from("+/- by min bet, Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Bet Amount").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (sg, style) = suit_glyph_and_style(c.suit());
        Line::from(Span::styled(format!("{}{}", c.rank().label(), sg), style))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

fn short_card(c: Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", c.rank().label(), sg)
}

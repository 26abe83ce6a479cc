//! Terminal rendering of a Flappy Bird snapshot.

use crate::game::snapshot::Snapshot;
use crate::game::types::{LossCause, Outcome, Rect as WorldRect};
use crate::ui::game_common::{
    render_game_over_popup, render_info_panel_frame, render_status_bar, GameResultType,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SKY: Color = Color::Rgb(0x87, 0xCE, 0xEB);
const CLOUD: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const SUN: Color = Color::Rgb(0xFF, 0xD7, 0x00);
const PIPE: Color = Color::Rgb(0x22, 0x8B, 0x22);
const BIRD: Color = Color::Yellow;
const BEAK: Color = Color::Rgb(0xFF, 0xA5, 0x00);

/// Background ellipse in world coordinates (bounding box).
struct Ellipse {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Ellipse {
    const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let rx = (self.x2 - self.x1) / 2.0;
        let ry = (self.y2 - self.y1) / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (x - (self.x1 + rx)) / rx;
        let dy = (y - (self.y1 + ry)) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Sun centered at (50, 50) with radius 30.
const SUN_DISC: Ellipse = Ellipse::new(20.0, 20.0, 80.0, 80.0);

/// Each cloud is three overlapping ellipses: a top puff and two side puffs.
fn cloud(x: f64, y: f64, w: f64, h: f64) -> [Ellipse; 3] {
    [
        Ellipse::new(x, y, x + w, y + h),
        Ellipse::new(x - w / 2.0, y + h / 4.0, x + w / 2.0, y + h * 3.0 / 4.0),
        Ellipse::new(x + w / 2.0, y + h / 4.0, x + w * 3.0 / 2.0, y + h * 3.0 / 4.0),
    ]
}

/// (x, y, width, height) of each cloud's top puff.
const CLOUDS: [(f64, f64, f64, f64); 3] = [
    (100.0, 100.0, 60.0, 30.0),
    (250.0, 150.0, 80.0, 40.0),
    (300.0, 70.0, 50.0, 25.0),
];

fn contains(rect: &WorldRect, x: f64, y: f64) -> bool {
    x >= rect.x1 && x < rect.x2 && y >= rect.y1 && y < rect.y2
}

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Cloud,
    Sun,
    Pipe,
    Bird,
    Beak,
}

impl Cell {
    fn span(self, bird_glyph: &'static str) -> Span<'static> {
        match self {
            Self::Sky => Span::styled(" ", Style::default().bg(SKY)),
            Self::Cloud => Span::styled(" ", Style::default().bg(CLOUD)),
            Self::Sun => Span::styled(" ", Style::default().bg(SUN)),
            Self::Pipe => Span::styled("█", Style::default().fg(PIPE).bg(SKY)),
            Self::Bird => Span::styled(
                bird_glyph,
                Style::default()
                    .fg(Color::Black)
                    .bg(BIRD)
                    .add_modifier(Modifier::BOLD),
            ),
            Self::Beak => Span::styled("▶", Style::default().fg(BEAK).bg(SKY)),
        }
    }
}

/// Classify the world point at the center of a cell, foreground first.
fn classify(snapshot: &Snapshot, x: f64, y: f64, beak: &WorldRect) -> Cell {
    if contains(&snapshot.bird, x, y) {
        return Cell::Bird;
    }
    if contains(beak, x, y) {
        return Cell::Beak;
    }
    if snapshot
        .obstacles
        .iter()
        .any(|o| contains(&o.top, x, y) || contains(&o.bottom, x, y))
    {
        return Cell::Pipe;
    }
    if SUN_DISC.contains(x, y) {
        return Cell::Sun;
    }
    if CLOUDS
        .iter()
        .any(|&(cx, cy, w, h)| cloud(cx, cy, w, h).iter().any(|e| e.contains(x, y)))
    {
        return Cell::Cloud;
    }
    Cell::Sky
}

fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -10.0 {
        "▲"
    } else if velocity > 10.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &Snapshot, seed: Option<u64>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Play area (top) | status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], snapshot);
    render_status_bar_content(frame, v_chunks[1], snapshot);
    render_info_panel(frame, h_chunks[1], snapshot, seed);

    if snapshot.is_terminal() {
        render_flappy_game_over(frame, v_chunks[0], snapshot);
    }
}

/// Sample the world once per cell and paint it.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snapshot.screen_width / width as f64;
    let y_scale = snapshot.screen_height / height as f64;

    // Beak: a small triangle off the bird's right edge, approximated by its box
    let bird = snapshot.bird;
    let mid_y = (bird.y1 + bird.y2) / 2.0;
    let beak = WorldRect::new(bird.x2, mid_y - 5.0, bird.x2 + 10.0, mid_y + 5.0);
    let glyph = bird_glyph(snapshot.bird_velocity);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let x = (col as f64 + 0.5) * x_scale;
                classify(snapshot, x, y, &beak).span(glyph)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if snapshot.is_terminal() {
        render_status_bar(
            frame,
            area,
            "Run over",
            Color::DarkGray,
            &[("[R]", "Restart"), ("[Q/Esc]", "Exit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {} / {}", snapshot.score, snapshot.win_score),
            Color::Green,
            &[("[Space/Up]", "Jump"), ("[R]", "Restart"), ("[Q/Esc]", "Exit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, seed: Option<u64>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Target: ", label),
            Span::styled(
                snapshot.win_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                snapshot.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
    ];

    let bar_width = (inner.width as usize).saturating_sub(2);
    let filled = (snapshot.progress() * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);
    lines.push(Line::from(Span::styled(" Progress:", label)));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]));

    if let Some(seed) = seed {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Seed: ", label),
            Span::styled(seed.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_flappy_game_over(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let (result_type, title, message) = match snapshot.outcome {
        Outcome::Won => (
            GameResultType::Win,
            "Congratulations you win the game :)",
            format!("Final Score: {}", snapshot.score),
        ),
        Outcome::Lost(LossCause::Collision) => (
            GameResultType::Loss,
            "CRASH!",
            format!("Final Score: {}", snapshot.score),
        ),
        Outcome::Lost(LossCause::OutOfBounds) => (
            GameResultType::Loss,
            "OUT OF THE SKY!",
            format!("Final Score: {}", snapshot.score),
        ),
        Outcome::Ongoing => return,
    };

    render_game_over_popup(frame, area, result_type, title, &message);
}

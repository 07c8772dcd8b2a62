//! Terminal visualization for spiral plots
//!
//! Draws a plot table as a polar scatter:
//! - One colour per scale, listed in a legend
//! - Note names around the outside, one per semitone
//! - The reference tone at 12 o'clock, rising pitch clockwise

mod spiral_chart;

pub use spiral_chart::{bounds, palette_color, project, SpiralChart, PALETTE};

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::spiral::{PlotTable, Renderer};

/// Renders plot tables in the terminal until the user quits
pub struct TerminalRenderer {
    title: String,
    poll_interval: Duration,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new("Semitone")
    }
}

impl Renderer for TerminalRenderer {
    type Output = ();

    fn render(&mut self, table: &PlotTable) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, table);

        // Cleanup, even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

        result
    }
}

impl TerminalRenderer {
    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        table: &PlotTable,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| draw_ui(f, table, &self.title))?;

            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    match (key.code, key.modifiers) {
                        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => break,
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}

fn draw_ui(f: &mut Frame, table: &PlotTable, title: &str) {
    let area = f.area();

    // Layout: spiral on top, legend at bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),      // Spiral
            Constraint::Length(3),   // Legend
        ])
        .split(area);

    draw_spiral(f, chunks[0], table, title);
    draw_legend(f, chunks[1], table);
}

fn draw_spiral(f: &mut Frame, area: Rect, table: &PlotTable, title: &str) {
    let chart = SpiralChart::new(table)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));

    f.render_widget(chart, area);
}

fn draw_legend(f: &mut Frame, area: Rect, table: &PlotTable) {
    let paragraph = Paragraph::new(legend_line(table))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

/// One coloured marker per scale label, then the key help
pub fn legend_line(table: &PlotTable) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, label) in table.labels().into_iter().enumerate() {
        spans.push(Span::styled("● ", Style::default().fg(palette_color(i))));
        spans.push(Span::raw(format!("{}   ", label)));
    }
    spans.push(Span::styled("|  q: quit", Style::default().fg(Color::DarkGray)));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::Scale;
    use crate::spiral::SpiralPlot;

    #[test]
    fn test_legend_lists_scales_in_order() {
        let table = SpiralPlot::new(vec![
            Scale::major("A").unwrap(),
            Scale::minor("A").unwrap(),
        ])
        .unwrap()
        .table()
        .unwrap();

        let line = legend_line(&table);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        let major = text.find("A ma").unwrap();
        let minor = text.find("A mi").unwrap();
        assert!(major < minor);
        assert!(text.contains("q: quit"));

        assert_eq!(line.spans[1].style.fg, Some(palette_color(0)));
        assert_eq!(line.spans[3].style.fg, Some(palette_color(1)));
    }

    #[test]
    fn test_default_renderer_title() {
        let renderer = TerminalRenderer::default();
        assert_eq!(renderer.title, "Semitone");
        assert_eq!(renderer.poll_interval, Duration::from_millis(50));
    }
}

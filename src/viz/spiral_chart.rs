//! Spiral chart widget for ratatui

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Widget,
    },
};

use crate::spiral::PlotTable;

/// Colours assigned to scales in plot order
pub const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

/// Colour for the scale at `index`, cycling through the palette
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Polar plot coordinates to canvas coordinates
///
/// 0 degrees points north and angles grow clockwise.
pub fn project(radius: f64, angle_degrees: f64) -> (f64, f64) {
    let theta = angle_degrees.to_radians();
    (radius * theta.sin(), radius * theta.cos())
}

/// Canvas bounds that keep a circle of `radius` round in `area`
///
/// Braille dots are roughly square, two across and four down per cell.
pub fn bounds(area: Rect, radius: f64) -> ([f64; 2], [f64; 2]) {
    let dots_x = (area.width.max(1) as f64) * 2.0;
    let dots_y = (area.height.max(1) as f64) * 4.0;
    if dots_x >= dots_y {
        let half_x = radius * dots_x / dots_y;
        ([-half_x, half_x], [-radius, radius])
    } else {
        let half_y = radius * dots_y / dots_x;
        ([-radius, radius], [-half_y, half_y])
    }
}

/// A widget that draws every row of a plot table on a polar grid
pub struct SpiralChart<'a> {
    table: &'a PlotTable,
    style: Style,
    block: Option<Block<'a>>,
}

impl<'a> SpiralChart<'a> {
    pub fn new(table: &'a PlotTable) -> Self {
        Self {
            table,
            style: Style::default().fg(Color::DarkGray),
            block: None,
        }
    }

    /// Style of the grid and tick labels
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Radius of the tick ring, just outside the outermost point
    fn tick_radius(&self) -> f64 {
        let max = self.table.max_radius();
        if max > 0.0 { max * 1.15 } else { 1.0 }
    }
}

impl Widget for SpiralChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let tick_radius = self.tick_radius();
        let (x_bounds, y_bounds) = bounds(inner_area, tick_radius * 1.1);
        let grid_color = self.style.fg.unwrap_or(Color::DarkGray);

        let series: Vec<(Color, Vec<(f64, f64)>)> = self
            .table
            .labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let coords = self
                    .table
                    .rows_for(label)
                    .map(|row| project(row.radius, row.angle))
                    .collect();
                (palette_color(i), coords)
            })
            .collect();

        let ticks: Vec<((f64, f64), String)> = self
            .table
            .tick_angles
            .iter()
            .zip(&self.table.tick_labels)
            .map(|(angle, label)| (project(tick_radius, *angle), label.clone()))
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: tick_radius / 1.15,
                    color: grid_color,
                });
                ctx.layer();
                for (color, coords) in &series {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
                for ((x, y), label) in &ticks {
                    ctx.print(*x, *y, Line::from(Span::styled(label.clone(), self.style)));
                }
            })
            .render(inner_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::Scale;
    use crate::spiral::SpiralPlot;

    fn major_table() -> PlotTable {
        SpiralPlot::new(vec![Scale::major("C").unwrap()])
            .unwrap()
            .table()
            .unwrap()
    }

    #[test]
    fn test_project_compass_points() {
        let (x, y) = project(1.0, 0.0);
        assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);

        let (x, y) = project(2.0, 90.0);
        assert!((x - 2.0).abs() < 1e-12 && y.abs() < 1e-12);

        let (x, y) = project(1.0, -90.0);
        assert!((x + 1.0).abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), Color::Cyan);
        assert_eq!(palette_color(PALETTE.len()), Color::Cyan);
        assert_eq!(palette_color(1), Color::Magenta);
    }

    #[test]
    fn test_bounds_keep_circle_round() {
        let (x, y) = bounds(Rect::new(0, 0, 80, 20), 1.0);
        assert_eq!(y, [-1.0, 1.0]);
        assert_eq!(x, [-2.0, 2.0]);

        let (x, y) = bounds(Rect::new(0, 0, 10, 20), 1.0);
        assert_eq!(x, [-1.0, 1.0]);
        assert_eq!(y, [-4.0, 4.0]);
    }

    #[test]
    fn test_chart_empty_area() {
        let table = major_table();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        SpiralChart::new(&table).render(area, &mut buf);
        // Should not panic
    }

    #[test]
    fn test_chart_draws_points_and_ticks() {
        let table = major_table();
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        SpiralChart::new(&table).render(area, &mut buf);

        let drawn = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() != " ")
            .count();
        assert!(drawn > 0);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Db/C#"));
    }

    #[test]
    fn test_chart_with_block() {
        let table = major_table();
        let chart = SpiralChart::new(&table).block(Block::default().title("Test"));
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        // Should render without panic
    }

    #[test]
    fn test_chart_style() {
        let table = major_table();
        let chart = SpiralChart::new(&table).style(Style::default().fg(Color::Red));
        assert_eq!(chart.style.fg, Some(Color::Red));
    }
}

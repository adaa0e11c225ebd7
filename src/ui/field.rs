//! Braille-resolution playfield: every terminal cell holds a 2×4 grid of
//! dots, so sprites get eight times the cell count to work with.

use std::collections::HashMap;

use ratatui::prelude::*;

use alien_invasion::game::bounds::Bounds;
use alien_invasion::AlienInvasion;

const ALIEN_FRAMES: [&[&str]; 2] = [
    &[
        "..#.....#..",
        "...#...#...",
        "..#######..",
        ".##.###.##.",
        "###########",
        "#.#######.#",
        "#.#.....#.#",
        "...##.##...",
    ],
    &[
        "..#.....#..",
        "#..#...#..#",
        "#.#######.#",
        "###.###.###",
        "###########",
        ".#########.",
        "..#.....#..",
        ".#.......#.",
    ],
];

const SHIP: &[&str] = &[
    "....#....",
    "...###...",
    "...###...",
    ".#######.",
    "#########",
    "#########",
];

const ALIEN_COLOR: Color = Color::Rgb(40, 150, 70);
const SHIP_COLOR: Color = Color::Rgb(30, 60, 160);

type DotMap = HashMap<(usize, usize), u8>;

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Scale from world units to braille dots.
struct DotSpace {
    bw: i32,
    bh: i32,
    sx: f32,
    sy: f32,
}

impl DotSpace {
    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.bw || by >= self.bh {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        *map.entry((bx / 2, by / 4)).or_insert(0) |= braille_bit(bx % 2, by % 4);
    }

    /// Dot-space box of a world rectangle, at least one dot each way.
    fn dot_box(&self, bounds: &Bounds) -> (i32, i32, i32, i32) {
        let x0 = (bounds.left() * self.sx).round() as i32;
        let y0 = (bounds.top() * self.sy).round() as i32;
        let x1 = ((bounds.right() * self.sx).round() as i32).max(x0 + 1);
        let y1 = ((bounds.bottom() * self.sy).round() as i32).max(y0 + 1);
        (x0, y0, x1, y1)
    }

    fn fill(&self, map: &mut DotMap, bounds: &Bounds) {
        let (x0, y0, x1, y1) = self.dot_box(bounds);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(map, bx, by);
            }
        }
    }

    /// Stretch a `#`/`.` mask over the rectangle, nearest-neighbour.
    fn sprite(&self, map: &mut DotMap, bounds: &Bounds, mask: &[&str]) {
        let (x0, y0, x1, y1) = self.dot_box(bounds);
        let (w, h) = (x1 - x0, y1 - y0);
        let mh = mask.len() as i32;
        for by in y0..y1 {
            let row = mask[((by - y0) * mh / h) as usize].as_bytes();
            let mw = row.len() as i32;
            for bx in x0..x1 {
                if row[((bx - x0) * mw / w) as usize] == b'#' {
                    self.set_dot(map, bx, by);
                }
            }
        }
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bg: Color, bold: bool) {
    for (&(cx, cy), &bits) in map {
        if cy < grid.len() && cx < grid[cy].len() && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(bg);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn darken((r, g, b): (u8, u8, u8)) -> Color {
    let d = |c: u8| (c as f32 * 0.8) as u8;
    Color::Rgb(d(r), d(g), d(b))
}

/// Render the playfield into `width` × `height` cells.
pub fn render_field(game: &AlienInvasion, stars: &[(f32, f32)], width: usize, height: usize) -> Vec<Line<'static>> {
    let settings = &game.settings;
    let bw = (width * 2) as i32;
    let bh = (height * 4) as i32;
    let space = DotSpace {
        bw,
        bh,
        sx: bw as f32 / settings.screen_width,
        sy: bh as f32 / settings.screen_height,
    };

    let bg = rgb(settings.bg_color);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); width]; height];

    // ── Stars ──────────────────────────────────────────────────────────
    let mut smap = DotMap::new();
    for &(x, y) in stars {
        space.set_dot(&mut smap, (x * space.sx) as i32, (y * space.sy) as i32);
    }
    write_layer(&mut grid, &smap, darken(settings.bg_color), bg, false);

    // ── Aliens ─────────────────────────────────────────────────────────
    let frame = ALIEN_FRAMES[((game.ticks() / 30) % 2) as usize];
    let mut amap = DotMap::new();
    for alien in &game.aliens {
        space.sprite(&mut amap, &alien.bounds, frame);
    }
    write_layer(&mut grid, &amap, ALIEN_COLOR, bg, false);

    // ── Bullets ────────────────────────────────────────────────────────
    let mut bmap = DotMap::new();
    for bullet in &game.bullets {
        space.fill(&mut bmap, &bullet.bounds);
    }
    write_layer(&mut grid, &bmap, rgb(settings.bullet_color), bg, true);

    // ── Ship ───────────────────────────────────────────────────────────
    let mut pmap = DotMap::new();
    space.sprite(&mut pmap, &game.ship.bounds, SHIP);
    write_layer(&mut grid, &pmap, SHIP_COLOR, bg, true);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alien_invasion::Settings;

    fn dots(lines: &[Line<'_>]) -> usize {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.content.chars().any(|c| ('\u{2801}'..='\u{28ff}').contains(&c)))
            .count()
    }

    #[test]
    fn field_has_requested_size() {
        let game = AlienInvasion::new(Settings::default());
        let lines = render_field(&game, &[], 80, 24);
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|l| l.spans.len() == 80));
    }

    #[test]
    fn fleet_and_ship_are_drawn() {
        let game = AlienInvasion::new(Settings::default());
        let lines = render_field(&game, &[], 120, 40);
        assert!(dots(&lines) > 45);
    }

    #[test]
    fn tiny_field_does_not_panic() {
        let game = AlienInvasion::new(Settings::default());
        let lines = render_field(&game, &[(0.0, 0.0), (1199.0, 799.0)], 1, 1);
        assert_eq!(lines.len(), 1);
    }
}

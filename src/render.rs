use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::difficulty::Difficulty;
use crate::game::{Game, Occupant, Phase};
use crate::input::STORE_KEYS;
use crate::look::{Tint, GHOST_LOOKS, PLAYER_FACE, PLAYER_TINT};
use crate::progression::{Progression, COSMETICS};
use crate::session::Session;
use crate::store::KvStore;

pub const CELL_W: usize = 2;
/// Rows above the grid: title, HUD, difficulty.
const HEADER_H: usize = 3;
/// Rows below the grid: banner, store heading, catalog, help.
const FOOTER_H: usize = 3 + COSMETICS.len();
/// Widest text line drawn around the grid.
const TEXT_W: usize = 68;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub text: &'static str,
    pub color: Color,
}

const BLANK: Cell = Cell {
    text: "  ",
    color: Color::Reset,
};

pub struct Renderer {
    last: Vec<Cell>,
    last_lines: Vec<String>,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(cells: usize) -> Self {
        Self {
            last: vec![BLANK; cells],
            last_lines: Vec::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Yellow => Color::Yellow,
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
        Tint::Pink => Color::Magenta,
        Tint::Green => Color::Green,
        Tint::Rainbow => Color::Cyan,
    }
}

pub fn cell_for<S: KvStore>(game: &Game, progression: &Progression<S>, idx: usize) -> Cell {
    let view = game.cell(idx);
    match view.occupant {
        Some(Occupant::Player) => {
            let skin = progression.equipped_cosmetic();
            Cell {
                text: skin.and_then(|c| c.emoji).unwrap_or(PLAYER_FACE),
                color: tint_color(skin.map(|c| c.tint).unwrap_or(PLAYER_TINT)),
            }
        }
        Some(Occupant::Ghost(i)) => {
            let look = GHOST_LOOKS[i % GHOST_LOOKS.len()];
            Cell {
                text: look.face,
                color: tint_color(look.tint),
            }
        }
        None if view.wall => Cell {
            text: "██",
            color: Color::DarkGrey,
        },
        None if view.pellet => Cell {
            text: "· ",
            color: Color::Green,
        },
        None => BLANK,
    }
}

pub fn hud_line<S: KvStore>(game: &Game, progression: &Progression<S>) -> String {
    let mut hud = format!(
        "Score: {} | Lives: {} | Points: {}",
        game.score(),
        game.lives(),
        progression.points()
    );
    if game.difficulty().depletes_hunger() {
        hud.push_str(&format!(" | Hunger: {}", game.hunger()));
    }
    hud
}

fn difficulty_line(current: Difficulty) -> String {
    let options: Vec<String> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if *d == current {
                format!("[{}] {}*", i + 1, d)
            } else {
                format!("[{}] {}", i + 1, d)
            }
        })
        .collect();
    format!("Difficulty: {}", options.join("  "))
}

pub fn store_lines<S: KvStore>(progression: &Progression<S>) -> Vec<String> {
    COSMETICS
        .iter()
        .zip(STORE_KEYS)
        .map(|(item, key)| {
            let action = if !progression.is_owned(item.id) {
                format!("Buy ({})", item.cost)
            } else if progression.equipped() == Some(item.id) {
                "Equipped".to_string()
            } else {
                "Equip".to_string()
            };
            format!("[{key}] {:<16}{action}", item.name)
        })
        .collect()
}

fn footer_lines<S: KvStore>(game: &Game, progression: &Progression<S>) -> Vec<String> {
    let banner = if game.phase() == Phase::Over {
        format!("Game Over! Final score: {}  (n: new game)", game.score())
    } else {
        format!("Pellets left: {}", game.pellets_left())
    };
    let mut lines = vec![banner, "Cosmetics Store".to_string()];
    lines.extend(store_lines(progression));
    lines.push("arrows/hjkl move  1-4 difficulty  z/x/c store  n new  q/Esc quit".to_string());
    lines
}

pub fn render<S: KvStore>(
    stdout: &mut impl Write,
    session: &Session<S>,
    renderer: &mut Renderer,
) -> io::Result<()> {
    let game = session.game();
    let progression = session.progression();
    let size = game.maze().size();
    let needed_w = (size * CELL_W).max(TEXT_W) as u16;
    let needed_h = (size + HEADER_H + FOOTER_H) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        stdout.queue(Clear(ClearType::All))?;
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }

    let mut lines = vec![
        "Grid Chase".to_string(),
        hud_line(game, progression),
        difficulty_line(game.difficulty()),
    ];
    lines.extend(footer_lines(game, progression));
    if renderer.needs_full || lines != renderer.last_lines {
        for (i, line) in lines.iter().enumerate() {
            let row = if i < HEADER_H { i } else { i + size };
            stdout.queue(MoveTo(origin_x, origin_y + row as u16))?;
            stdout.queue(Clear(ClearType::UntilNewLine))?;
            let color = if i == HEADER_H && game.phase() == Phase::Over {
                Color::Red
            } else {
                Color::White
            };
            stdout.queue(SetForegroundColor(color))?;
            stdout.queue(Print(line))?;
            stdout.queue(ResetColor)?;
        }
        renderer.last_lines = lines;
    }

    for idx in 0..game.maze().cell_count() {
        let cell = cell_for(game, progression, idx);
        if renderer.needs_full || cell != renderer.last[idx] {
            renderer.last[idx] = cell;
            let x = idx % size;
            let y = idx / size;
            draw_cell(stdout, renderer, x, y + HEADER_H, cell)?;
        }
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn draw_cell(
    stdout: &mut impl Write,
    renderer: &Renderer,
    x: usize,
    y: usize,
    cell: Cell,
) -> io::Result<()> {
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(cell.text))?;
    let w = UnicodeWidthStr::width(cell.text);
    for _ in w..CELL_W {
        stdout.queue(Print(' '))?;
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::create_level;
    use crate::progression::POINTS_KEY;
    use crate::store::MemoryStore;

    fn setup(difficulty: Difficulty) -> (Game, Progression<MemoryStore>) {
        let game = Game::new(&create_level(), difficulty).unwrap();
        let mut store = MemoryStore::new();
        store.set(POINTS_KEY, "120").unwrap();
        (game, Progression::load(store))
    }

    #[test]
    fn hunger_only_shown_in_hardcore() {
        let (game, progress) = setup(Difficulty::Hard);
        assert_eq!(hud_line(&game, &progress), "Score: 0 | Lives: 3 | Points: 120");
        let (game, progress) = setup(Difficulty::Hardcore);
        assert!(hud_line(&game, &progress).ends_with("| Hunger: 100"));
    }

    #[test]
    fn cells() {
        let (game, mut progress) = setup(Difficulty::Medium);
        assert_eq!(cell_for(&game, &progress, 0).text, PLAYER_FACE);
        assert_eq!(cell_for(&game, &progress, 99).text, "😈");
        assert_eq!(cell_for(&game, &progress, 69).color, Color::Green);
        assert_eq!(cell_for(&game, &progress, 12).text, "██");
        assert_eq!(cell_for(&game, &progress, 1).text, "· ");

        progress.purchase("blue", 50);
        progress.equip("blue");
        assert_eq!(cell_for(&game, &progress, 0).color, Color::Blue);
    }

    #[test]
    fn glyphs_fit_their_cells() {
        for look in GHOST_LOOKS {
            assert_eq!(UnicodeWidthStr::width(look.face), CELL_W);
        }
        for item in COSMETICS.iter().filter_map(|c| c.emoji) {
            assert_eq!(UnicodeWidthStr::width(item), CELL_W);
        }
        assert_eq!(UnicodeWidthStr::width(PLAYER_FACE), CELL_W);
    }

    #[test]
    fn store_panel() {
        let (_, mut progress) = setup(Difficulty::Medium);
        progress.purchase("blue", 50);
        progress.equip("blue");
        let lines = store_lines(&progress);
        assert!(lines[0].starts_with("[z] Blue Pacman"));
        assert!(lines[0].ends_with("Equipped"));
        assert!(lines[1].ends_with("Buy (100)"));
        assert!(lines[2].ends_with("Buy (150)"));
    }

    #[test]
    fn footer_fits_and_lists_every_key() {
        let (game, progress) = setup(Difficulty::Medium);
        let lines = footer_lines(&game, &progress);
        assert_eq!(lines.len(), FOOTER_H);
        let help = lines.last().unwrap();
        for key in STORE_KEYS {
            assert!(help.contains(key), "{help}");
        }
        assert!(help.contains("Esc"));
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= TEXT_W, "{line}");
        }
    }
}

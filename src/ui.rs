#![cfg(feature = "std")]

//! Terminal front end: grid drawing, key mapping and the end-of-game animation.
//! Everything here reads the engine; nothing writes game state.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    board::{Board, CellView},
    config::BOARD_SIZE,
    coord::{Coord, Direction},
    game::{GameEngine, GameState, Intent, Side},
};

const SIZE: usize = BOARD_SIZE as usize;

/// Icon and colour for a cell. Icons are two columns wide.
pub fn symbol(view: CellView) -> (&'static str, Color) {
    match view {
        CellView::Water => ("🌊", Color::Cyan),
        CellView::Ship => ("🚢", Color::Yellow),
        CellView::Hit => ("🔥", Color::Red),
        CellView::Miss => ("○ ", Color::White),
    }
}

/// A key press understood by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Intent),
    /// Replay the explosion animation without touching the game.
    Explode,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let intent = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
        KeyCode::Up => Intent::MoveCursor(Direction::Up),
        KeyCode::Down => Intent::MoveCursor(Direction::Down),
        KeyCode::Left => Intent::MoveCursor(Direction::Left),
        KeyCode::Right => Intent::MoveCursor(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Enter => Intent::FireAtCursor,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Char('e') => return Some(Command::Explode),
        _ => return None,
    };
    Some(Command::Play(intent))
}

/// Closing message shown under the player's board.
pub fn banner(state: GameState) -> Option<&'static str> {
    match state {
        GameState::InProgress => None,
        GameState::PlayerWon => Some("🎉 You sank the enemy fleet! Press any key to exit."),
        GameState::ComputerWon => Some("😞 The computer sank your fleet! Press any key to exit."),
    }
}

pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "player",
        Side::Computer => "computer",
    }
}

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// Raw mode does not return the carriage on '\n', so lines are positioned explicitly.
struct Screen<'a, W: Write> {
    out: &'a mut W,
    row: u16,
}

impl<'a, W: Write> Screen<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Screen { out, row: 0 }
    }

    fn text(&mut self, s: &str) -> io::Result<()> {
        queue!(self.out, Print(s))
    }

    fn newline(&mut self) -> io::Result<()> {
        self.row += 1;
        queue!(self.out, cursor::MoveTo(0, self.row))
    }

    fn line(&mut self, s: &str) -> io::Result<()> {
        self.text(s)?;
        self.newline()
    }
}

fn border(left: char, mid: char, right: char) -> String {
    let segments = vec!["────"; SIZE];
    format!("  {}{}{}", left, segments.join(&mid.to_string()), right)
}

fn draw_grid<W: Write>(
    screen: &mut Screen<'_, W>,
    board: &Board,
    header: &str,
    reveal: bool,
    cursor: Option<Coord>,
) -> io::Result<()> {
    screen.line(header)?;
    let numbers: String = (1..=SIZE).map(|i| format!("{:^5}", i)).collect();
    screen.line(&format!("   {}", numbers))?;
    screen.line(&border('┌', '┬', '┐'))?;
    for r in 0..SIZE {
        screen.text(&format!("{} │", (b'A' + r as u8) as char))?;
        for c in 0..SIZE {
            let coord = Coord::new(r, c);
            let (icon, color) = symbol(board.cell_view(coord, reveal));
            queue!(screen.out, SetForegroundColor(color))?;
            if cursor == Some(coord) {
                queue!(screen.out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                screen.out,
                Print(format!(" {} ", icon)),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("│")
            )?;
        }
        screen.newline()?;
        if r + 1 < SIZE {
            screen.line(&border('├', '┼', '┤'))?;
        }
    }
    screen.line(&border('└', '┴', '┘'))
}

fn status_line(engine: &GameEngine) -> String {
    format!(
        "Target {} | enemy ships afloat: {} | yours: {} | arrows move, space fires, q quits",
        engine.cursor(),
        engine.computer_board().ships_afloat(),
        engine.player_board().ships_afloat(),
    )
}

/// Redraw both boards: the enemy's with the cursor, then the player's own.
pub fn draw<W: Write>(out: &mut W, engine: &GameEngine, banner: Option<&str>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    let mut screen = Screen::new(out);
    draw_grid(
        &mut screen,
        engine.computer_board(),
        "Enemy Board (Your Target)",
        false,
        Some(engine.cursor()),
    )?;
    screen.newline()?;
    let header = match banner {
        Some(msg) => format!("Your Board - {}", msg),
        None => "Your Board".to_string(),
    };
    draw_grid(&mut screen, engine.player_board(), &header, true, None)?;
    screen.text(&status_line(engine))?;
    screen.out.flush()
}

const EXPLOSION_FRAMES: [&[&str]; 3] = [
    &[
        "         (  )   (   )  )      ",
        "          ) (   )  (  (       ",
        "          ( )  (    ) )       ",
        "        _.-'~~~~~`-._         ",
        "     .-~===========~-._       ",
        "    (  BOOM! BOOM!    )       ",
        "     `-._    ~~~~~~.-'        ",
        "          `---'               ",
    ],
    &[
        "           ( (      (  )      ",
        "         ) ) )   ) ) )        ",
        "        ( ( (   ( ( (         ",
        "      .-~~~~~~~~~~~~~-.       ",
        "   .-~   FIRE & FLAMES  ~-.   ",
        "  (   BBBBOOOOOOMMMMM!!!   )  ",
        "   `-._    ~~~~~~~   _.-'     ",
        "        `--._____.--'         ",
    ],
    &[
        "    *  *    *   *     *  *    ",
        "   *  *  ASHES & SMOKE  * *   ",
        "    *   *   *  *   *   *  *   ",
        "    .-~~~~~~~~~~~~~~-.        ",
        "  (      ship hit!     )      ",
        "    `-.____________.-'        ",
    ],
];

fn ship_art(label: &str) -> [String; 5] {
    [
        "    |\\_____________________/|    ".to_string(),
        "   /                         \\   ".to_string(),
        "  /___________________________\\  ".to_string(),
        format!("  \\   === {} SHIP ===   /  ", label.to_uppercase()),
        "~".repeat(34),
    ]
}

/// Missile drop and three-frame explosion over the named side's ship.
pub fn animate_explosion<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let (max_x, max_y) = terminal::size()?;
    let ship = ship_art(label);
    let ship_width = ship[0].chars().count() as u16;
    let ship_y = (max_y / 2).saturating_sub(8);
    let ship_x = max_x.saturating_sub(ship_width) / 2;
    let missile_x = ship_x + ship_width / 2;
    let water = "~".repeat(max_x.saturating_sub(1) as usize);

    let scene = |out: &mut W, offset: u16| -> io::Result<()> {
        queue!(out, Clear(ClearType::All), SetForegroundColor(Color::Cyan))?;
        for y in ship_y + ship.len() as u16..max_y {
            queue!(out, cursor::MoveTo(0, y), Print(&water))?;
        }
        queue!(out, SetForegroundColor(Color::White), SetAttribute(Attribute::Bold))?;
        for (i, line) in ship.iter().enumerate() {
            queue!(out, cursor::MoveTo(ship_x, ship_y + i as u16 + offset), Print(line))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)
    };

    for y in 2..ship_y + 2 {
        scene(out, 0)?;
        queue!(
            out,
            cursor::MoveTo(missile_x, y),
            SetForegroundColor(Color::Yellow),
            Print("|"),
            ResetColor
        )?;
        out.flush()?;
        thread::sleep(Duration::from_millis(30));
    }

    for (n, frame) in EXPLOSION_FRAMES.iter().enumerate() {
        let (offset, color, attr, pause) = match n {
            0 => (1, Color::Red, Attribute::Bold, 450),
            1 => (1, Color::DarkYellow, Attribute::Bold, 450),
            _ => (2, Color::DarkGrey, Attribute::Dim, 850),
        };
        scene(out, offset)?;
        queue!(out, SetForegroundColor(color), SetAttribute(attr))?;
        for (i, line) in frame.iter().enumerate() {
            let width = line.chars().count() as u16;
            let y = ship_y + 1 + offset + i as u16;
            queue!(out, cursor::MoveTo(missile_x.saturating_sub(width / 2), y), Print(line))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        out.flush()?;
        thread::sleep(Duration::from_millis(pause));
    }
    Ok(())
}

//! folioterm console host
//!
//! Drives a [`Session`] from raw terminal key events. Arrow keys browse
//! history (or steer a game), Tab completes, Ctrl+C interrupts and Ctrl+D
//! leaves the program.
//!
//! Environment:
//! - `FOLIOTERM_LOG`: `error|warn|info|debug|trace` (default `warn`)
//! - `FOLIOTERM_SEED`: u64 RNG seed (default from the system clock)
//! - `FOLIOTERM_NO_ANIMATION=1`: skip boot pacing and the typewriter reveal

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::cursor::{MoveTo, MoveToColumn, MoveToPreviousLine};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use folioterm::data::themes::Palette;
use folioterm::rng::choose;
use folioterm::terminal::reveal::Typewriter;
use folioterm::terminal::{LineKind, TerminalLine};
use folioterm::{GeoPosition, Host, HostError, Key, Session, SessionRng};
use log::{Level, LevelFilter, Metadata, Record};

const TICK: Duration = Duration::from_millis(20);

// ============================================================================
// Logger
// ============================================================================

/// Writes `[LEVEL] target: message` to stderr
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // raw mode: no implicit carriage return
            eprint!("[{}] {}: {}\r\n", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger() {
    let level = match std::env::var("FOLIOTERM_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        Ok("off") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    log::log!(Level::Debug, "log level {}", level);
}

// ============================================================================
// Host
// ============================================================================

/// Offline console host: real clocks, no network
struct ConsoleHost {
    started: Instant,
    reload_requested: bool,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            reload_requested: false,
        }
    }
}

impl Host for ConsoleHost {
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn local_time(&self) -> Option<String> {
        Some(chrono::Local::now().format("%-m/%-d/%Y, %H:%M:%S").to_string())
    }

    fn public_ip(&mut self) -> Result<String, HostError> {
        Err(HostError::Unavailable)
    }

    fn geolocate(&mut self) -> Result<GeoPosition, HostError> {
        Err(HostError::PermissionDenied)
    }

    fn open_url(&mut self, url: &str) {
        log::info!("open {}", url);
        print!("[open] {}\r\n", url);
    }

    fn reload(&mut self) {
        self.reload_requested = true;
    }

    fn platform(&self) -> Option<String> {
        Some(format!("{} {}", std::env::consts::OS, std::env::consts::ARCH))
    }

    fn user_agent(&self) -> Option<String> {
        Some(format!("folioterm/{}", env!("CARGO_PKG_VERSION")))
    }
}

// ============================================================================
// Key Input
// ============================================================================

/// What one terminal key event means to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Key(Key),
    Quit,
}

fn input_for(event: KeyEvent) -> Option<Input> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Input::Key(Key::Interrupt)),
            KeyCode::Char('d') => Some(Input::Quit),
            _ => None,
        };
    }
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(Input::Key(key))
}

/// Raw mode for as long as the guard lives
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("could not leave raw mode: {}", e);
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Theme color for a `#rrggbb` string
fn color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| hex.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const RAIN_GLYPHS: &[char] = &['ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', '0', '1', '0', '1', ' ', ' '];
const RAIN_WIDTH: usize = 48;
const RAIN_FRAME_MS: u64 = 100;

struct Renderer {
    animated: bool,
    printed: usize,
    generation: u64,
    last_frame: Option<Vec<String>>,
    /// Status and prompt rows below the printed buffer
    live: Vec<String>,
    rain: (u64, String),
    rng: SessionRng,
}

impl Renderer {
    fn new(animated: bool, seed: u64) -> Self {
        Self {
            animated,
            printed: 0,
            generation: 0,
            last_frame: None,
            live: Vec::new(),
            rain: (u64::MAX, String::new()),
            rng: SessionRng::new(seed),
        }
    }

    fn clear_screen(&mut self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.live.clear();
        Ok(())
    }

    /// Redraw a full-screen frame when it changed
    fn frame(&mut self, frame: Vec<String>, out: &mut impl Write) -> io::Result<()> {
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(());
        }
        self.clear_screen(out)?;
        for line in &frame {
            queue!(out, Print(line), Print("\r\n"))?;
        }
        self.last_frame = Some(frame);
        out.flush()
    }

    fn erase_live(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.live.is_empty() {
            return Ok(());
        }
        if self.live.len() > 1 {
            queue!(out, MoveToPreviousLine(self.live.len() as u16 - 1))?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        self.live.clear();
        Ok(())
    }

    fn output_block(&self, block: Vec<String>, color: Color, out: &mut impl Write) -> io::Result<()> {
        queue!(out, SetForegroundColor(color))?;
        if !self.animated {
            for line in block {
                queue!(out, Print(line), Print("\r\n"))?;
            }
            return queue!(out, ResetColor);
        }
        let mut rows = 0;
        for frame in Typewriter::new(block) {
            thread::sleep(Duration::from_millis(frame.delay_ms));
            if frame.lines.len() > rows {
                if rows > 0 {
                    queue!(out, Print("\r\n"))?;
                }
                rows = frame.lines.len();
            }
            let current = frame.lines.last().map(String::as_str).unwrap_or("");
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), Print(current))?;
            out.flush()?;
        }
        if rows > 0 {
            queue!(out, Print("\r\n"))?;
        }
        queue!(out, ResetColor)
    }

    /// Print buffer lines added since the last call
    ///
    /// A new clear generation restarts from a blank screen.
    fn lines(
        &mut self,
        lines: &[TerminalLine],
        generation: u64,
        palette: &Palette,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if self.last_frame.take().is_some() || generation != self.generation {
            self.clear_screen(out)?;
            self.printed = 0;
            self.generation = generation;
        }

        let fresh = &lines[self.printed.min(lines.len())..];
        if !fresh.is_empty() {
            self.erase_live(out)?;
        }

        let mut i = 0;
        while i < fresh.len() {
            let line = &fresh[i];
            match line.kind {
                LineKind::Input => queue!(
                    out,
                    SetForegroundColor(color(palette.prompt)),
                    Print(&line.text),
                    ResetColor,
                    Print("\r\n")
                )?,
                LineKind::System => queue!(
                    out,
                    SetForegroundColor(color(palette.accent)),
                    Print(&line.text),
                    ResetColor,
                    Print("\r\n")
                )?,
                LineKind::Output => {
                    let block: Vec<String> = fresh[i..]
                        .iter()
                        .take_while(|l| l.kind == LineKind::Output)
                        .map(|l| l.text.clone())
                        .collect();
                    i += block.len();
                    self.output_block(block, color(palette.text), out)?;
                    continue;
                }
            }
            i += 1;
        }
        self.printed = lines.len();
        out.flush()
    }

    fn rain_row(&mut self, now_ms: u64) -> String {
        let frame = now_ms / RAIN_FRAME_MS;
        if self.rain.0 != frame {
            let row = (0..RAIN_WIDTH)
                .map(|_| choose(&mut self.rng, RAIN_GLYPHS).copied().unwrap_or(' '))
                .collect();
            self.rain = (frame, row);
        }
        self.rain.1.clone()
    }

    /// Status line (hack spinner or matrix rain) and the prompt with input
    fn live<H: Host>(&mut self, session: &Session<H, SessionRng>, out: &mut impl Write) -> io::Result<()> {
        let mode = &session.state().mode;
        let now = session.host().now_ms();
        let mut rows = Vec::new();
        if mode.loading {
            let spin = SPINNER[(now / 80) as usize % SPINNER.len()];
            rows.push(format!("{} Processing...", spin));
        } else if mode.matrix_rain {
            rows.push(self.rain_row(now));
        }
        if session.prompt_visible() {
            rows.push(format!("{} {}", session.prompt(), session.input()));
        }
        if rows == self.live {
            return Ok(());
        }

        self.erase_live(out)?;
        let palette = session.palette();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                queue!(out, Print("\r\n"))?;
            }
            queue!(out, SetForegroundColor(color(palette.prompt)), Print(row), ResetColor)?;
        }
        self.live = rows;
        out.flush()
    }
}

// ============================================================================
// Main Loop
// ============================================================================

fn seed() -> u64 {
    std::env::var("FOLIOTERM_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
}

fn new_session(animated: bool, seed: u64) -> Session<ConsoleHost, SessionRng> {
    let mut session = Session::new(ConsoleHost::new(), SessionRng::new(seed));
    session.set_animated(animated);
    session
}

fn main() -> io::Result<()> {
    init_logger();
    let animated = std::env::var("FOLIOTERM_NO_ANIMATION").as_deref() != Ok("1");
    let seed = seed();

    let _raw = RawMode::enable()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = new_session(animated, seed);
    let mut renderer = Renderer::new(animated, seed);

    loop {
        let mut timeout = TICK;
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            match input_for(key_event) {
                Some(Input::Key(key)) => session.handle_key(key),
                Some(Input::Quit) => {
                    queue!(out, Print("\r\n"))?;
                    return out.flush();
                }
                None => {}
            }
        }

        session.tick();

        if session.host().reload_requested {
            log::info!("reloading");
            session = new_session(animated, seed);
            renderer = Renderer::new(animated, seed);
        }

        if let Some(frame) = session.loading_frame().or_else(|| session.game_frame()) {
            renderer.frame(frame, &mut out)?;
        } else {
            let palette = session.palette();
            renderer.lines(session.lines(), session.clear_generation(), &palette, &mut out)?;
            renderer.live(&session, &mut out)?;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Input> {
        input_for(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn line(kind: LineKind, text: &str) -> TerminalLine {
        TerminalLine {
            kind,
            text: String::from(text),
        }
    }

    #[test]
    fn test_navigation_keys_reach_the_session() {
        assert_eq!(press(KeyCode::Up), Some(Input::Key(Key::Up)));
        assert_eq!(press(KeyCode::Down), Some(Input::Key(Key::Down)));
        assert_eq!(press(KeyCode::Tab), Some(Input::Key(Key::Tab)));
        assert_eq!(press(KeyCode::Left), Some(Input::Key(Key::Left)));
        assert_eq!(press(KeyCode::Enter), Some(Input::Key(Key::Enter)));
        assert_eq!(press(KeyCode::Char('q')), Some(Input::Key(Key::Char('q'))));
        assert_eq!(press(KeyCode::Esc), None);
    }

    #[test]
    fn test_control_keys() {
        let ctrl = |c| input_for(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert_eq!(ctrl('c'), Some(Input::Key(Key::Interrupt)));
        assert_eq!(ctrl('d'), Some(Input::Quit));
        assert_eq!(ctrl('x'), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(input_for(event), None);
    }

    #[test]
    fn test_local_time_format() {
        let stamp = ConsoleHost::new().local_time().unwrap_or_default();
        let (date, time) = stamp.split_once(", ").unwrap_or_default();
        assert_eq!(date.split('/').count(), 3);
        assert_eq!(time.len(), 8);
        assert_eq!(time.split(':').count(), 3);
    }

    #[test]
    fn test_color_parses_hex() {
        assert_eq!(color("#00ff41"), Color::Rgb { r: 0, g: 255, b: 65 });
        assert_eq!(color("nope"), Color::Reset);
    }

    #[test]
    fn test_new_clear_generation_reprints_from_top() {
        let palette = folioterm::session::ThemeId::Matrix.palette();
        let mut renderer = Renderer::new(false, 1);
        let mut out = Vec::new();

        let before = [
            line(LineKind::Output, "one"),
            line(LineKind::Output, "two"),
            line(LineKind::Output, "three"),
        ];
        renderer.lines(&before, 0, &palette, &mut out).ok();
        assert_eq!(renderer.printed, 3);

        // cleared and refilled past the old length within one frame
        let after = [
            line(LineKind::Input, "rahil@~:~$ ls"),
            line(LineKind::Output, "Directory listing:"),
            line(LineKind::Output, "[FILE] about.txt"),
            line(LineKind::Output, "[DIR] projects"),
        ];
        let mut out = Vec::new();
        renderer.lines(&after, 1, &palette, &mut out).ok();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("rahil@~:~$ ls"));
        assert!(text.contains("Directory listing:"));
        assert_eq!(renderer.printed, 4);
    }

    fn type_line(session: &mut Session<ConsoleHost, SessionRng>, text: &str) {
        for c in text.chars() {
            session.handle_key(Key::Char(c));
        }
        session.handle_key(Key::Enter);
    }

    #[test]
    fn test_hack_and_rain_show_a_status_row() {
        let mut session = new_session(false, 7);
        session.handle_key(Key::Enter);
        assert!(session.is_ready());

        let mut renderer = Renderer::new(false, 7);
        let mut out = Vec::new();
        renderer.live(&session, &mut out).ok();
        assert_eq!(renderer.live, ["rahil@~:~$ "]);

        type_line(&mut session, "fun-zone");
        type_line(&mut session, "hack");
        renderer.live(&session, &mut out).ok();
        assert_eq!(renderer.live.len(), 2);
        assert!(renderer.live[0].ends_with(" Processing..."));

        session.handle_key(Key::Interrupt);
        type_line(&mut session, "rain");
        renderer.live(&session, &mut out).ok();
        assert_eq!(renderer.live.len(), 2);
        assert_eq!(renderer.live[0].chars().count(), RAIN_WIDTH);
    }
}

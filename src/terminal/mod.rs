//! Terminal Session
//!
//! [`Session`] is the whole terminal as seen by a host: the boot stages, the
//! rendered line buffer, the input line with history and completion, the
//! delayed-effect timers, and the hand-off to a running mini-game. A host
//! feeds it [`Key`]s and calls [`Session::tick`] regularly; all state
//! changes happen inside those two calls.

pub mod boot;
pub mod reveal;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use crate::config::{
    EXIT_RELOAD_DELAY_MS, LIVE_USERS_MAX, LIVE_USERS_MIN, LIVE_USERS_REFRESH_MS, USER_NAME,
};
use crate::data::themes::Palette;
use crate::games::GameHost;
use crate::history::{Direction, HistoryLedger, Navigation};
use crate::host::Host;
use crate::rng::range_inclusive;
use crate::session::{SessionState, TimerAction, TimerQueue};
use crate::shell::{CommandResult, Interpreter, ShellContext, normalize_line};
use crate::vfs::filesystem;

use boot::{BannerSequence, ConnectionInfo, LoadingScreen};

// ============================================================================
// Input and Output Types
// ============================================================================

/// A key event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+C
    Interrupt,
}

/// How a buffer line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command, prompt included
    Input,
    /// Command output, revealed with the typewriter effect
    Output,
    /// Banner, notices and `^C`, shown at once
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Boot stage the session is in
pub enum Phase {
    Loading(LoadingScreen),
    Booting(BannerSequence),
    Ready,
}

// ============================================================================
// Session
// ============================================================================

/// A terminal session
pub struct Session<H: Host, R: RngCore> {
    host: H,
    rng: R,
    phase: Phase,
    lines: Vec<TerminalLine>,
    /// Bumped every time the buffer is wiped
    clears: u64,
    input: String,
    prompt_visible: bool,
    state: SessionState,
    history: HistoryLedger,
    interpreter: Interpreter,
    timers: TimerQueue,
    game: Option<GameHost>,
    live_users: u32,
    next_live_refresh_ms: u64,
    animated: bool,
    ended: bool,
}

impl<H: Host, R: RngCore> Session<H, R> {
    /// Start a session on the loading screen
    pub fn new(mut host: H, mut rng: R) -> Self {
        let now = host.now_ms();
        let info = ConnectionInfo::collect(&mut host);
        let live_users = range_inclusive(&mut rng, LIVE_USERS_MIN, LIVE_USERS_MAX);
        log::info!("session started at {}ms", now);

        Self {
            host,
            rng,
            phase: Phase::Loading(LoadingScreen::new(info, now)),
            lines: Vec::new(),
            clears: 0,
            input: String::new(),
            prompt_visible: false,
            state: SessionState::new(now),
            history: HistoryLedger::new(),
            interpreter: Interpreter::new(),
            timers: TimerQueue::new(),
            game: None,
            live_users,
            next_live_refresh_ms: now + LIVE_USERS_REFRESH_MS,
            animated: true,
            ended: false,
        }
    }

    /// Turn boot pacing off (or back on)
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        if !animated {
            if let Phase::Loading(screen) = &mut self.phase {
                screen.reveal_all();
            }
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready)
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Number of times `clear` wiped the buffer
    ///
    /// A host that prints the buffer incrementally restarts from the first
    /// line whenever this changes.
    pub fn clear_generation(&self) -> u64 {
        self.clears
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// `rahil@<loc>:~$`
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", USER_NAME, self.state.prompt_location())
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn palette(&self) -> Palette {
        self.state.mode.theme.palette()
    }

    pub fn live_users(&self) -> u32 {
        self.live_users
    }

    /// The session ended with `exit` and waits for the reload
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Loading screen frame, while on the loading screen
    pub fn loading_frame(&self) -> Option<Vec<String>> {
        match &self.phase {
            Phase::Loading(screen) => Some(screen.render()),
            _ => None,
        }
    }

    /// Frame of the running game, if any
    pub fn game_frame(&self) -> Option<Vec<String>> {
        self.game.as_ref().map(GameHost::render)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: Key) {
        let now = self.host.now_ms();
        match &mut self.phase {
            Phase::Loading(screen) => {
                if key == Key::Enter && screen.is_ready() {
                    log::debug!("loading screen dismissed");
                    let mut banner = BannerSequence::new(now);
                    if !self.animated {
                        self.push_system(banner.flush());
                    }
                    self.phase = Phase::Booting(banner);
                    self.advance_boot(now);
                }
                return;
            }
            Phase::Booting(_) => return,
            Phase::Ready => {}
        }

        if key == Key::Interrupt {
            self.interrupt();
            return;
        }

        if let Some(game) = &mut self.game {
            game.handle_key(key, now, &mut self.rng);
            self.finish_game();
            return;
        }

        if !self.prompt_visible {
            return;
        }

        match key {
            Key::Char(c) => self.input.push(c),
            Key::Backspace => {
                self.input.pop();
            }
            Key::Up => self.browse_history(Direction::Up),
            Key::Down => self.browse_history(Direction::Down),
            Key::Tab => {
                if let Some(name) = self.interpreter.suggest(&self.input, &self.state) {
                    self.input = String::from(name);
                }
            }
            Key::Enter => {
                let raw = core::mem::take(&mut self.input);
                self.submit(&raw, now);
            }
            Key::Left | Key::Right | Key::Interrupt => {}
        }
    }

    fn browse_history(&mut self, direction: Direction) {
        match self.history.navigate(direction) {
            Navigation::Unchanged => {}
            Navigation::Blank => self.input.clear(),
            Navigation::Entry(entry) => self.input = String::from(entry),
        }
    }

    /// Ctrl+C: stop the spinner, the rain and any game
    fn interrupt(&mut self) {
        let mode = &mut self.state.mode;
        mode.loading = false;
        mode.matrix_rain = false;
        mode.active_game = None;
        if self.game.take().is_some() {
            log::info!("game interrupted");
        }
        self.prompt_visible = !self.ended;
        self.input.clear();
        self.lines.push(TerminalLine::new(LineKind::System, "^C"));
    }

    fn submit(&mut self, raw: &str, now: u64) {
        if raw.trim().is_empty() {
            return;
        }
        let echo = format!("{} {}", self.prompt(), raw);
        self.lines.push(TerminalLine::new(LineKind::Input, echo));
        let result = match normalize_line(raw).as_str() {
            "clear" => CommandResult::ClearScreen,
            "exit" => CommandResult::Exit,
            _ => {
                let mut ctx = ShellContext {
                    state: &mut self.state,
                    history: &self.history,
                    fs: filesystem(),
                    host: &mut self.host,
                    rng: &mut self.rng,
                    timers: &mut self.timers,
                    now_ms: now,
                };
                self.interpreter.execute(raw, &mut ctx)
            }
        };
        // commands see the ledger as it was before this line
        self.history.record(raw);

        match result {
            CommandResult::Text(output) => self
                .lines
                .extend(output.into_iter().map(|l| TerminalLine::new(LineKind::Output, l))),
            CommandResult::ClearScreen => {
                self.lines.clear();
                self.clears += 1;
            }
            CommandResult::Exit => self.end_session(now),
            CommandResult::EnterGame(id) => {
                self.game = Some(GameHost::new(id, &mut self.rng));
                self.prompt_visible = false;
            }
            CommandResult::Unhandled => {}
        }
    }

    fn end_session(&mut self, now: u64) {
        self.push_system(&["logout", "Session ended. Thank you for visiting!"]);
        self.prompt_visible = false;
        self.ended = true;
        self.timers
            .schedule(now + EXIT_RELOAD_DELAY_MS, TimerAction::Reload);
        log::info!("session ended, reload in {}ms", EXIT_RELOAD_DELAY_MS);
    }

    fn finish_game(&mut self) {
        let Some(finished) = self.game.as_mut().and_then(GameHost::poll_finished) else {
            return;
        };
        let message = match finished.score {
            Some(score) => format!("Game ended! Final score: {}", score),
            None => String::from("Game ended!"),
        };
        log::info!("{}", message);
        self.lines.push(TerminalLine::new(LineKind::System, message));
        self.game = None;
        self.state.mode.active_game = None;
        self.prompt_visible = true;
    }

    fn push_system(&mut self, lines: &[&str]) {
        self.lines
            .extend(lines.iter().map(|l| TerminalLine::new(LineKind::System, *l)));
    }

    // ------------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------------

    /// Advance everything that depends on time
    pub fn tick(&mut self) {
        let now = self.host.now_ms();

        match &mut self.phase {
            Phase::Loading(screen) => screen.tick(now),
            Phase::Booting(_) => self.advance_boot(now),
            Phase::Ready => {}
        }

        for action in self.timers.drain_due(now) {
            log::debug!("timer fired: {:?}", action);
            match action {
                TimerAction::ClearLoading => self.state.mode.loading = false,
                TimerAction::StopRain => self.state.mode.matrix_rain = false,
                TimerAction::OpenUrl(url) => self.host.open_url(&url),
                TimerAction::Reload => self.host.reload(),
            }
        }

        if now >= self.next_live_refresh_ms {
            self.live_users = range_inclusive(&mut self.rng, LIVE_USERS_MIN, LIVE_USERS_MAX);
            self.next_live_refresh_ms = now + LIVE_USERS_REFRESH_MS;
        }

        if let Some(game) = &mut self.game {
            game.tick(now, &mut self.rng);
            self.finish_game();
        }
    }

    fn advance_boot(&mut self, now: u64) {
        let Phase::Booting(banner) = &mut self.phase else {
            return;
        };
        let due = banner.tick(now);
        let done = banner.is_done();
        self.push_system(due);
        if done {
            log::debug!("boot complete");
            self.phase = Phase::Ready;
            self.prompt_visible = true;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GeoPosition, HostError};
    use crate::rng::SessionRng;
    use crate::session::GameId;
    use core::cell::Cell;

    struct ClockHost {
        now: Cell<u64>,
        reloads: u32,
    }

    impl Host for ClockHost {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
        fn local_time(&self) -> Option<String> {
            None
        }
        fn public_ip(&mut self) -> Result<String, HostError> {
            Err(HostError::Unavailable)
        }
        fn geolocate(&mut self) -> Result<GeoPosition, HostError> {
            Err(HostError::Unavailable)
        }
        fn open_url(&mut self, _url: &str) {}
        fn reload(&mut self) {
            self.reloads += 1;
        }
    }

    fn ready_session() -> Session<ClockHost, SessionRng> {
        let host = ClockHost {
            now: Cell::new(0),
            reloads: 0,
        };
        let mut session = Session::new(host, SessionRng::new(9));
        session.set_animated(false);
        session.handle_key(Key::Enter);
        assert!(session.is_ready());
        session
    }

    fn type_line(session: &mut Session<ClockHost, SessionRng>, line: &str) {
        for c in line.chars() {
            session.handle_key(Key::Char(c));
        }
        session.handle_key(Key::Enter);
    }

    fn advance(session: &mut Session<ClockHost, SessionRng>, ms: u64) {
        let now = session.host().now.get();
        session.host().now.set(now + ms);
        session.tick();
    }

    #[test]
    fn test_loading_screen_waits_for_enter() {
        let host = ClockHost {
            now: Cell::new(0),
            reloads: 0,
        };
        let mut session = Session::new(host, SessionRng::new(1));
        session.handle_key(Key::Enter);
        assert!(matches!(session.phase(), Phase::Loading(_)));

        advance(&mut session, 10_000);
        let frame = session.loading_frame().unwrap_or_default();
        assert_eq!(frame[1], "├── IP Address: Unknown");
        session.handle_key(Key::Enter);
        assert!(matches!(session.phase(), Phase::Booting(_)));
        assert!(!session.prompt_visible());

        advance(&mut session, 10_000);
        assert!(session.is_ready());
        assert!(session.prompt_visible());
        assert_eq!(session.lines()[0].text, "Portfolio Terminal v0.1.0 ready.");
    }

    #[test]
    fn test_empty_submit_does_nothing() {
        let mut session = ready_session();
        let before = session.lines().len();
        type_line(&mut session, "   ");
        assert_eq!(session.lines().len(), before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_keys_and_completion() {
        let mut session = ready_session();
        type_line(&mut session, "whoami");
        type_line(&mut session, "pwd");

        session.handle_key(Key::Up);
        assert_eq!(session.input(), "pwd");
        session.handle_key(Key::Up);
        assert_eq!(session.input(), "whoami");
        session.handle_key(Key::Down);
        session.handle_key(Key::Down);
        assert_eq!(session.input(), "");

        for c in "who".chars() {
            session.handle_key(Key::Char(c));
        }
        session.handle_key(Key::Tab);
        assert_eq!(session.input(), "whoami");
    }

    #[test]
    fn test_clear_wipes_buffer() {
        let mut session = ready_session();
        type_line(&mut session, "whoami");
        type_line(&mut session, "CLEAR");
        assert!(session.lines().is_empty());
        assert_eq!(session.history().entries(), ["whoami", "CLEAR"]);
    }

    #[test]
    fn test_exit_reloads_after_delay() {
        let mut session = ready_session();
        type_line(&mut session, "exit");
        assert!(session.is_ended());
        assert!(!session.prompt_visible());
        let tail: Vec<&str> = session.lines().iter().rev().take(2).map(|l| l.text.as_str()).collect();
        assert_eq!(tail, ["Session ended. Thank you for visiting!", "logout"]);

        advance(&mut session, 1_999);
        assert_eq!(session.host().reloads, 0);
        advance(&mut session, 1);
        assert_eq!(session.host().reloads, 1);
    }

    #[test]
    fn test_game_hand_off_and_interrupt() {
        let mut session = ready_session();
        type_line(&mut session, "game-snake");
        assert_eq!(session.state().mode.active_game, Some(GameId::Snake));
        assert!(!session.prompt_visible());
        assert!(session.game_frame().is_some());

        session.handle_key(Key::Interrupt);
        assert_eq!(session.state().mode.active_game, None);
        assert!(session.game_frame().is_none());
        assert!(session.prompt_visible());
        assert_eq!(session.lines().last().map(|l| l.text.as_str()), Some("^C"));
    }

    #[test]
    fn test_game_end_message() {
        let mut session = ready_session();
        type_line(&mut session, "game-trivia");
        session.handle_key(Key::Char(' '));
        for c in "13213".chars() {
            session.handle_key(Key::Char(c));
        }
        assert!(session.game_frame().is_none());
        assert_eq!(
            session.lines().last().map(|l| l.text.as_str()),
            Some("Game ended! Final score: 100")
        );
        assert_eq!(session.state().mode.active_game, None);
        assert!(session.prompt_visible());
    }

    #[test]
    fn test_live_users_refresh() {
        let mut session = ready_session();
        for _ in 0..5 {
            advance(&mut session, LIVE_USERS_REFRESH_MS);
            assert!((LIVE_USERS_MIN..=LIVE_USERS_MAX).contains(&session.live_users()));
        }
    }
}

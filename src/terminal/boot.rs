//! Boot Sequence
//!
//! Two stages run before the first prompt: the loading screen (connection
//! info, BIOS lines, "Press ENTER") and the terminal banner. Both are paced
//! by the session clock and advanced from `Session::tick`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{
    BOOT_FAST_DELAY_MS, BOOT_SLOW_DELAY_MS, BOOT_SLOW_LINES, LOADING_LINE_INTERVAL_MS, USER_NAME,
};
use crate::host::Host;

const BIOS_LINES: &[&str] = &[
    "BIOS Version 2.4.1 - Portfolio Terminal",
    "Memory Test: 8192MB OK",
    "Initializing hardware...",
    "Loading kernel modules...",
    "Starting system services...",
    "Mounting file systems...",
    "Network interfaces: UP",
    "Connecting to network...",
    "System boot complete.",
    "Welcome to Rahil's Portfolio Terminal",
    "Portfolio OS v2.1.0 (Linux Compatible)",
    "",
];

/// Terminal banner, printed line by line as system output
pub const BANNER: &[&str] = &[
    "Portfolio Terminal v0.1.0 ready.",
    "",
    "██████╗  █████╗ ██╗  ██╗██╗██╗     ",
    "██╔══██╗██╔══██╗██║  ██║██║██║     ",
    "██████╔╝███████║███████║██║██║     ",
    "██╔══██╗██╔══██║██╔══██║██║██║     ",
    "██║  ██║██║  ██║██║  ██║██║███████╗",
    "╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝╚══════╝",
    "",
    "Welcome to Rahil's Interactive Developer Terminal",
    "File system initialized at /home/rahil",
    "Type `help` to explore available commands",
    "Type `ls` to see available files and directories",
    "",
];

const USER_AGENT_WIDTH: usize = 60;

// ============================================================================
// Loading Screen
// ============================================================================

/// Visitor details shown at the top of the loading screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub ip: String,
    pub platform: String,
    pub user_agent: String,
    pub timestamp: String,
}

impl ConnectionInfo {
    /// Gather the details from the host; every lookup degrades to `Unknown`
    pub fn collect(host: &mut dyn Host) -> Self {
        let ip = match host.public_ip() {
            Ok(ip) => ip,
            Err(e) => {
                log::warn!("public ip lookup failed: {}", e);
                String::from("Unknown")
            }
        };
        let unknown = || String::from("Unknown");
        Self {
            ip,
            platform: host.platform().unwrap_or_else(unknown),
            user_agent: host.user_agent().unwrap_or_else(unknown),
            timestamp: host.local_time().unwrap_or_else(unknown),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let agent: String = self.user_agent.chars().take(USER_AGENT_WIDTH).collect();
        alloc::vec![
            String::from("Connection Info:"),
            format!("├── IP Address: {}", self.ip),
            format!("├── Platform: {}", self.platform),
            format!("├── User Agent: {}...", agent),
            format!("└── Timestamp: {}", self.timestamp),
        ]
    }
}

/// First boot stage
pub struct LoadingScreen {
    info: ConnectionInfo,
    revealed: usize,
    next_at_ms: u64,
}

impl LoadingScreen {
    pub fn new(info: ConnectionInfo, now_ms: u64) -> Self {
        Self {
            info,
            revealed: 0,
            next_at_ms: now_ms + LOADING_LINE_INTERVAL_MS,
        }
    }

    pub fn info(&self) -> &ConnectionInfo {
        &self.info
    }

    /// Reveal every BIOS line that is due
    pub fn tick(&mut self, now_ms: u64) {
        while !self.is_ready() && now_ms >= self.next_at_ms {
            self.revealed += 1;
            self.next_at_ms += LOADING_LINE_INTERVAL_MS;
        }
    }

    /// Skip the pacing
    pub fn reveal_all(&mut self) {
        self.revealed = BIOS_LINES.len();
    }

    /// All BIOS lines are shown and Enter will continue
    pub fn is_ready(&self) -> bool {
        self.revealed >= BIOS_LINES.len()
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = self.info.lines();
        lines.push(String::new());
        lines.extend(BIOS_LINES[..self.revealed].iter().map(|l| String::from(*l)));
        if self.is_ready() {
            lines.push(String::from("System Ready"));
            lines.push(format!("Username: {}", USER_NAME));
            lines.push(String::from("Password: ••••••••"));
            lines.push(String::from("Press ENTER to continue..."));
        }
        lines
    }
}

// ============================================================================
// Banner
// ============================================================================

/// Second boot stage: the banner, one line at a time
pub struct BannerSequence {
    printed: usize,
    next_at_ms: u64,
}

fn banner_delay(index: usize) -> u64 {
    if index < BOOT_SLOW_LINES {
        BOOT_SLOW_DELAY_MS
    } else {
        BOOT_FAST_DELAY_MS
    }
}

impl BannerSequence {
    pub fn new(now_ms: u64) -> Self {
        Self {
            printed: 0,
            next_at_ms: now_ms + banner_delay(0),
        }
    }

    /// Banner lines that became due since the last call
    pub fn tick(&mut self, now_ms: u64) -> &'static [&'static str] {
        let start = self.printed;
        while !self.is_done() && now_ms >= self.next_at_ms {
            self.printed += 1;
            self.next_at_ms += banner_delay(self.printed);
        }
        &BANNER[start..self.printed]
    }

    /// Every remaining line at once
    pub fn flush(&mut self) -> &'static [&'static str] {
        let start = self.printed;
        self.printed = BANNER.len();
        &BANNER[start..]
    }

    pub fn is_done(&self) -> bool {
        self.printed >= BANNER.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ConnectionInfo {
        ConnectionInfo {
            ip: String::from("203.0.113.7"),
            platform: String::from("Linux x86_64"),
            user_agent: "x".repeat(80),
            timestamp: String::from("1/1/2026, 10:00:00"),
        }
    }

    #[test]
    fn test_connection_block_truncates_agent() {
        let lines = info().lines();
        assert_eq!(lines[1], "├── IP Address: 203.0.113.7");
        assert_eq!(lines[3], format!("├── User Agent: {}...", "x".repeat(60)));
    }

    #[test]
    fn test_loading_reveals_every_150ms() {
        let mut screen = LoadingScreen::new(info(), 1_000);
        screen.tick(1_149);
        assert_eq!(screen.revealed, 0);
        screen.tick(1_150);
        assert_eq!(screen.revealed, 1);
        screen.tick(1_000 + 150 * 5);
        assert_eq!(screen.revealed, 5);
        assert!(!screen.is_ready());

        screen.tick(1_000 + 150 * BIOS_LINES.len() as u64);
        assert!(screen.is_ready());
        let frame = screen.render();
        assert_eq!(frame.last().map(String::as_str), Some("Press ENTER to continue..."));
    }

    #[test]
    fn test_banner_pacing() {
        let mut banner = BannerSequence::new(0);
        assert!(banner.tick(299).is_empty());
        assert_eq!(banner.tick(300), &["Portfolio Terminal v0.1.0 ready."]);
        // six slow lines end at 1800 ms, then 100 ms apart
        assert_eq!(banner.tick(1_800).len(), 5);
        assert_eq!(banner.tick(1_900).len(), 1);
        assert!(!banner.is_done());
        let rest = banner.tick(10_000);
        assert_eq!(rest.last(), Some(&""));
        assert!(banner.is_done());
        assert!(banner.flush().is_empty());
    }
}

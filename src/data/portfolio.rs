//! Portfolio sections and project links

pub const ABOUT: &[&str] = &[
    "👋 ABOUT ME",
    "==========",
    "",
    "Hi, I'm Rahil Vahora, a full-stack developer who enjoys building",
    "fast, reliable web applications and the tooling around them.",
    "",
    "• Focus: React, TypeScript, Node.js, cloud infrastructure",
    "• Currently: building products end to end, from schema to UI",
    "• Interests: developer experience, terminals, open source",
    "",
    "Type 'work', 'projects', 'experience' or 'contact' to learn more.",
    "",
];

pub const WORK: &[&str] = &[
    "💼 WORK",
    "=======",
    "",
    "• Full-Stack Developer - Freelance (2023 - Present)",
    "  Web apps for small businesses: billing, dashboards, storefronts",
    "",
    "• Software Engineering Intern - Tech Startup (2022 - 2023)",
    "  REST APIs in Node.js, React front ends, CI pipelines",
    "",
];

pub const PROJECTS: &[&str] = &[
    "🚀 PROJECTS",
    "===========",
    "",
    "• project-1 - Portfolio Terminal: this interactive terminal",
    "• project-2 - Travel Billing System: expense tracking for businesses",
    "• project-3 - Chat Platform: real-time messaging with WebSockets",
    "• project-4 - Task Board: kanban board with drag and drop",
    "• project-5 - Weather Dashboard: forecasts on an interactive map",
    "",
    "Type 'project-<number>' to open a project (e.g., project-1)",
    "",
];

pub const EXPERIENCE: &[&str] = &[
    "📈 EXPERIENCE",
    "=============",
    "",
    "• 3+ years building web applications",
    "• Frontend: React, Next.js, TypeScript, Tailwind CSS",
    "• Backend: Node.js, Express, Python, PostgreSQL, MongoDB",
    "• DevOps: Docker, GitHub Actions, AWS",
    "",
];

pub const CONTACT: &[&str] = &[
    "📬 CONTACT",
    "==========",
    "",
    "• Email: rahil.dev@email.com",
    "• GitHub: https://github.com/rahil1202",
    "• LinkedIn: https://linkedin.com/in/rahil-vahora",
    "• Portfolio: https://rahil.pro",
    "",
];

/// Project links opened by `project-<n>`, keyed by the full command name
pub const PROJECT_URLS: &[(&str, &str)] = &[
    ("project-1", "https://github.com/rahil1202/portfolio-terminal"),
    ("project-2", "https://github.com/rahil1202/travel-billing"),
    ("project-3", "https://github.com/rahil1202/chat-platform"),
    ("project-4", "https://github.com/rahil1202/task-board"),
    ("project-5", "https://github.com/rahil1202/weather-dashboard"),
];

/// Look up a project link by command name
pub fn project_url(command: &str) -> Option<&'static str> {
    PROJECT_URLS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, url)| *url)
}

//! Quotes, fortunes and the random-site list

pub const QUOTES: &[&str] = &[
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
    "\"Programs must be written for people to read.\" - Harold Abelson",
    "\"Simplicity is prerequisite for reliability.\" - Edsger W. Dijkstra",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Make it work, make it right, make it fast.\" - Kent Beck",
    "\"Any fool can write code that a computer can understand.\" - Martin Fowler",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "\"Deleted code is debugged code.\" - Jeff Sickel",
];

pub const FORTUNES: &[&str] = &[
    "🔮 Your next commit will pass CI on the first try.",
    "🔮 A merge conflict approaches. Stay calm.",
    "🔮 The bug you seek is in the file you did not open.",
    "🔮 You will mass-rename a variable and feel great about it.",
    "🔮 Coffee is in your near future.",
    "🔮 A stranger will star your repository.",
    "🔮 It works on your machine. Today, that is enough.",
    "🔮 Someone will finally read your README.",
];

pub const RANDOM_SITES: &[&str] = &[
    "https://www.zombo.com",
    "https://www.staggeringbeauty.com",
    "https://www.pointerpointer.com",
    "https://www.bouncingdvdlogo.com",
    "https://www.ismycomputeron.com",
    "https://www.fallingfalling.com",
    "https://www.koalastothemax.com",
    "https://www.sanger.dk",
    "https://www.patatap.com",
    "https://www.thatsthefinger.com",
    "https://www.zerowidth.space",
    "https://www.thatstheinter.net",
    "https://www.rrrgggbbb.com",
    "https://www.patience-is-a-virtue.org",
];

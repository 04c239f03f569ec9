//! Home directory contents
//!
//! The static tree mounted at `/home/rahil`.

use alloc::vec;

use super::FsError;
use super::memory::FsNode;

const ABOUT_TXT: &str = "Hi! I'm Rahil, a passionate Full-Stack Developer.

I specialize in building scalable web applications using modern
technologies like React, Node.js, and cloud platforms.

Skills:
- Frontend: React, TypeScript, Tailwind CSS
- Backend: Node.js, Express, Python
- Database: PostgreSQL, MongoDB, Redis
- Cloud: AWS, Docker, Kubernetes
- Tools: Git, CI/CD, Linux

When I'm not coding, you can find me exploring new technologies,
contributing to open-source projects, or brewing the perfect cup of coffee.";

const PROJECT_1_TXT: &str = "Portfolio Terminal
=================

An interactive developer portfolio styled as a realistic terminal UI.

Tech Stack:
- React + TypeScript
- Tailwind CSS
- Terminal-style interactions
- File system simulation

Features:
- Realistic boot sequence
- Command history and autocomplete
- Fun zone with Matrix rain
- Theme switching capabilities

GitHub: https://github.com/rahil-dev/portfolio-terminal";

const PROJECT_2_TXT: &str = "Travel Billing System
====================

Comprehensive travel expense management system for businesses.

Tech Stack:
- React + Node.js
- PostgreSQL
- Express.js
- JWT Authentication

Features:
- Expense tracking and reporting
- Multi-currency support
- PDF receipt generation
- Admin dashboard

GitHub: https://github.com/rahil-dev/travel-billing";

const EMAIL_SH: &str = "#!/bin/bash
# Email contact script

echo \"📧 Email: rahil.dev@email.com\"
echo \"💼 Professional inquiries welcome\"
echo \"🚀 Open to collaboration opportunities\"

# Open default email client
if command -v xdg-open > /dev/null; then
    xdg-open \"mailto:rahil.dev@email.com\"
fi";

const SOCIALS_SH: &str = "#!/bin/bash
# Social media links

echo \"🐙 GitHub: https://github.com/rahil1202\"
echo \"💼 LinkedIn: https://linkedin.com/in/rahil-vahora\"
echo \"🌐 Portfolio: https://rahil.pro\"
echo \"📱 Twitter: @Rahil_Vahora12\"

echo \"\"
echo \"Feel free to connect on any platform!\"
echo \"Always excited to discuss new projects and opportunities.\"";

/// Build the home tree
pub fn build_home_tree() -> Result<FsNode, FsError> {
    let projects = FsNode::dir(
        "projects",
        vec![
            FsNode::file("project-1.txt", PROJECT_1_TXT),
            FsNode::file("project-2.txt", PROJECT_2_TXT),
        ],
    )?;
    let contact = FsNode::dir(
        "contact",
        vec![
            FsNode::file("email.sh", EMAIL_SH),
            FsNode::file("socials.sh", SOCIALS_SH),
        ],
    )?;
    FsNode::dir(
        "rahil",
        vec![FsNode::file("about.txt", ABOUT_TXT), projects, contact],
    )
}

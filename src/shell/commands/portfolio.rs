//! Portfolio Commands
//!
//! about, work, projects, experience, contact

use crate::data::portfolio as content;
use crate::shell::{Command, CommandRegistry, CommandResult, ShellContext, ShellError};

/// A command that prints one fixed portfolio section
pub struct SectionCommand {
    name: &'static str,
    description: &'static str,
    lines: &'static [&'static str],
}

impl Command for SectionCommand {
    fn name(&self) -> &'static str {
        self.name
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::lines(self.lines))
    }
}

/// Static instance
pub static ABOUT_CMD: SectionCommand = SectionCommand {
    name: "about",
    description: "Learn about me",
    lines: content::ABOUT,
};

/// Static instance
pub static WORK_CMD: SectionCommand = SectionCommand {
    name: "work",
    description: "See where I have worked",
    lines: content::WORK,
};

/// Static instance
pub static PROJECTS_CMD: SectionCommand = SectionCommand {
    name: "projects",
    description: "Browse my projects",
    lines: content::PROJECTS,
};

/// Static instance
pub static EXPERIENCE_CMD: SectionCommand = SectionCommand {
    name: "experience",
    description: "Skills and experience",
    lines: content::EXPERIENCE,
};

/// Static instance
pub static CONTACT_CMD: SectionCommand = SectionCommand {
    name: "contact",
    description: "Get contact info",
    lines: content::CONTACT,
};

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(&ABOUT_CMD);
    registry.register(&WORK_CMD);
    registry.register(&PROJECTS_CMD);
    registry.register(&EXPERIENCE_CMD);
    registry.register(&CONTACT_CMD);
    registry
}

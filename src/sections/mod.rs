// Page sections, composed top to bottom in main.rs.

/// Site owner's display name (single source of truth).
pub const OWNER: &str = "Zayn";

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod stack;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use stack::TechStack;

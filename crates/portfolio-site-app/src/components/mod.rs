mod about;
mod experience;
mod footer;
mod header;
mod hero;
mod icon;
mod projects;

pub use about::About;
pub use experience::Experience;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icon::Icon;
pub use projects::Projects;

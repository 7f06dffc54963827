mod about;
mod contact;
mod education;
mod hero;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use hero::Hero;
pub use projects::Projects;

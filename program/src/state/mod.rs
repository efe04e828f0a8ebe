pub mod organizer; // OrganizerAccount

pub use organizer::OrganizerAccount;

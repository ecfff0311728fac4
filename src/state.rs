//! DOM-free view state. Components own one of these and feed it events.

pub mod contact;
pub mod motion;
pub mod nav;
pub mod reveal;
pub mod typing;

pub use contact::{
    ContactError, ContactForm, ContactMessage, Field, MessageSender, SimulatedSender,
    SubmissionStatus,
};
pub use nav::{MobileMenu, ScrollSpy, SectionBounds};
pub use reveal::RevealGate;
pub use typing::{Phase, TypingEffect};

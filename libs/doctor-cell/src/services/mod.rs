pub mod directory;
pub mod messaging;

pub use directory::DoctorDirectory;
pub use messaging::ConversationService;

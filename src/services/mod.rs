pub mod classifier;
pub mod ticket_store;

pub use classifier::{ClassifierService, build_classification_prompt};
pub use ticket_store::TicketStoreService;

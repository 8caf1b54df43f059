pub mod chat;
pub mod header;
pub mod input;
pub mod message;
pub mod sidebar;

pub use chat::ChatView;
pub use header::ChatHeader;
pub use input::ChatInput;
pub use message::MessageBubble;
pub use sidebar::ChatSidebar;

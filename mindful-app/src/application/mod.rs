mod relay_chat;

pub use relay_chat::RelayChat;

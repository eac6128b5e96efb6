pub mod chatbot;
pub mod intake;
pub mod session_manager;
pub mod vehicle;
pub mod visualization;

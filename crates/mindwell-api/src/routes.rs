pub mod assessments;
pub mod chatbot;
pub mod health;
pub mod instruments;

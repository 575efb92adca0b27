pub mod assessment;
pub mod conversation;
pub mod phq9;
pub mod severity;

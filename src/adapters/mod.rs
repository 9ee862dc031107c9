// Adapters layer: concrete implementations of the domain ports for Google and Slack.

pub mod console;
pub mod google_auth;
pub mod sheets;
pub mod slack;

pub use console::ConsoleNotifier;
pub use google_auth::{AccessToken, AssertionSession, ServiceAccountKey};
pub use sheets::SheetsClient;
pub use slack::SlackNotifier;

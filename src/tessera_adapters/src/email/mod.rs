mod log_email_client;
mod postmark_email_client;

pub use log_email_client::LogEmailClient;
pub use postmark_email_client::PostmarkEmailClient;

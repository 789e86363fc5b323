pub mod mailer;
pub mod mock_mailer;
pub mod templates;

pub use mailer::*;
pub use mock_mailer::*;
pub use templates::*;

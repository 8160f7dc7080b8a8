//! API endpoint groups.

mod bots;
mod servers;
mod templates;
mod users;
mod website;

pub use bots::BotsApi;
pub use servers::ServersApi;
pub use templates::TemplatesApi;
pub use users::UsersApi;
pub use website::WebsiteApi;

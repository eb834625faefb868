pub use content::*;
pub use content_kind::*;
pub use message::*;
pub use navigation::*;
pub use session::*;
pub use user::*;

mod content;
mod content_kind;
mod message;
mod navigation;
mod session;
mod user;

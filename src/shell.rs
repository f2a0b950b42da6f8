//! Application shell: header auth, route table, screens, and event dispatch.

mod app;
pub mod auth;
pub mod event;
pub mod route;
pub mod screens;

pub use app::App;
pub use auth::{AuthState, User};
pub use event::Event;
pub use route::{resolve, Route, Screen, ROUTES};
pub use screens::RenderOptions;

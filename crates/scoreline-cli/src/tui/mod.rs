pub use self::{app::App, runner::Tui};

mod app;
mod event_loop;
mod runner;

//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod chapter_list;
mod icons;
mod player;
mod signup_form;

pub use app::*;
pub use audio_manager::*;
pub use chapter_list::*;
pub use icons::*;
pub use player::*;
pub use signup_form::*;

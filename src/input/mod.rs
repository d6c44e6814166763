pub mod event;

pub use event::{KeyCode, KeyEvent, KeyModifiers, PointerEvent};

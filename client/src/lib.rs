//! Browser bindings for the combat engine
//!
//! The frame UI drives one [`session::BattleSession`] per match and reads
//! state snapshots as plain JS objects.

pub mod sandbox;
pub mod session;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

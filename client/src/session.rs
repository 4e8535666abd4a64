//! Interactive battle session exposed to JavaScript
//!
//! The UI submits the human side's action each round; the opponent side is
//! driven by the built-in policy. All randomness comes from the seed the
//! caller provides, so a session can be replayed exactly.

use cca_core::engine::{BattleEnd, CombatEngine};
use cca_core::opponents::choose_action;
use cca_core::roster::find_by_token;
use cca_core::state::{BattleState, Side};
use cca_core::types::BattleAction;
use cca_core::view::BattleView;
use cca_core::XorShiftRng;
use log::debug;
use wasm_bindgen::prelude::*;

/// One battle, exclusively owned by the JS caller that created it
#[wasm_bindgen]
pub struct BattleSession {
    engine: CombatEngine,
    state: BattleState,
    rng: XorShiftRng,
}

#[wasm_bindgen]
impl BattleSession {
    /// Start a battle between two demo-roster collectibles
    #[wasm_bindgen(constructor)]
    pub fn new(player_token: &str, opponent_token: &str, seed: u64) -> Result<BattleSession, String> {
        let player = find_by_token(player_token).map_err(|e| e.to_string())?;
        let opponent = find_by_token(opponent_token).map_err(|e| e.to_string())?;
        player.validate().map_err(|e| e.to_string())?;
        opponent.validate().map_err(|e| e.to_string())?;

        let engine = CombatEngine::new();
        let state = engine.initialize_battle(&player, &opponent);
        debug!("session started: {} vs {}", player.name, opponent.name);

        Ok(BattleSession {
            engine,
            state,
            rng: XorShiftRng::seed_from_u64(seed),
        })
    }

    /// Current battle snapshot for rendering
    #[wasm_bindgen]
    pub fn view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&BattleView::from_state(&self.state)).unwrap_or(JsValue::NULL)
    }

    /// Resolve one round: the submitted action for the player side, a
    /// policy-chosen action for the opponent side
    #[wasm_bindgen]
    pub fn submit_action(&mut self, action_js: JsValue) -> Result<(), String> {
        if self.is_over() {
            return Err("battle already finished".to_string());
        }

        let player_action: BattleAction =
            serde_wasm_bindgen::from_value(action_js).map_err(|e| e.to_string())?;
        let opponent_action =
            choose_action(&self.state.player2, &self.state.player1, &mut self.rng);

        self.state =
            self.engine
                .process_round(&self.state, player_action, opponent_action, &mut self.rng);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn is_over(&self) -> bool {
        self.engine.check_battle_end(&self.state).ended
    }

    /// `"player1"`, `"player2"` or `null` while the battle is still running
    #[wasm_bindgen]
    pub fn winner(&self) -> JsValue {
        let BattleEnd { winner, .. } = self.engine.check_battle_end(&self.state);
        serde_wasm_bindgen::to_value(&winner).unwrap_or(JsValue::NULL)
    }

    /// Convenience accessor the UI polls for health bars
    #[wasm_bindgen]
    pub fn health_of(&self, side_js: JsValue) -> Result<i32, String> {
        let side: Side = serde_wasm_bindgen::from_value(side_js).map_err(|e| e.to_string())?;
        Ok(self.state.character(side).current_health)
    }
}

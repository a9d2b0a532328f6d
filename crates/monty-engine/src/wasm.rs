//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{resolve, simulate, MontyError, Seed, SeededRng, Session, SimulationConfig};

fn parse_seed(seed: &[u8]) -> Result<Seed, JsError> {
    seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))
}

fn engine_error(err: MontyError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run both strategies for `trials` games each
///
/// # Returns
/// JSON serialized SimulationReport
#[wasm_bindgen]
pub fn simulate_win_rates(trials: u32, seed: &[u8]) -> Result<JsValue, JsError> {
    let config = SimulationConfig::standard(parse_seed(seed)?).with_trials(trials as u64);
    let report = simulate(&config).map_err(engine_error)?;
    to_js(&report)
}

/// Resolve one game; returns true on a win
#[wasm_bindgen]
pub fn resolve_trial(initial_choice: usize, switch: bool, seed: &[u8]) -> Result<bool, JsError> {
    let mut rng = SeededRng::new(&parse_seed(seed)?, 0);
    let outcome = resolve(initial_choice, switch, &mut rng).map_err(engine_error)?;
    Ok(outcome.is_win())
}

/// Player-mode game for one browser tab
///
/// Every method returns the serialized SessionView.
#[wasm_bindgen]
pub struct GameSession {
    inner: Session,
}

#[wasm_bindgen]
impl GameSession {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &[u8]) -> Result<GameSession, JsError> {
        Ok(GameSession {
            inner: Session::new(&parse_seed(seed)?),
        })
    }

    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.view())
    }

    pub fn choose_door(&mut self, index: usize) -> Result<JsValue, JsError> {
        let view = self.inner.choose_door(index).map_err(engine_error)?;
        to_js(&view)
    }

    pub fn acknowledge_reveal(&mut self) -> Result<JsValue, JsError> {
        let view = self.inner.acknowledge_reveal().map_err(engine_error)?;
        to_js(&view)
    }

    pub fn decide_switch(&mut self, switch: bool) -> Result<JsValue, JsError> {
        let view = self.inner.decide_switch(switch).map_err(engine_error)?;
        to_js(&view)
    }

    pub fn play_again(&mut self) -> Result<JsValue, JsError> {
        let view = self.inner.play_again().map_err(engine_error)?;
        to_js(&view)
    }

    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.history())
    }

    pub fn reset_history(&mut self) -> Result<JsValue, JsError> {
        let view = self.inner.reset_history();
        to_js(&view)
    }
}

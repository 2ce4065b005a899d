//! WebAssembly bindings for the fightgrid puzzle
//!
//! The JS shell owns loading the assets and drawing the grid; this crate
//! parses the assets, generates puzzles and judges answers.

use fightgrid_core::{GeneratorConfig, GridError};
use wasm_bindgen::prelude::*;

mod game;


pub use game::{Anchor, GameState, SerializableState};

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn no_puzzle() -> JsValue {
    JsValue::from_str("No puzzle yet; call new_puzzle first")
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct FightGridGame {
    state: GameState,
}

#[wasm_bindgen]
impl FightGridGame {
    /// Create a game from the fight-record and directory assets
    #[wasm_bindgen(constructor)]
    pub fn new(fights_json: &str, names_json: &str) -> Result<FightGridGame, JsValue> {
        let state = GameState::new(fights_json, names_json).map_err(to_js)?;
        Ok(FightGridGame { state })
    }

    /// Load the portrait asset: [{"Name": ..., "PicURL": ...}]
    #[wasm_bindgen]
    pub fn load_portraits(&mut self, portraits_json: &str) -> Result<(), JsValue> {
        self.state.set_portraits(portraits_json).map_err(to_js)
    }

    /// Reject grids with a cell nobody can answer
    #[wasm_bindgen]
    pub fn set_strict(&mut self, strict: bool) {
        let config = if strict {
            GeneratorConfig::strict()
        } else {
            GeneratorConfig::standard()
        };
        self.state.set_config(config);
    }

    /// Generate a fresh grid whose first column anchor has at least `min_degree` fights
    #[wasm_bindgen]
    pub fn new_puzzle(&mut self, min_degree: usize) -> Result<(), JsValue> {
        self.state.new_puzzle(min_degree).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn column_ids(&self) -> Vec<String> {
        self.state.column_ids()
    }

    #[wasm_bindgen]
    pub fn row_ids(&self) -> Vec<String> {
        self.state.row_ids()
    }

    /// Display name for a fighter, or the id itself when unnamed
    #[wasm_bindgen]
    pub fn display_name(&self, id: &str) -> String {
        self.state.display_name(id)
    }

    #[wasm_bindgen]
    pub fn portrait_url(&self, id: &str) -> Option<String> {
        self.state.portrait_url(id)
    }

    /// Judge an answer: returns "correct" or "incorrect"
    #[wasm_bindgen]
    pub fn submit(&mut self, row: usize, col: usize, id: &str) -> Result<String, JsValue> {
        let verdict = self.state.submit(row, col, id).ok_or_else(no_puzzle)?.map_err(to_js)?;
        Ok(verdict.to_string())
    }

    /// Check if every cell holds a correct answer
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Get current grid as a JS object
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let state = self.state.to_serializable().ok_or_else(no_puzzle)?;
        serde_wasm_bindgen::to_value(&state).map_err(JsValue::from)
    }

    /// Get current grid as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        self.state
            .to_serializable()
            .and_then(|state| serde_json::to_string(&state).ok())
            .unwrap_or_default()
    }
}

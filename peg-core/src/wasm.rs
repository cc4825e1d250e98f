//! WASM bindings for peg-core
//!
//! Provides a JavaScript-friendly API for the game logic.

use wasm_bindgen::prelude::*;

use crate::{Board, Move};

/// WASM-friendly wrapper around Board
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Board,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a full board. Throws for a zero height.
    #[wasm_bindgen(constructor)]
    pub fn new(height: usize) -> Result<WasmBoard, JsError> {
        let inner = Board::new(height).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmBoard { inner })
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    #[wasm_bindgen(js_name = totalPegs)]
    pub fn total_pegs(&self) -> usize {
        self.inner.total_pegs()
    }

    #[wasm_bindgen(js_name = pegsLeft)]
    pub fn pegs_left(&self) -> usize {
        self.inner.pegs_left()
    }

    /// True if the hole is empty. Unknown pegs report false.
    #[wasm_bindgen(js_name = isRemoved)]
    pub fn is_removed(&self, number: usize) -> bool {
        self.inner.is_removed(number).unwrap_or(false)
    }

    /// Empty the starting hole. Returns true if successful.
    #[wasm_bindgen(js_name = removeInitialPeg)]
    pub fn remove_initial_peg(&mut self, number: usize) -> bool {
        self.inner.remove_initial_peg(number).is_ok()
    }

    /// Jump a peg. Returns true if the jump was legal and applied.
    #[wasm_bindgen(js_name = movePeg)]
    pub fn move_peg(&mut self, from: usize, to: usize) -> bool {
        self.inner.move_peg(from, to).is_ok()
    }

    /// Undo the last move. Returns true if there was one.
    #[wasm_bindgen(js_name = goBack)]
    pub fn go_back(&mut self) -> bool {
        self.inner.go_back().is_ok()
    }

    /// Legal jumps as an array of { to, from: [..] }
    #[wasm_bindgen(js_name = allMoves)]
    pub fn all_moves(&self) -> JsValue {
        let moves: Vec<WasmOpenMove> = self
            .inner
            .all_moves()
            .into_iter()
            .map(|(to, from)| WasmOpenMove { to, from })
            .collect();
        serde_wasm_bindgen::to_value(&moves).unwrap_or(JsValue::NULL)
    }

    /// Played moves, oldest first.
    pub fn history(&self) -> JsValue {
        let moves: Vec<WasmMove> = self.inner.history().iter().map(WasmMove::from).collect();
        serde_wasm_bindgen::to_value(&moves).unwrap_or(JsValue::NULL)
    }

    /// Check if game is over (initial peg removed and no legal jumps)
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Text rendering of the board
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}

/// Serializable open destination for JavaScript
#[derive(serde::Serialize)]
struct WasmOpenMove {
    to: usize,
    from: Vec<usize>,
}

/// Serializable move for JavaScript
#[derive(serde::Serialize)]
struct WasmMove {
    removed: usize,
    from: Option<usize>,
    to: Option<usize>,
}

impl From<&Move> for WasmMove {
    fn from(mov: &Move) -> Self {
        WasmMove {
            removed: mov.removed().number(),
            from: mov.from().map(|peg| peg.number()),
            to: mov.to().map(|peg| peg.number()),
        }
    }
}

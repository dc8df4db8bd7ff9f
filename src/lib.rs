//! Mangala: move engine and alpha-beta search for a two-row sowing game.
//!
//! Two players each own six pits and a store. A move sows the stones of one
//! pit counter-clockwise; where the last stone lands decides whether the
//! mover plays again or captures. The round ends when either row is empty.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search defaults, evaluator weights
//! - [`board`] - Board value type, sides and slots
//! - [`sowing`] - Distributing a pit's stones
//! - [`rules`] - Extra turns and captures, with rule variant switches
//! - [`terminal`] - End-of-round sweep and winner
//! - [`eval`] - Static evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`game`] - Turn execution and round state for hosts
//! - [`playout`] - Random playouts and perft
//! - [`protocol`] - Text protocol host adapter, outside the engine core
//!
//! ## Example
//!
//! ```
//! use mangala::{apply_turn, best_move, new_round, RuleConfig, Side};
//!
//! let rules = RuleConfig::default();
//! let board = new_round();
//!
//! // Side A plays its third pit
//! let turn = apply_turn(&board, 2, Side::A, &rules).unwrap();
//! assert_eq!(turn.next_mover, Side::B);
//!
//! // Let the search answer for side B
//! let reply = best_move(&turn.board, turn.next_mover, 4, &rules);
//! assert!(reply.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod playout;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod sowing;
pub mod terminal;

pub use board::{Board, Side, Slot};
pub use error::{EngineError, InvalidMove};
pub use game::{apply_turn, new_round, Game, Turn};
pub use rules::{Resolution, RuleConfig};
pub use search::{best_move, SearchResult, Searcher};
pub use terminal::{is_terminal, winner, Outcome};

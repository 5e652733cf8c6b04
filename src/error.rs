//! Engine error type.
//!
//! Every variant describes a consistency failure that aborts the frame loop:
//! states and systems propagate these with `?` and `main` reports them.

use bevy_ecs::entity::Entity;
use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// A menu confirmed an index outside its item list.
    InvalidMenuSelection { state: &'static str, selection: usize },
    /// Disposal of an entity the store does not hold.
    UntrackedEntity(Entity),
    /// An entity description or metadata file could not be read or parsed.
    AssetLoad { path: String, reason: String },
    /// A sprite refers to a sheet or frame that was never loaded.
    MissingSprite { sheet: String, index: usize },
    /// Push/Switch/Replace carried no states.
    EmptyTransition(&'static str),
    /// A one-shot system failed to run.
    System(String),
    /// Malformed configuration value.
    Config(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidMenuSelection { state, selection } => {
                write!(f, "{}: unknown menu selection {}", state, selection)
            }
            EngineError::UntrackedEntity(entity) => {
                write!(f, "cannot dispose untracked entity {:?}", entity)
            }
            EngineError::AssetLoad { path, reason } => {
                write!(f, "failed to load '{}': {}", path, reason)
            }
            EngineError::MissingSprite { sheet, index } => {
                write!(f, "sprite {} not found in sheet '{}'", index, sheet)
            }
            EngineError::EmptyTransition(kind) => {
                write!(f, "{} transition without any state", kind)
            }
            EngineError::System(msg) => write!(f, "system failed: {}", msg),
            EngineError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

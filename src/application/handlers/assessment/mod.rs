//! Assessment handlers.

mod commit_vision_result;

pub use commit_vision_result::{
    CommitVisionResultCommand, CommitVisionResultHandler, CommitVisionResultResult,
};

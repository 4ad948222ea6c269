//! Core engine types: actions, configuration, errors, notices, RNG.
//!
//! These are the building blocks shared by the rules engine and its
//! callers. None of them know about combat.

pub mod action;
pub mod config;
pub mod error;
pub mod notice;
pub mod rng;

pub use action::Action;
pub use config::{RulesConfig, MAX_NOTICE_DURATION_MS};
pub use error::GameError;
pub use notice::{Notice, NoticeBoard, NoticeTicket, NoticeTone};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};

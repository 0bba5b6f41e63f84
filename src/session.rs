#![cfg(feature = "std")]

//! Session-keyed round storage for deployments serving several players.
//!
//! Each session key owns at most one round; the store serializes access so
//! concurrent guesses against the same round cannot interleave. The engine
//! itself stays free of locks and I/O.

use std::collections::HashMap;
use std::string::String;
use std::sync::{Mutex, PoisonError};

use rand::Rng;

use crate::common::GuessResult;
use crate::config::Difficulty;
use crate::engine::GameEngine;
use crate::letters::parse_guess;
use crate::round::Round;
use crate::view::RoundView;
use crate::words::WordList;

pub struct SessionStore {
    engine: GameEngine,
    words: WordList,
    rounds: Mutex<HashMap<String, Round>>,
}

impl SessionStore {
    pub fn new(engine: GameEngine, words: WordList) -> Self {
        Self {
            engine,
            words,
            rounds: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Round>> {
        self.rounds.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a round for `session`, replacing any previous one.
    pub fn start<R: Rng>(
        &self,
        session: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> anyhow::Result<RoundView> {
        let round = self
            .engine
            .start(difficulty, &self.words, rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        log::info!(
            "session {}: new {} round, {} letters",
            session,
            difficulty,
            round.word().chars().count()
        );
        let view = RoundView::from(&round);
        self.lock().insert(String::from(session), round);
        Ok(view)
    }

    /// Submit raw guess input against the session's round.
    pub fn guess(&self, session: &str, input: &str) -> anyhow::Result<(GuessResult, RoundView)> {
        let raw = parse_guess(input).map_err(|e| anyhow::anyhow!(e))?;
        let mut rounds = self.lock();
        let round = rounds
            .get_mut(session)
            .ok_or_else(|| anyhow::anyhow!("no active round for session {}", session))?;
        let result = round.guess(raw).map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("session {}: guess {:?} -> {:?}", session, raw, result);
        Ok((result, RoundView::from(&*round)))
    }

    /// Current view of the session's round, if one exists.
    pub fn view(&self, session: &str) -> Option<RoundView> {
        self.lock().get(session).map(RoundView::from)
    }

    /// Drop the session's round. Returns `true` when one existed.
    pub fn end(&self, session: &str) -> bool {
        self.lock().remove(session).is_some()
    }
}

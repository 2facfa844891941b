// ── Store runtime ──
//
// Owns the state tree and is its only writer. Actions are reduced one at a
// time: immediate `Send` effects are queued and drained in the same turn,
// async tasks are spawned on a `JoinSet` and their result actions are fed
// back by `next()`.

use std::collections::VecDeque;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::effect::Effect;
use crate::environment::Environment;
use crate::reducer::Reducer;

pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    env: Environment,
    tasks: JoinSet<Option<R::Action>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State, reducer: R, env: Environment) -> Self {
        Self {
            state,
            reducer,
            env,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of effect tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Reduce `action` and everything it sends synchronously.
    ///
    /// Must be called inside a tokio runtime: task effects are spawned
    /// immediately.
    pub fn send(&mut self, action: R::Action) {
        let mut queue = VecDeque::from([action]);
        let mut leaves = Vec::new();

        while let Some(action) = queue.pop_front() {
            self.reducer
                .reduce(&mut self.state, action)
                .into_leaves(&mut leaves);

            for effect in leaves.drain(..) {
                match effect {
                    Effect::Send(next) => queue.push_back(next),
                    Effect::Task(task) => {
                        debug!(task = task.name(), "starting effect");
                        self.tasks.spawn(task.start(self.env.clone()));
                    }
                    Effect::None | Effect::Merge(_) => {}
                }
            }
        }
    }

    /// Wait for one running task and reduce its result.
    ///
    /// Returns `false` once nothing is in flight.
    pub async fn next(&mut self) -> bool {
        let Some(joined) = self.tasks.join_next().await else {
            return false;
        };
        match joined {
            Ok(Some(action)) => self.send(action),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "effect task did not complete"),
        }
        true
    }

    /// Drive tasks until none remain, including any they start.
    pub async fn settle(&mut self) {
        while self.next().await {}
    }
}

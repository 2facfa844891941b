// ── Effects ──
//
// Reducers never perform I/O. They return an `Effect` describing what
// should happen next; the `Store` executes it against an `Environment`
// and feeds any resulting action back through the reducer tree.

use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::environment::Environment;

type TaskFn<A> = Box<dyn FnOnce(Environment) -> BoxFuture<'static, Option<A>> + Send>;

/// A named asynchronous operation that resolves to at most one action.
pub struct Task<A> {
    name: &'static str,
    run: TaskFn<A>,
}

impl<A: Send + 'static> Task<A> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Start the operation.
    pub(crate) fn start(self, env: Environment) -> BoxFuture<'static, Option<A>> {
        (self.run)(env)
    }

    fn map<B: Send + 'static>(self, f: fn(A) -> B) -> Task<B> {
        let run = self.run;
        Task {
            name: self.name,
            run: Box::new(move |env| run(env).map(move |action| action.map(f)).boxed()),
        }
    }
}

/// What a reducer wants to happen after a state transition.
pub enum Effect<A> {
    /// Nothing further.
    None,
    /// Feed this action back immediately, in the same turn.
    Send(A),
    /// Run an async operation; its result (if any) arrives later.
    Task(Task<A>),
    /// Several effects, executed in order.
    Merge(Vec<Effect<A>>),
}

impl<A: Send + 'static> Effect<A> {
    pub fn none() -> Self {
        Self::None
    }

    pub fn send(action: A) -> Self {
        Self::Send(action)
    }

    /// An async operation whose output is delivered as the next action.
    pub fn run<F, Fut>(name: &'static str, op: F) -> Self
    where
        F: FnOnce(Environment) -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::Task(Task {
            name,
            run: Box::new(move |env| op(env).map(Some).boxed()),
        })
    }

    /// An async operation with no result action.
    pub fn fire_and_forget<F, Fut>(name: &'static str, op: F) -> Self
    where
        F: FnOnce(Environment) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::Task(Task {
            name,
            run: Box::new(move |env| op(env).map(|()| None).boxed()),
        })
    }

    /// Combine effects, dropping the empty ones.
    pub fn merge(effects: impl IntoIterator<Item = Self>) -> Self {
        let mut effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        match effects.len() {
            0 => Self::None,
            1 => effects.pop().unwrap_or(Self::None),
            _ => Self::Merge(effects),
        }
    }

    /// Lift a child effect into the parent's action space.
    pub fn map<B: Send + 'static>(self, f: fn(A) -> B) -> Effect<B> {
        match self {
            Self::None => Effect::None,
            Self::Send(action) => Effect::Send(f(action)),
            Self::Task(task) => Effect::Task(task.map(f)),
            Self::Merge(effects) => Effect::Merge(effects.into_iter().map(|e| e.map(f)).collect()),
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            Self::Merge(effects) => effects.iter().all(Self::is_none),
            _ => false,
        }
    }

    /// Actions this effect feeds back immediately, in order.
    pub fn actions(&self) -> Vec<&A> {
        let mut out = Vec::new();
        self.collect(&mut out, &mut Vec::new());
        out
    }

    /// Names of the async operations this effect would start, in order.
    pub fn task_names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect(&mut Vec::new(), &mut out);
        out
    }

    /// Flatten into the ordered list of leaf effects.
    pub(crate) fn into_leaves(self, out: &mut Vec<Self>) {
        match self {
            Self::None => {}
            Self::Merge(effects) => {
                for effect in effects {
                    effect.into_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    fn collect<'a>(&'a self, actions: &mut Vec<&'a A>, names: &mut Vec<&'static str>) {
        match self {
            Self::None => {}
            Self::Send(action) => actions.push(action),
            Self::Task(task) => names.push(task.name),
            Self::Merge(effects) => {
                for effect in effects {
                    effect.collect(actions, names);
                }
            }
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Send(action) => f.debug_tuple("Send").field(action).finish(),
            Self::Task(task) => f.debug_tuple("Task").field(&task.name).finish(),
            Self::Merge(effects) => f.debug_tuple("Merge").field(effects).finish(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Child {
        Ping,
        Pong(u8),
    }

    #[derive(Debug, PartialEq)]
    enum Parent {
        Child(Child),
    }

    #[test]
    fn merge_drops_empty_effects() {
        let effect: Effect<Child> = Effect::merge([Effect::none(), Effect::none()]);
        assert!(matches!(effect, Effect::None));

        let effect = Effect::merge([Effect::none(), Effect::send(Child::Ping)]);
        assert!(matches!(effect, Effect::Send(Child::Ping)));
    }

    #[test]
    fn map_lifts_sent_actions_and_tasks() {
        let effect = Effect::merge([
            Effect::send(Child::Ping),
            Effect::run("pong", |_env| async { Child::Pong(7) }),
        ])
        .map(Parent::Child);

        assert_eq!(effect.actions(), vec![&Parent::Child(Child::Ping)]);
        assert_eq!(effect.task_names(), vec!["pong"]);
        assert!(!effect.is_none());
    }

    #[tokio::test]
    async fn mapped_task_resolves_to_parent_action() {
        let effect = Effect::run("pong", |_env| async { Child::Pong(7) }).map(Parent::Child);
        let Effect::Task(task) = effect else {
            panic!("expected a task");
        };
        let action = task.start(Environment::in_memory()).await;
        assert_eq!(action, Some(Parent::Child(Child::Pong(7))));
    }

    #[tokio::test]
    async fn fire_and_forget_resolves_to_nothing() {
        let effect: Effect<Child> = Effect::fire_and_forget("noop", |_env| async {});
        let Effect::Task(task) = effect else {
            panic!("expected a task");
        };
        assert_eq!(task.start(Environment::in_memory()).await, None);
    }

    #[test]
    fn leaves_preserve_order() {
        let effect = Effect::Merge(vec![
            Effect::send(Child::Ping),
            Effect::Merge(vec![Effect::None, Effect::send(Child::Pong(1))]),
        ]);
        let mut leaves = Vec::new();
        effect.into_leaves(&mut leaves);
        assert_eq!(leaves.len(), 2);
        assert!(matches!(leaves[1], Effect::Send(Child::Pong(1))));
    }
}

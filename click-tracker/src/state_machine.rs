use std::fmt::Debug;

/// This trait provides the methods that a front-end needs to drive an object
/// as a state machine.
///
/// A state machine never performs I/O itself. Instead, [StateMachine::apply]
/// returns the [StateMachine::Request] (if any) that the runtime should issue
/// next. When that request settles, the runtime feeds its outcome back in as
/// another [StateMachine::Transition]. All mutation of the state therefore
/// happens inside `apply`, on whatever event loop owns the state.
pub trait StateMachine: Sized + 'static + Clone + Debug {
    /// Every possible change to the state. It is usually useful, though not
    /// required, that this be an `enum` type.
    type Transition: Debug;

    /// Work the runtime must perform on behalf of the state machine.
    type Request: Clone + Debug + PartialEq;

    /// Update the state machine according to the given transition. Returns the
    /// follow-up request, if the transition calls for one.
    fn apply(&mut self, transition: Self::Transition) -> Option<Self::Request>;
}

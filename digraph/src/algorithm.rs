//! Traversal and search algorithms over a [Graph](crate::Graph).
//!
//! Every algorithm writes its bookkeeping (marks, costs and back
//! references) into the nodes it touches. Callers which run more than
//! one traversal over the same graph should call
//! [Graph::clear_marks](crate::Graph::clear_marks) and
//! [Graph::reset_search_state](crate::Graph::reset_search_state) in between.

pub mod basic;
pub mod ucs;

/// Trait used to implement queues of nodes waiting to be explored.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

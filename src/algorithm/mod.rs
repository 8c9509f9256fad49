//! Core wave function collapse machinery

/// Dense bitset backing candidate sets and compatibility buckets
pub mod bitset;
/// Weighted random collapse of a superposed cell
pub mod collapse;
/// Breadth-first constraint propagation after a collapse
pub mod propagation;
/// Entropy-ordered priority queue with arbitrary-key updates
pub mod queue;
/// Solver orchestration and the run loop
pub mod solver;
/// Superposition grid state and result materialization
pub mod wave;

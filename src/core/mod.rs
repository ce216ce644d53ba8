pub mod fibonacci;

pub use fibonacci::{
    fibonacci_iter, fibonacci_iterative, fibonacci_recursive, fibonacci_sequence, terms,
    FibonacciIter, Method, MAX_EXACT_POSITION, SLOW_RECURSION_POSITION,
};

// Constants for the evaluator

/// Body executions allowed per `enquanto`/`para` node before it is interrupted
pub const MAX_LOOP_ITERATIONS: usize = 1000;

/// Deepest statement/expression nesting the evaluator descends into
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Largest array an `[size]` literal may allocate
pub const MAX_ARRAY_SIZE: i64 = 1_000_000;

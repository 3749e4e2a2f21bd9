pub use arith::ArithmeticOperator;

pub mod arith;

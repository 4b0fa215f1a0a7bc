// Modules
pub mod aggregate;
pub mod assign;
pub mod data;
pub mod evaluate;
pub mod io;
pub mod prelude;
pub mod synth;

#[cfg(test)]
#[macro_export]
macro_rules! assert_float_eq {
    ($lhs: expr, $rhs: expr) => {
        let (a, b): (f64, f64) = ($lhs, $rhs);
        assert!((a - b).abs() < f64::EPSILON)
    };
}

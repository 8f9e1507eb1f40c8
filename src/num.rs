//! Utilities related to numbers.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use rayon::prelude::*;
use std::fmt;

/// Number of elements above which broadcast evaluation is done in parallel.
const PARALLEL_THRESHOLD: usize = 4096;

/// Floating point marker trait for easier control over trait bounds.
pub trait BFloat: Sync + Send + num::Float + num::cast::FromPrimitive + fmt::Debug {}

impl BFloat for f32 {}
impl BFloat for f64 {}

/// Evaluates `evaluate` in double precision on a value of any `BFloat` type.
pub fn evaluate_as_f64<F, E>(value: F, evaluate: E) -> F
where
    F: BFloat,
    E: FnOnce(f64) -> f64,
{
    value
        .to_f64()
        .map(evaluate)
        .and_then(F::from_f64)
        .unwrap_or_else(F::nan)
}

/// Values that a scalar function can be applied to element by element.
///
/// Scalars are treated as single-element sequences, so a function written
/// once in terms of `broadcast` accepts a number, a slice, a `Vec`, a
/// fixed-size array or an `ndarray` array alike, and returns a value with
/// the same shape as its input.
pub trait Broadcast {
    /// Type of the individual elements.
    type Elem: BFloat;
    /// Result of mapping every element, with the shape of `Self`.
    type Output;

    /// Applies `map` to every element.
    fn broadcast<M>(&self, map: M) -> Self::Output
    where
        M: Fn(Self::Elem) -> Self::Elem + Sync + Send;

    /// Returns the first element satisfying `predicate`, if any.
    fn find_element<P>(&self, predicate: P) -> Option<Self::Elem>
    where
        P: Fn(Self::Elem) -> bool;
}

macro_rules! impl_scalar_broadcast {
    ($($float:ty),+) => {
        $(
            impl Broadcast for $float {
                type Elem = $float;
                type Output = $float;

                fn broadcast<M>(&self, map: M) -> Self::Output
                where
                    M: Fn(Self::Elem) -> Self::Elem + Sync + Send,
                {
                    map(*self)
                }

                fn find_element<P>(&self, predicate: P) -> Option<Self::Elem>
                where
                    P: Fn(Self::Elem) -> bool,
                {
                    Some(*self).filter(|&value| predicate(value))
                }
            }
        )+
    };
}

impl_scalar_broadcast!(f32, f64);

impl<F: BFloat> Broadcast for [F] {
    type Elem = F;
    type Output = Vec<F>;

    fn broadcast<M>(&self, map: M) -> Self::Output
    where
        M: Fn(F) -> F + Sync + Send,
    {
        if self.len() >= PARALLEL_THRESHOLD {
            self.par_iter().map(|&value| map(value)).collect()
        } else {
            self.iter().map(|&value| map(value)).collect()
        }
    }

    fn find_element<P>(&self, predicate: P) -> Option<F>
    where
        P: Fn(F) -> bool,
    {
        self.iter().copied().find(|&value| predicate(value))
    }
}

impl<F: BFloat> Broadcast for Vec<F> {
    type Elem = F;
    type Output = Vec<F>;

    fn broadcast<M>(&self, map: M) -> Self::Output
    where
        M: Fn(F) -> F + Sync + Send,
    {
        self.as_slice().broadcast(map)
    }

    fn find_element<P>(&self, predicate: P) -> Option<F>
    where
        P: Fn(F) -> bool,
    {
        self.as_slice().find_element(predicate)
    }
}

impl<F: BFloat, const N: usize> Broadcast for [F; N] {
    type Elem = F;
    type Output = [F; N];

    fn broadcast<M>(&self, map: M) -> Self::Output
    where
        M: Fn(F) -> F + Sync + Send,
    {
        let values = *self;
        values.map(map)
    }

    fn find_element<P>(&self, predicate: P) -> Option<F>
    where
        P: Fn(F) -> bool,
    {
        self.as_slice().find_element(predicate)
    }
}

impl<F, S, D> Broadcast for ArrayBase<S, D>
where
    F: BFloat,
    S: Data<Elem = F>,
    D: Dimension,
{
    type Elem = F;
    type Output = Array<F, D>;

    fn broadcast<M>(&self, map: M) -> Self::Output
    where
        M: Fn(F) -> F + Sync + Send,
    {
        if self.len() >= PARALLEL_THRESHOLD {
            Zip::from(self).par_map_collect(|&value| map(value))
        } else {
            self.mapv(map)
        }
    }

    fn find_element<P>(&self, predicate: P) -> Option<F>
    where
        P: Fn(F) -> bool,
    {
        self.iter().copied().find(|&value| predicate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array1};

    fn double<B: Broadcast + ?Sized>(values: &B) -> B::Output {
        values.broadcast(|value| value + value)
    }

    #[test]
    fn scalars_broadcast_as_single_elements() {
        assert_eq!(double(&1.5_f64), 3.0);
        assert_eq!(double(&-2.0_f32), -4.0);
        assert_eq!(3.0_f64.find_element(|value| value > 2.0), Some(3.0));
        assert_eq!(3.0_f64.find_element(|value| value > 4.0), None);
    }

    #[test]
    fn sequences_keep_their_shape() {
        assert_eq!(double(&[1.0_f64, 2.0, 3.0]), [2.0, 4.0, 6.0]);
        assert_eq!(double(&vec![0.5_f32]), vec![1.0_f32]);
        assert_eq!(double([1.0_f64, -1.0].as_slice()), vec![2.0, -2.0]);
        assert_eq!(
            double(&arr2(&[[1.0_f64, 2.0], [3.0, 4.0]])),
            arr2(&[[2.0, 4.0], [6.0, 8.0]])
        );
    }

    #[test]
    fn parallel_evaluation_matches_serial_evaluation() {
        let values = Array1::linspace(0.0_f64, 1.0, 3 * PARALLEL_THRESHOLD);
        let doubled = double(&values);
        assert_eq!(doubled.len(), values.len());
        assert!(doubled
            .iter()
            .zip(values.iter())
            .all(|(&doubled, &value)| doubled == 2.0 * value));

        let as_vec = values.to_vec();
        assert_eq!(double(&as_vec), doubled.to_vec());
    }

    #[test]
    fn single_precision_values_are_evaluated_in_double_precision() {
        assert_eq!(evaluate_as_f64(2.0_f32, |value| value * 1e-20), 2e-20_f32);
        assert!(evaluate_as_f64(f32::NAN, |value| value).is_nan());
    }

    #[test]
    fn find_element_returns_first_match() {
        let values = arr1(&[1.0_f64, -2.0, -3.0]);
        assert_eq!(values.find_element(|value| value < 0.0), Some(-2.0));
        assert_eq!(vec![1.0_f64, 2.0].find_element(f64::is_nan), None);
    }
}

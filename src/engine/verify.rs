//! Numerical acceptance test for candidate antiderivatives

use super::composer::Composer;
use crate::TOLERANCE;

/// Central-difference derivative of the composer's current program.
///
/// The step `h = cbrt(machine epsilon)` minimizes the combined truncation
/// and round-off error of the symmetric difference.
pub fn derivative(composer: &mut Composer, x: f64) -> f64 {
    let dx = f64::EPSILON.cbrt();
    (composer.eval(x + dx) - composer.eval(x - dx)) / (2.0 * dx)
}

/// Squared-error loss of the candidate's derivative against the samples.
pub fn loss(composer: &mut Composer, samples: &[(f64, f64)]) -> f64 {
    let mut loss = 0.0;
    for &(x, y) in samples {
        let delta = derivative(composer, x) - y;
        loss += delta * delta;
    }
    loss
}

/// Whether the current candidate passes as an antiderivative.
///
/// NaN or infinite losses fail the `<` comparison and reject the
/// candidate, so poisoned evaluations need no special casing.
pub fn is_antiderivative(composer: &mut Composer, samples: &[(f64, f64)]) -> bool {
    loss(composer, samples) < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn composer() -> Composer {
        Composer::new(NonZeroU32::new(1).unwrap())
    }

    #[test]
    fn test_derivative_of_square() {
        let mut c = composer();
        c.load("x2").unwrap();
        assert!((derivative(&mut c, 3.0) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_exact_antiderivative_is_accepted() {
        // d/dx (x^2 / 2) = x
        let samples: Vec<(f64, f64)> = [0.2, 0.5, 0.9, 1.5, 2.0]
            .iter()
            .map(|&x| (x, x))
            .collect();
        let mut c = composer();
        c.load("x2H").unwrap();
        assert!(is_antiderivative(&mut c, &samples));
    }

    #[test]
    fn test_wrong_candidate_is_rejected() {
        let samples = [(0.5, 0.5), (1.5, 1.5)];
        let mut c = composer();
        c.load("xS").unwrap(); // d/dx sin(x) = cos(x) != x
        assert!(!is_antiderivative(&mut c, &samples));
    }

    #[test]
    fn test_nan_loss_rejects() {
        let samples = [(-1.0, 1.0)];
        let mut c = composer();
        c.load("xR").unwrap(); // sqrt is NaN left of zero
        assert!(loss(&mut c, &samples).is_nan());
        assert!(!is_antiderivative(&mut c, &samples));
    }
}

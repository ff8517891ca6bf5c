//! Cubic reflectance model mapping four pigment weights to RGB.
//!
//! The surface is a fixed regression over the monomials of degree three in
//! `(c0, c1, c2, c3)`. Latent residuals are computed against this exact
//! polynomial, so the coefficients and the summation order are frozen.
#![allow(clippy::excessive_precision)]

/// Number of monomial terms in the model.
pub const TERMS: usize = 20;

/// RGB coefficient for each monomial, in evaluation order.
pub const COEFFICIENTS: [[f64; 3]; TERMS] = [
    [0.07717053, 0.02826978, 0.24832992],  // c0^3
    [0.95912302, 0.80256528, 0.03561839],  // c1^3
    [0.74683774, 0.04868586, 0.00000000],  // c2^3
    [0.99518138, 0.99978149, 0.99704802],  // c3^3
    [0.04819146, 0.83363781, 0.32515377],  // c0^2 c1
    [-0.68146950, 1.46107803, 1.06980936], // c0 c1^2
    [0.27058419, -0.15324870, 1.98735057], // c0^2 c2
    [0.80478189, 0.67093710, 0.18424500],  // c0 c2^2
    [-0.35031003, 1.37855826, 3.68865000], // c0^2 c3
    [1.05128046, 1.97815239, 2.82989073],  // c0 c3^2
    [3.21607125, 0.81270228, 1.03384539],  // c1^2 c2
    [2.78893374, 0.41565549, -0.04487295], // c1 c2^2
    [3.02162577, 2.55374103, 0.32766114],  // c1^2 c3
    [2.95124691, 2.81201112, 1.17578442],  // c1 c3^2
    [2.82677043, 0.79933038, 1.81715262],  // c2^2 c3
    [2.99691099, 1.22593053, 1.80653661],  // c2 c3^2
    [1.87394106, 2.05027182, -0.29835996], // c0 c1 c2
    [2.56609566, 7.03428198, 0.62575374],  // c0 c1 c3
    [4.08329484, -1.40408358, 2.14995522], // c0 c2 c3
    [6.00078678, 2.55552042, 1.90739502],  // c1 c2 c3
];

/// Monomial values for the given weights, matching [`COEFFICIENTS`].
#[inline]
fn monomials(c0: f64, c1: f64, c2: f64, c3: f64) -> [f64; TERMS] {
    let c00 = c0 * c0;
    let c11 = c1 * c1;
    let c22 = c2 * c2;
    let c33 = c3 * c3;
    let c01 = c0 * c1;
    let c02 = c0 * c2;
    let c12 = c1 * c2;

    [
        c0 * c00,
        c1 * c11,
        c2 * c22,
        c3 * c33,
        c00 * c1,
        c01 * c1,
        c00 * c2,
        c02 * c2,
        c00 * c3,
        c0 * c33,
        c11 * c2,
        c1 * c22,
        c11 * c3,
        c1 * c33,
        c22 * c3,
        c2 * c33,
        c01 * c2,
        c01 * c3,
        c02 * c3,
        c12 * c3,
    ]
}

/// Evaluate the reflectance model. Inputs are not clamped.
#[inline]
pub fn evaluate(c0: f64, c1: f64, c2: f64, c3: f64) -> [f64; 3] {
    let w = monomials(c0, c1, c2, c3);
    let mut rgb = [0.0f64; 3];
    for (wi, coeff) in w.iter().zip(COEFFICIENTS.iter()) {
        rgb[0] += coeff[0] * wi;
        rgb[1] += coeff[1] * wi;
        rgb[2] += coeff[2] * wi;
    }
    rgb
}

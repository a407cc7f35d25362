// src/outils/complexe.rs
//
// Complexes f64 minimaux (FFT, racines du polynôme caractéristique).

use std::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complexe {
    pub re: f64,
    pub im: f64,
}

impl Complexe {
    pub const ZERO: Complexe = Complexe { re: 0.0, im: 0.0 };
    pub const UN: Complexe = Complexe { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// e^{iθ}
    pub fn polaire(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    pub fn module(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl From<f64> for Complexe {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complexe {
    type Output = Complexe;
    fn add(self, b: Complexe) -> Complexe {
        Complexe::new(self.re + b.re, self.im + b.im)
    }
}

impl Sub for Complexe {
    type Output = Complexe;
    fn sub(self, b: Complexe) -> Complexe {
        Complexe::new(self.re - b.re, self.im - b.im)
    }
}

impl Mul for Complexe {
    type Output = Complexe;
    fn mul(self, b: Complexe) -> Complexe {
        Complexe::new(
            self.re * b.re - self.im * b.im,
            self.re * b.im + self.im * b.re,
        )
    }
}

impl Div for Complexe {
    type Output = Complexe;
    fn div(self, b: Complexe) -> Complexe {
        let d = b.re * b.re + b.im * b.im;
        Complexe::new(
            (self.re * b.re + self.im * b.im) / d,
            (self.im * b.re - self.re * b.im) / d,
        )
    }
}

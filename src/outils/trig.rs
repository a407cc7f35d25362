// src/outils/trig.rs
//
// Fonctions trigonométriques d'un angle en radians (f64).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigo {
    pub sin: f64,
    pub cos: f64,
    pub tan: f64,
}

pub fn trigo(x: f64) -> Trigo {
    Trigo {
        sin: x.sin(),
        cos: x.cos(),
        tan: x.tan(),
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// An animal and its color. The library ships a fixed set of these, see [`default_animals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub color: String,
}

impl Animal {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<60} {:>15}", self.name, self.color)
    }
}

/// The nine hard-coded animals, in their canonical order.
pub fn default_animals() -> Vec<Animal> {
    [
        ("Hormiga", "Rojo"),
        ("Lobo", "Gris"),
        ("Elefante", "Gris"),
        ("Pantegra", "Negro"),
        ("Gato", "Negro"),
        ("Iguana", "Verde"),
        ("Sapo", "Verde"),
        ("Camaleon", "Verde"),
        ("Gallina", "Blanco"),
    ]
    .into_iter()
    .map(|(name, color)| Animal::new(name, color))
    .collect()
}

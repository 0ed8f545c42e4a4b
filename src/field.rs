//! Canonical output fields.
//!
//! Every record carries the same fixed set of columns. The enum order is the
//! column order of the dataset artifact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One canonical column of the nutritional dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    NomeProduto,
    Url,
    Categoria,
    Porcao,
    Calorias,
    Carboidratos,
    Proteinas,
    GordurasTotais,
    GordurasSaturadas,
    Fibras,
    Acucares,
    Sodio,
}

impl Field {
    /// All columns in output order.
    pub const COLUMNS: [Field; 12] = [
        Field::NomeProduto,
        Field::Url,
        Field::Categoria,
        Field::Porcao,
        Field::Calorias,
        Field::Carboidratos,
        Field::Proteinas,
        Field::GordurasTotais,
        Field::GordurasSaturadas,
        Field::Fibras,
        Field::Acucares,
        Field::Sodio,
    ];

    /// The eight nutritional fields every record must carry.
    pub const NUTRIENTS: [Field; 8] = [
        Field::Calorias,
        Field::Carboidratos,
        Field::Proteinas,
        Field::GordurasTotais,
        Field::GordurasSaturadas,
        Field::Fibras,
        Field::Acucares,
        Field::Sodio,
    ];

    /// Canonical key, e.g. `GORDURAS_TOTAIS`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::NomeProduto => "NOME_PRODUTO",
            Field::Url => "URL",
            Field::Categoria => "CATEGORIA",
            Field::Porcao => "PORCAO",
            Field::Calorias => "CALORIAS",
            Field::Carboidratos => "CARBOIDRATOS",
            Field::Proteinas => "PROTEINAS",
            Field::GordurasTotais => "GORDURAS_TOTAIS",
            Field::GordurasSaturadas => "GORDURAS_SATURADAS",
            Field::Fibras => "FIBRAS",
            Field::Acucares => "ACUCARES",
            Field::Sodio => "SODIO",
        }
    }

    /// Unit the normalized value is expressed in, if any.
    #[must_use]
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Field::NomeProduto | Field::Url | Field::Categoria => None,
            Field::Calorias => Some("kcal"),
            Field::Sodio => Some("mg"),
            _ => Some("g"),
        }
    }

    /// CSV header label: the key followed by its unit, e.g. `SODIO (mg)`.
    #[must_use]
    pub fn header(self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({unit})", self.key()),
            None => self.key().to_string(),
        }
    }

    /// Position of this field in [`Field::NUTRIENTS`].
    #[must_use]
    pub fn nutrient_index(self) -> Option<usize> {
        Field::NUTRIENTS.iter().position(|f| *f == self)
    }

    #[must_use]
    pub fn is_nutrient(self) -> bool {
        self.nutrient_index().is_some()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

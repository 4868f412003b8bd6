use crate::pudelko::error::PudelkoError;
use crate::pudelko::types::{round_to, Pudelko};
use crate::pudelko::unit::UnitOfMeasure;
use serde::{Deserialize, Serialize};

/// Edges of a box in one unit; missing edges are 0.1 m.
/// Unknown keys are rejected so a misspelled edge never turns into a default.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoxDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(default)]
    pub unit: UnitOfMeasure,
}

/// Serialized form of a box.
///
/// In TOML or JSON a box is written either as a table of edges in a unit
/// (`{ a = 25, b = 40, unit = "cm" }`) or as the text format
/// (`"25 cm × 40 cm × 10 cm"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BoxDefinition {
    Dimensions(BoxDimensions),
    Text(String),
}

impl TryFrom<BoxDefinition> for Pudelko {
    type Error = PudelkoError;

    fn try_from(definition: BoxDefinition) -> Result<Self, Self::Error> {
        match definition {
            BoxDefinition::Dimensions(BoxDimensions { a, b, c, unit }) => {
                let mut builder = Pudelko::builder().unit(unit);
                if let Some(a) = a {
                    builder = builder.a(a);
                }
                if let Some(b) = b {
                    builder = builder.b(b);
                }
                if let Some(c) = c {
                    builder = builder.c(c);
                }
                builder.build()
            }
            BoxDefinition::Text(text) => Pudelko::parse(&text),
        }
    }
}

/// Edges are written in the box's own unit so reading them back is lossless.
impl From<Pudelko> for BoxDefinition {
    fn from(pudelko: Pudelko) -> Self {
        let unit = pudelko.unit();
        let scale = |meters: f64| round_to(meters * unit.per_meter(), unit.decimals() as i32);
        BoxDefinition::Dimensions(BoxDimensions {
            a: Some(scale(pudelko.a())),
            b: Some(scale(pudelko.b())),
            c: Some(scale(pudelko.c())),
            unit,
        })
    }
}

impl Serialize for Pudelko {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BoxDefinition::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pudelko {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let definition = BoxDefinition::deserialize(deserializer)?;
        Pudelko::try_from(definition).map_err(serde::de::Error::custom)
    }
}

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// One of the two tracked buttons. Serializes as the bare strings `"A"` and
/// `"B"`, which is how the backend names them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::A, Button::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
        }
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/clicks`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickBody {
    pub button: Button,
}

/// The last click totals reported by the backend.
///
/// Missing or `null` fields decode as 0, so `{"A": 3}` becomes `A = 3, B = 0`.
/// Keys other than `A` and `B` are ignored.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    #[serde(rename = "A", default, deserialize_with = "null_as_zero")]
    pub a: u64,
    #[serde(rename = "B", default, deserialize_with = "null_as_zero")]
    pub b: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl Counts {
    pub fn new(a: u64, b: u64) -> Self {
        Counts { a, b }
    }

    pub fn get(&self, button: Button) -> u64 {
        match button {
            Button::A => self.a,
            Button::B => self.b,
        }
    }

    /// Decode a `GET /api/counts` response body.
    ///
    /// A JSON value that is neither an object nor `null` has no `A` or `B`
    /// fields, so it reads as zero counts. `null` has no fields to read at
    /// all and is an error.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<serde_json::Value>(body)? {
            serde_json::Value::Null => Err(serde_json::Error::custom(
                "counts response was null",
            )),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Counts::default()),
        }
    }
}

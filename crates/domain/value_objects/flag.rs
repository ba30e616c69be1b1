use serde::{Deserialize, Deserializer};

/// Older clients send `featured` as `0` / `1`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Bool(value) => value,
            Flag::Int(value) => value != 0,
        }
    }
}

/// Accepts a boolean, an integer (non-zero is `true`) or `null`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Flag>::deserialize(deserializer).map(|flag| flag.map(bool::from))
}

/// Presence-aware form of `deserialize_flag`, see `deserialize_present`.
pub fn deserialize_present_flag<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_flag(deserializer).map(Some)
}

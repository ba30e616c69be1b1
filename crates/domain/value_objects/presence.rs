use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent, `null`, or a value into
/// `Option<Option<T>>`. Pair it with `#[serde(default)]` so an absent field
/// stays `None` while an explicit `null` becomes `Some(None)`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

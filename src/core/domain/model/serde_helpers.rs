//! Serde helpers for fields the Proxmox API encodes inconsistently.

/// Load averages arrive as strings (`["0.45","0.31","0.28"]`) from most
/// Proxmox releases and as numbers from some. Both are accepted; the value
/// is always written back as numbers.
pub mod load_average {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<[f64; 3]>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<[f64; 3]>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(entries) = Option::<Vec<Entry>>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if entries.len() != 3 {
            return Err(serde::de::Error::invalid_length(
                entries.len(),
                &"three load average values",
            ));
        }
        let mut out = [0.0; 3];
        for (slot, entry) in out.iter_mut().zip(entries) {
            *slot = match entry {
                Entry::Number(n) => n,
                Entry::Text(s) => s.trim().parse().map_err(serde::de::Error::custom)?,
            };
        }
        Ok(Some(out))
    }
}

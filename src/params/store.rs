use crate::error::Result;
use crate::params::{ParamKey, ParamValue, ParameterSnapshot};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to the current parameters.
///
/// Clones point at the same snapshot, so the controls and the animation driver can
/// each hold one. Every [`set`](ParameterStore::set) replaces exactly one field.
#[derive(Clone, Default, Debug)]
pub struct ParameterStore {
    inner: Arc<RwLock<ParameterSnapshot>>,
}

impl ParameterStore {
    pub fn new(snapshot: ParameterSnapshot) -> Self {
        ParameterStore {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn get(&self) -> ParameterSnapshot {
        self.inner.read().clone()
    }

    /// Applies a raw control value to `key`. On error the snapshot is left as it was.
    pub fn set(&self, key: ParamKey, raw: &str) -> Result<ParamValue> {
        let value = key.parse_value(raw)?;
        debug!(%key, ?value, "parameter changed");
        self.inner.write().assign(key, value.clone());
        Ok(value)
    }

    pub fn set_by_name(&self, name: &str, raw: &str) -> Result<ParamValue> {
        self.set(name.parse()?, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpiralError;
    use crate::types::color::Color;

    #[test]
    fn clones_share_state() {
        let store = ParameterStore::default();
        let glue = store.clone();

        glue.set(ParamKey::Radius, "240").unwrap();
        glue.set(ParamKey::Arms, "4.5").unwrap();
        glue.set(ParamKey::Color1, "tomato").unwrap();

        let snapshot = store.get();
        assert_eq!(snapshot.radius, 240.);
        assert_eq!(snapshot.arms, 5);
        assert_eq!(snapshot.color1, Color::from("tomato"));
    }

    #[test]
    fn rejected_values_leave_snapshot_untouched() {
        let store = ParameterStore::default();
        assert!(store.set(ParamKey::Density, "lots").is_err());
        assert!(store.set(ParamKey::Density, "-inf").is_err());
        assert_eq!(
            store.set_by_name("speed", "1"),
            Err(SpiralError::UnknownParameter(String::from("speed")))
        );
        assert_eq!(store.get(), ParameterSnapshot::default());
    }

    #[test]
    fn out_of_range_numbers_are_accepted() {
        let store = ParameterStore::default();
        store.set_by_name("arms", "-3").unwrap();
        store.set_by_name("noiseAmp", "7").unwrap();

        let snapshot = store.get();
        assert_eq!(snapshot.arms, -3);
        assert_eq!(snapshot.noise_amp, 7.);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let store = ParameterStore::default();
        let before = store.get();
        store.set(ParamKey::Radius, "10").unwrap();
        assert_eq!(before.radius, 180.);
    }
}

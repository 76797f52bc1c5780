//! Layered shallow merge of caller overrides onto the model data templates.
//!
//! Layers are applied in a fixed order: base data, then the transport
//! extension if `transport` is truthy in the overrides, then the river
//! extension if `river` is truthy, then the overrides themselves. Only
//! top-level keys are merged; a nested object in a later layer replaces the
//! earlier one wholesale.

use crate::config::{ModelData, base_model_data, river_model_data, transport_model_data};
use crate::error::{ModelDataError, Result};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

pub const TRANSPORT_FLAG: &str = "transport";
pub const RIVER_FLAG: &str = "river";

/// The three templates a build starts from. Built-in templates are
/// borrowed; replacements passed to `with_*` are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates<'a> {
    pub base: Cow<'a, ModelData>,
    pub transport: Cow<'a, ModelData>,
    pub river: Cow<'a, ModelData>,
}

impl Default for Templates<'static> {
    fn default() -> Self {
        Templates::builtin()
    }
}

impl<'a> Templates<'a> {
    /// The built-in templates, borrowed from their statics.
    pub fn builtin() -> Templates<'static> {
        Templates {
            base: Cow::Borrowed(base_model_data()),
            transport: Cow::Borrowed(transport_model_data()),
            river: Cow::Borrowed(river_model_data()),
        }
    }

    pub fn with_base(mut self, base: ModelData) -> Self {
        self.base = Cow::Owned(base);
        self
    }

    pub fn with_transport(mut self, transport: ModelData) -> Self {
        self.transport = Cow::Owned(transport);
        self
    }

    pub fn with_river(mut self, river: ModelData) -> Self {
        self.river = Cow::Owned(river);
        self
    }

    /// Build the model data for `overrides` on top of these templates.
    ///
    /// Returns a fresh map; neither the templates nor `overrides` are touched,
    /// so repeated builds with different flags never see each other's keys.
    pub fn make_model_data(&self, overrides: &Value) -> Result<ModelData> {
        let overrides = as_object(overrides)?;

        let mut data = self.base.as_ref().clone();
        if flag_set(overrides, TRANSPORT_FLAG) {
            debug!(keys = self.transport.len(), "Applying transport defaults");
            overlay(&mut data, &self.transport);
        }
        if flag_set(overrides, RIVER_FLAG) {
            debug!(keys = self.river.len(), "Applying river defaults");
            overlay(&mut data, &self.river);
        }

        let replaced = overrides.keys().filter(|k| data.contains_key(*k)).count();
        overlay(&mut data, overrides);
        debug!(
            overrides = overrides.len(),
            replaced,
            total = data.len(),
            "Built model data"
        );

        Ok(data)
    }
}

/// Build model data from `overrides` using the built-in templates.
pub fn make_model_data(overrides: &Value) -> Result<ModelData> {
    Templates::builtin().make_model_data(overrides)
}

/// Copy every top-level entry of `layer` into `target`, replacing existing keys.
pub fn overlay(target: &mut ModelData, layer: &ModelData) {
    for (key, value) in layer {
        target.insert(key.clone(), value.clone());
    }
}

/// Truthiness of a flag value: null, false, zero and empty containers are unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Whether `key` is present and truthy in `data`.
pub fn flag_set(data: &ModelData, key: &str) -> bool {
    data.get(key).is_some_and(is_truthy)
}

fn as_object(value: &Value) -> Result<&ModelData> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ModelDataError::InvalidConfiguration {
            found: value_kind(other),
        }),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

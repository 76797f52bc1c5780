//! Typed views over merged model data.
//!
//! The modelling library expects specific key names and value shapes. These
//! views read them out of a [`ModelData`] map and report which key is missing
//! or malformed. Physical ranges are not checked.

use crate::config::ModelData;
use crate::error::{ModelDataError, Result};
use crate::merge::{RIVER_FLAG, TRANSPORT_FLAG, flag_set};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// (layer, row, column), zero based.
pub type CellIndex = (usize, usize, usize);

// Stress period timing: perlen, nstp, tsmult
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, u32, f64)")]
pub struct PeriodTiming {
    pub perlen: f64,
    pub nstp: u32,
    pub tsmult: f64,
}

impl From<(f64, u32, f64)> for PeriodTiming {
    fn from((perlen, nstp, tsmult): (f64, u32, f64)) -> Self {
        PeriodTiming {
            perlen,
            nstp,
            tsmult,
        }
    }
}

// Either one value for every layer or one per layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LayerValues {
    Uniform(f64),
    PerLayer(Vec<f64>),
}

impl LayerValues {
    pub fn for_layer(&self, layer: usize) -> Option<f64> {
        match self {
            LayerValues::Uniform(value) => Some(*value),
            LayerValues::PerLayer(values) => values.get(layer).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Well {
    pub q: Vec<f64>,
    pub coords: CellIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(CellIndex, f64)")]
pub struct ConstantHead {
    pub cell: CellIndex,
    pub head: f64,
}

impl From<(CellIndex, f64)> for ConstantHead {
    fn from((cell, head): (CellIndex, f64)) -> Self {
        ConstantHead { cell, head }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(CellIndex, f64)")]
pub struct ConstantConcentration {
    pub cell: CellIndex,
    pub concentration: f64,
}

impl From<(CellIndex, f64)> for ConstantConcentration {
    fn from((cell, concentration): (CellIndex, f64)) -> Self {
        ConstantConcentration {
            cell,
            concentration,
        }
    }
}

/// Constant head cell that also fixes the concentration of inflowing water.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(CellIndex, f64, f64)")]
pub struct TransportHead {
    pub cell: CellIndex,
    pub head: f64,
    pub concentration: f64,
}

impl From<(CellIndex, f64, f64)> for TransportHead {
    fn from((cell, head, concentration): (CellIndex, f64, f64)) -> Self {
        TransportHead {
            cell,
            head,
            concentration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdvectionScheme {
    Upstream,
    Central,
    Tvd,
}

/// Flow model inputs: discretisation, timing, conductivity, storage and
/// boundary conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowModelData {
    pub wells: BTreeMap<String, Well>,
    pub times: PeriodTiming,
    pub time_units: String,
    pub length_units: String,
    pub repeat_times: usize,
    pub nrow: usize,
    pub ncol: usize,
    pub nlay: usize,
    pub delr: f64,
    pub delc: f64,
    pub top: f64,
    pub botm: LayerValues,
    pub k: LayerValues,
    pub k33: LayerValues,
    pub sy: f64,
    pub ss: f64,
    pub initial_head: f64,
    pub chd: Vec<ConstantHead>,
    pub cnc: Vec<ConstantConcentration>,
}

impl FlowModelData {
    pub fn from_data(data: &ModelData) -> Result<Self> {
        Ok(FlowModelData {
            wells: required(data, "wells")?,
            times: required(data, "times")?,
            time_units: required(data, "time_units")?,
            length_units: required(data, "length_units")?,
            repeat_times: required(data, "repeat_times")?,
            nrow: required(data, "nrow")?,
            ncol: required(data, "ncol")?,
            nlay: required(data, "nlay")?,
            delr: required(data, "delr")?,
            delc: required(data, "delc")?,
            top: required(data, "top")?,
            botm: required(data, "botm")?,
            k: required(data, "k")?,
            k33: required(data, "k33")?,
            sy: required(data, "sy")?,
            ss: required(data, "ss")?,
            initial_head: required(data, "initial_head")?,
            chd: required(data, "chd")?,
            cnc: optional(data, "cnc")?.unwrap_or_default(),
        })
    }

    /// Number of stress periods: one steady period plus `repeat_times`
    /// transient ones. `None` if that does not fit in a `usize`.
    pub fn nper(&self) -> Option<usize> {
        self.repeat_times.checked_add(1)
    }

    /// Timing for every stress period.
    pub fn period_data(&self) -> Option<Vec<PeriodTiming>> {
        self.nper().map(|nper| vec![self.times; nper])
    }

    pub fn is_steady_state(&self, period: usize) -> bool {
        period == 0
    }

    pub fn transient_periods(&self) -> RangeInclusive<usize> {
        1..=self.repeat_times
    }

    /// `None` if the grid size overflows a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.nlay.checked_mul(self.nrow)?.checked_mul(self.ncol)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportModelData {
    pub initial_concentration: f64,
    pub scheme: AdvectionScheme,
    pub longitudinal_dispersivity: f64,
    pub dispersivity_ratio: f64,
    pub porosity: f64,
    pub obs: Option<Value>,
    pub chd_transport: Vec<TransportHead>,
}

impl TransportModelData {
    pub fn from_data(data: &ModelData) -> Result<Self> {
        Ok(TransportModelData {
            initial_concentration: required(data, "initial_concentration")?,
            scheme: required(data, "scheme")?,
            longitudinal_dispersivity: required(data, "longitudinal_dispersivity")?,
            dispersivity_ratio: required(data, "dispersivity_ratio")?,
            porosity: required(data, "porosity")?,
            obs: optional(data, "obs")?,
            chd_transport: required(data, "chd_transport")?,
        })
    }

    pub fn transverse_dispersivity(&self) -> f64 {
        self.longitudinal_dispersivity * self.dispersivity_ratio
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiverStressData {
    pub rivlay: Vec<usize>,
    pub rivrow: Vec<usize>,
    pub rivcol: Vec<usize>,
    pub rivstg: Vec<Vec<f64>>,
    pub rivbot: Vec<Vec<f64>>,
    pub rivcnd: f64,
}

impl RiverStressData {
    /// River cells, pairing layer, row and column entries by position.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.rivlay
            .iter()
            .zip(&self.rivrow)
            .zip(&self.rivcol)
            .map(|((&lay, &row), &col)| (lay, row, col))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiverModelData {
    pub river_spd: RiverStressData,
    pub river_boundnames: Option<Value>,
    pub obs_dict: Option<Value>,
    pub tsdict: Option<Value>,
    pub cond: Option<Value>,
}

impl RiverModelData {
    pub fn from_data(data: &ModelData) -> Result<Self> {
        Ok(RiverModelData {
            river_spd: required(data, "river_spd")?,
            river_boundnames: optional(data, "river_boundnames")?,
            obs_dict: optional(data, "obs_dict")?,
            tsdict: optional(data, "tsdict")?,
            cond: optional(data, "cond")?,
        })
    }
}

/// Everything the modelling library is built from. Extension views are only
/// read when the data's own flag is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInputs {
    pub flow: FlowModelData,
    pub transport: Option<TransportModelData>,
    pub river: Option<RiverModelData>,
}

impl ModelInputs {
    pub fn from_data(data: &ModelData) -> Result<Self> {
        let flow = FlowModelData::from_data(data)?;
        let transport = if flag_set(data, TRANSPORT_FLAG) {
            Some(TransportModelData::from_data(data)?)
        } else {
            None
        };
        let river = if flag_set(data, RIVER_FLAG) {
            Some(RiverModelData::from_data(data)?)
        } else {
            None
        };
        Ok(ModelInputs {
            flow,
            transport,
            river,
        })
    }
}

fn required<T: DeserializeOwned>(data: &ModelData, key: &str) -> Result<T> {
    let value = data
        .get(key)
        .ok_or_else(|| ModelDataError::MissingRequiredDefault {
            key: key.to_string(),
        })?;
    decode(key, value)
}

// Absent and null both read as None
fn optional<T: DeserializeOwned>(data: &ModelData, key: &str) -> Result<Option<T>> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(key, value).map(Some),
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|source| ModelDataError::MalformedValue {
        key: key.to_string(),
        source,
    })
}

// Default model data templates for a basic flow model
//
// Assumptions carried by the base data:
//   1. The first stress period is steady state.
//   2. Only CHD boundary conditions are supported for flow.
//   3. Anything not supplied is left to the modelling library's own defaults.
use serde_json::{Map, Value, json};
use std::sync::LazyLock;

/// Model data as handed to the modelling library: parameter name to value.
pub type ModelData = Map<String, Value>;

// Grid rows in the base data; the river profiles are sampled over it.
const NROW: usize = 15;

static BASE_MODEL_DATA: LazyLock<ModelData> = LazyLock::new(|| {
    entries([
        (
            "wells",
            json!({
                "wel_out": { "q": [-0.05, -0.5, -0.05], "coords": [0, 4, 4] }
            }),
        ),
        // Tdis: perlen, nstp, tsmult
        ("times", json!([10.0, 120, 1.0])),
        ("time_units", json!("DAYS")),
        ("length_units", json!("meters")),
        // nper = repeat_times + 1
        ("repeat_times", json!(3)),
        // Dis
        ("nrow", json!(NROW)),
        ("ncol", json!(10)),
        ("nlay", json!(3)),
        ("delr", json!(100.0)),
        ("delc", json!(100.0)),
        ("top", json!(15.0)),
        ("botm", json!(-15.0)),
        // Npf
        ("k", json!([0.5, 0.6, 0.5])),
        ("k33", json!([0.1, 0.2, 0.3])),
        // Sto
        ("sy", json!(0.2)),
        ("ss", json!(0.000001)),
        ("initial_head", json!(10.0)),
        // Chd: [(layer, row, col), head]
        ("chd", json!([[[0, 0, 0], 10.0], [[0, 14, 9], 10.0]])),
        ("cnc", json!([[[0, 5, 1], 0.0]])),
        ("transport", json!(false)),
        ("river", json!(false)),
    ])
});

static TRANSPORT_MODEL_DATA: LazyLock<ModelData> = LazyLock::new(|| {
    entries([
        ("initial_concentration", json!(0)),
        ("scheme", json!("UPSTREAM")),
        ("longitudinal_dispersivity", json!(1.0)),
        // transverse / longitudinal
        ("dispersivity_ratio", json!(1.0)),
        ("porosity", json!(0.35)),
        ("obs", Value::Null),
        // [(layer, row, col), head, concentration]
        (
            "chd_transport",
            json!([[[0, 0, 0], 10.0, 0.0], [[0, 14, 9], 10.0, 0.0]]),
        ),
    ])
});

static RIVER_MODEL_DATA: LazyLock<ModelData> = LazyLock::new(|| {
    entries([
        (
            "river_spd",
            json!({
                "rivlay": vec![0; 7],
                "rivrow": [2, 3, 4, 4, 5, 6, 7],
                "rivcol": [1, 2, 3, 4, 5, 6, 7],
                "rivstg": [linspace(14.0, 13.0, NROW)],
                "rivbot": [linspace(10.0, 7.0, NROW)],
                "rivcnd": 0.05,
            }),
        ),
        ("river_boundnames", Value::Null),
        ("obs_dict", Value::Null),
        ("tsdict", Value::Null),
        ("cond", Value::Null),
    ])
});

/// Defaults for the flow model: grid, stress periods, conductivity, storage,
/// wells and constant-head cells.
pub fn base_model_data() -> &'static ModelData {
    &BASE_MODEL_DATA
}

/// Solute transport defaults, applied when `transport` is set.
pub fn transport_model_data() -> &'static ModelData {
    &TRANSPORT_MODEL_DATA
}

/// River boundary defaults, applied when `river` is set.
pub fn river_model_data() -> &'static ModelData {
    &RIVER_MODEL_DATA
}

/// `num` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = stop;
            values
        }
    }
}

fn entries<const N: usize>(pairs: [(&str, Value); N]) -> ModelData {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

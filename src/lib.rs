//! Default input data for a basic groundwater flow model, with optional solute
//! transport and river boundary extensions, and the merge that layers caller
//! overrides on top of them.
//!
//! ```
//! use gwf_model_data::make_model_data;
//! use serde_json::json;
//!
//! let data = make_model_data(&json!({ "transport": true, "nlay": 1 })).unwrap();
//! assert_eq!(data["nlay"], json!(1));
//! assert_eq!(data["scheme"], json!("UPSTREAM"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod model;

pub use config::{ModelData, base_model_data, river_model_data, transport_model_data};
pub use error::{ModelDataError, Result};
pub use merge::{Templates, make_model_data};
pub use model::{FlowModelData, ModelInputs, RiverModelData, TransportModelData};

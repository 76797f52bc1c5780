use anyhow::{Context, Result};
use tracing::info;

use gwf_model_data::cli::get_args;
use gwf_model_data::logging::init_logging;
use gwf_model_data::{ModelInputs, make_model_data};

fn main() -> Result<()> {
    // Configuration
    let args = get_args();
    init_logging(args.verbose);

    let overrides = args
        .collect_overrides()
        .context("Failed to collect overrides")?;

    // Merge onto the defaults
    let data = make_model_data(&overrides).context("Failed to build model data")?;

    // Read it back the way the modelling library will
    let inputs = ModelInputs::from_data(&data)
        .context("Merged model data is not usable by the flow model")?;
    let flow = &inputs.flow;
    info!(
        nlay = flow.nlay,
        nrow = flow.nrow,
        ncol = flow.ncol,
        cells = ?flow.cell_count(),
        "Grid"
    );
    info!(
        nper = ?flow.nper(),
        transient = flow.repeat_times,
        perlen = flow.times.perlen,
        units = %flow.time_units,
        "Stress periods"
    );
    info!(
        wells = flow.wells.len(),
        chd = flow.chd.len(),
        transport = inputs.transport.is_some(),
        river = inputs.river.is_some(),
        "Boundaries"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }
    .context("Failed to serialize model data")?;
    println!("{}", output);

    Ok(())
}

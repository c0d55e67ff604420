//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per infrastructure node, in corridor order:
//!
//! ```csv
//! id,road,model_type,name,lat,lon,length,condition
//! 0,N1,sourcesink,start of N1,23.70,90.45,0,
//! 1,N1,link,link 1,23.71,90.46,5000,
//! 2,N1,bridge,bridge 1,23.72,90.47,150,C
//! 3,N1,link,link 2,23.73,90.48,3000,
//! 4,N1,sourcesink,end of N1,23.74,90.49,0,
//! ```
//!
//! `model_type` ∈ {`source`, `sink`, `sourcesink`, `link`, `bridge`};
//! `condition` is required for bridges and ignored elsewhere.  The loader
//! only parses — structural validation (contiguous ids, lengths, grades)
//! happens in [`Corridor::build`][crate::Corridor::build], which also needs
//! the run's scenario and seed to roll bridge states.

use std::io::Read;
use std::path::Path;

use crate::record::TopologyRecord;
use crate::{NetworkError, NetworkResult};

/// Load topology records from a CSV file.
pub fn load_corridor_csv(path: &Path) -> NetworkResult<Vec<TopologyRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_corridor_reader(file)
}

/// Like [`load_corridor_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded demo
/// topologies.
pub fn load_corridor_reader<R: Read>(reader: R) -> NetworkResult<Vec<TopologyRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<TopologyRecord>() {
        let record = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

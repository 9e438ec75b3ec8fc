use crate::report::*;

/// Reads the election data: a JSON array of result lines, in file order.
pub fn read_records(path: &str) -> LoadResult<Vec<Record>> {
    info!("Attempting to read election data {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let records: Vec<Record> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    info!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

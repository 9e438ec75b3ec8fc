// Primitives for writing CSV files.

use crate::report::*;

use serde::{Deserialize, Serialize};

pub const HEADER: [&str; 14] = [
    "SerialNo",
    "PartyID",
    "StateID",
    "CandidateName",
    "Gender",
    "Age",
    "PoliticalPartyName",
    "DistrictName",
    "LocalBodyName",
    "WardNo",
    "PostName",
    "TotalVotesReceived",
    "EStatus",
    "Rank",
];

/// One line of a CSV file, with the columns in the order of `HEADER`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "SerialNo")]
    pub serial_no: u32,
    #[serde(rename = "PartyID")]
    pub party_id: u32,
    #[serde(rename = "StateID")]
    pub state_id: u32,
    #[serde(rename = "CandidateName")]
    pub candidate_name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "PoliticalPartyName")]
    pub party_name: String,
    #[serde(rename = "DistrictName")]
    pub district_name: String,
    #[serde(rename = "LocalBodyName")]
    pub local_body_name: String,
    #[serde(rename = "WardNo")]
    pub ward_no: String,
    #[serde(rename = "PostName")]
    pub post_name: String,
    #[serde(rename = "TotalVotesReceived")]
    pub total_votes: u64,
    #[serde(rename = "EStatus")]
    pub status: String,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

impl From<&Record> for CsvRow {
    fn from(r: &Record) -> CsvRow {
        CsvRow {
            serial_no: r.serial_no,
            party_id: r.party_id,
            state_id: r.state_id,
            candidate_name: r.candidate_name.clone(),
            gender: r.gender.clone(),
            age: r.age,
            party_name: r.party_name.clone(),
            district_name: r.district_name.clone(),
            local_body_name: r.local_body_name.clone(),
            ward_no: r.ward_no.clone(),
            post_name: r.post_name.clone(),
            total_votes: r.total_votes,
            status: r.status.clone(),
            rank: r.rank,
        }
    }
}

impl From<CsvRow> for Record {
    fn from(row: CsvRow) -> Record {
        Record {
            party_id: row.party_id,
            state_id: row.state_id,
            candidate_name: row.candidate_name,
            gender: row.gender,
            age: row.age,
            party_name: row.party_name,
            district_name: row.district_name,
            local_body_name: row.local_body_name,
            ward_no: row.ward_no,
            post_name: row.post_name,
            serial_no: row.serial_no,
            total_votes: row.total_votes,
            status: row.status,
            rank: row.rank,
        }
    }
}

/// Writes the header and one line per record, in order.
pub fn write_records(path: &Path, records: &[Record]) -> WriteResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(WritingCsvSnafu { path })?;
    wtr.write_record(HEADER).context(WritingCsvSnafu { path })?;
    for r in records.iter() {
        wtr.serialize(CsvRow::from(r))
            .context(WritingCsvSnafu { path })?;
    }
    wtr.flush().context(FlushingCsvSnafu { path })?;
    debug!("write_records: {} lines to {:?}", records.len(), path);
    Ok(())
}

// ********* Input data structures ***********

use serde::{Deserialize, Serialize};

/// The status code of a candidate who won the post.
pub const ELECTED: &str = "E";

const COMMUNIST_PARTY: &str = "नेपाल कम्युनिष्ट पार्टी";
const COMMUNIST_PARTY_SHORT: &str = "नेकपा";
const UML_FULL: &str = "नेकपा (एकीकृत मार्क्सवादी-लेनिनवादी)";
const UML_SHORT: &str = "नेकपा (एमाले)";

/// One line of the election results: a candidate running for a post.
///
/// The field names follow the published dataset, including its spelling
/// of `TotalVotesRecieved`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Record {
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
    /// Empty when the post is not elected at the ward level.
    #[serde(rename = "WardNo", default)]
    pub ward_no: String,
    #[serde(rename = "PostName")]
    pub post_name: String,
    #[serde(rename = "SerialNo")]
    pub serial_no: u32,
    #[serde(rename = "TotalVotesRecieved")]
    pub total_votes: u64,
    #[serde(rename = "EStatus")]
    pub status: String,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

impl Record {
    pub fn is_elected(&self) -> bool {
        self.status == ELECTED
    }

    pub fn has_ward(&self) -> bool {
        !self.ward_no.is_empty()
    }

    /// Returns the record with its party name in canonical form.
    ///
    /// Applying it more than once has no further effect.
    pub fn normalized(self) -> Record {
        let party_name = normalize_party_name(&self.party_name);
        Record { party_name, ..self }
    }
}

/// Shortens the long names of the communist parties.
///
/// Every occurrence of "नेपाल कम्युनिष्ट पार्टी" becomes "नेकपा", and the
/// UML's full name becomes "नेकपा (एमाले)". The full-name check runs on the
/// output of the first rewrite, so that a name is fully shortened in a single
/// pass.
pub fn normalize_party_name(name: &str) -> String {
    let shortened = if name.contains(COMMUNIST_PARTY) {
        name.replace(COMMUNIST_PARTY, COMMUNIST_PARTY_SHORT)
    } else {
        name.to_string()
    };
    if shortened == UML_FULL {
        UML_SHORT.to_string()
    } else {
        shortened
    }
}

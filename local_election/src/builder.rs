use log::debug;

use crate::hierarchy::*;
use crate::record::Record;
use crate::{Groupings, MainKey, WardKey, WinKey};

/// A builder for grouping records one at a time.
///
/// Records are normalized as they are added.
///
/// ```
/// use local_election::*;
///
/// let js = r#"{"PartyID": 2, "StateID": 1, "CandidateName": "ख", "Gender": "पुरुष",
///   "Age": 52, "PoliticalPartyName": "नेपाली काँग्रेस", "DistrictName": "झापा",
///   "LocalBodyName": "मेचीनगर नगरपालिका", "WardNo": "3", "PostName": "महिला सदस्य",
///   "SerialNo": 7, "TotalVotesRecieved": 812, "EStatus": "E", "Rank": 1}"#;
///
/// let mut builder = Builder::new();
/// builder.add_record(serde_json::from_str(js).unwrap());
/// let groupings = builder.build();
///
/// assert_eq!(groupings.ward.len(), 1);
/// assert_eq!(groupings.win_province.keys().next().unwrap().category, "सदस्य");
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    groupings: Groupings,
    num_records: usize,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    pub fn add_record(&mut self, record: Record) {
        let r = record.normalized();
        let local_body = LocalBodyId {
            district: DistrictId {
                province: ProvinceId(r.state_id),
                district: r.district_name.clone(),
            },
            local_body: r.local_body_name.clone(),
        };

        if r.is_elected() {
            let category = post_category(&r.post_name).to_string();
            self.groupings
                .win_country
                .entry(WinKey {
                    unit: Country,
                    category: category.clone(),
                })
                .or_default()
                .push(r.clone());
            self.groupings
                .win_province
                .entry(WinKey {
                    unit: local_body.province(),
                    category: category.clone(),
                })
                .or_default()
                .push(r.clone());
            self.groupings
                .win_district
                .entry(WinKey {
                    unit: local_body.district.clone(),
                    category: category.clone(),
                })
                .or_default()
                .push(r.clone());
            self.groupings
                .win_local_body
                .entry(WinKey {
                    unit: local_body.clone(),
                    category,
                })
                .or_default()
                .push(r.clone());
        }

        if r.has_ward() {
            self.groupings
                .ward
                .entry(WardKey {
                    local_body: local_body.clone(),
                    post: r.post_name.clone(),
                    ward: r.ward_no.clone(),
                })
                .or_default()
                .push(r.clone());
        }

        let key = MainKey {
            local_body,
            post: r.post_name.clone(),
        };
        self.groupings.main.entry(key).or_default().push(r);
        self.num_records += 1;
    }

    /// The number of records added so far.
    pub fn len(&self) -> usize {
        self.num_records
    }

    pub fn is_empty(&self) -> bool {
        self.num_records == 0
    }

    pub fn build(self) -> Groupings {
        debug!("Builder::build: {} records", self.num_records);
        self.groupings
    }
}

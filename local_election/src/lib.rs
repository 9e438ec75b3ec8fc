/*!
Grouping and tallying of local-level election results.

The results of an election come as a flat list of [`Record`]s, one per
candidate and post. This crate regroups them along the administrative
hierarchy (country, province, district, local body, ward) so that they can be
reported per unit:

- the *main* grouping gathers all the candidates for one post of one local body,
- the *ward* grouping gathers the candidates for one post of one ward,
- the four *win* groupings gather the elected candidates of a unit, by post
  category, and are counted by party with a [`Tally`].

```
use local_election::*;

let js = r#"[{"PartyID": 1, "StateID": 3, "CandidateName": "क", "Gender": "महिला",
  "Age": 40, "PoliticalPartyName": "नेकपा (एकीकृत मार्क्सवादी-लेनिनवादी)",
  "DistrictName": "ललितपुर", "LocalBodyName": "गोदावरी नगरपालिका", "WardNo": "",
  "PostName": "प्रमुख", "SerialNo": 1, "TotalVotesRecieved": 100, "EStatus": "E", "Rank": 1}]"#;
let records: Vec<Record> = serde_json::from_str(js).unwrap();
let groupings = group_records(&records);
let tallies = tally_groups(&groupings.win_country);
let tally = tallies.values().next().unwrap();
assert_eq!(tally.count("नेकपा (एमाले)"), 1);
```

See the [`manual`] for the input format and the layout of the reports.
*/

mod builder;
mod hierarchy;
pub mod manual;
mod record;

use log::{debug, info};

use std::collections::BTreeMap;
use std::fmt::Display;

pub use crate::builder::Builder;
pub use crate::hierarchy::*;
pub use crate::record::*;

/// Records sharing the same key, in input order.
pub type Groups<K> = BTreeMap<K, Vec<Record>>;

/// The candidates for one post of one local body.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct MainKey {
    pub local_body: LocalBodyId,
    pub post: String,
}

/// The candidates for one post of one ward.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct WardKey {
    pub local_body: LocalBodyId,
    pub post: String,
    pub ward: String,
}

/// The elected candidates of a unit, for one post category.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct WinKey<U> {
    pub unit: U,
    pub category: String,
}

/// All the groupings computed from one set of records.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Groupings {
    pub main: Groups<MainKey>,
    pub ward: Groups<WardKey>,
    pub win_local_body: Groups<WinKey<LocalBodyId>>,
    pub win_district: Groups<WinKey<DistrictId>>,
    pub win_province: Groups<WinKey<ProvinceId>>,
    pub win_country: Groups<WinKey<Country>>,
}

impl Groupings {
    /// The number of groups in each grouping, in declaration order.
    pub fn sizes(&self) -> [usize; 6] {
        [
            self.main.len(),
            self.ward.len(),
            self.win_local_body.len(),
            self.win_district.len(),
            self.win_province.len(),
            self.win_country.len(),
        ]
    }
}

/// Number of elected candidates per party.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Tally {
    counts: BTreeMap<String, u64>,
}

impl Tally {
    pub fn from_records(records: &[Record]) -> Tally {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for r in records.iter() {
            *counts.entry(r.party_name.clone()).or_insert(0) += 1;
        }
        Tally { counts }
    }

    pub fn count(&self, party: &str) -> u64 {
        self.counts.get(party).cloned().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The parties and their counts, ordered by party name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(p, c)| (p.as_str(), *c))
    }
}

/// The unit a report page is written for.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub enum PageUnit {
    Country,
    Province(ProvinceId),
    District(DistrictId),
    LocalBody(LocalBodyId),
}

impl PageUnit {
    /// The folders leading to the page, from the results root.
    pub fn components(&self) -> Vec<String> {
        match self {
            PageUnit::Country => vec![],
            PageUnit::Province(p) => vec![path_component(&p.display_name())],
            PageUnit::District(d) => district_components(d),
            PageUnit::LocalBody(lb) => local_body_components(lb),
        }
    }
}

impl Display for PageUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageUnit::Country => write!(f, "country"),
            PageUnit::Province(p) => write!(f, "{}", p),
            PageUnit::District(d) => write!(f, "{}/{}", d.province, d.district),
            PageUnit::LocalBody(lb) => write!(
                f,
                "{}/{}/{}",
                lb.province(),
                lb.district_name(),
                lb.local_body
            ),
        }
    }
}

fn district_components(d: &DistrictId) -> Vec<String> {
    vec![
        path_component(&d.province.display_name()),
        path_component(&d.district),
    ]
}

fn local_body_components(lb: &LocalBodyId) -> Vec<String> {
    let mut res = district_components(&lb.district);
    res.push(path_component(&lb.local_body));
    res
}

/// A group key that can be turned into a chart.
pub trait ChartKey {
    /// The title of the chart for this group.
    fn title(&self) -> String;

    /// The pages on which the chart for this group appears. It may be none.
    fn pages(&self) -> Vec<PageUnit>;
}

impl MainKey {
    /// The folders holding the CSV file of this group, from the results root.
    pub fn components(&self) -> Vec<String> {
        local_body_components(&self.local_body)
    }

    /// The CSV file name of this group.
    pub fn file_name(&self) -> String {
        format!("{}.csv", path_component(&self.post))
    }
}

impl ChartKey for MainKey {
    fn title(&self) -> String {
        format!(
            "{}({})-{}",
            self.local_body.local_body,
            self.local_body.district_name(),
            self.post
        )
    }

    fn pages(&self) -> Vec<PageUnit> {
        let mut res = vec![];
        if is_executive_post(&self.post) {
            res.push(PageUnit::LocalBody(self.local_body.clone()));
        }
        if is_head_post(&self.post) {
            res.push(PageUnit::District(self.local_body.district.clone()));
        }
        res
    }
}

impl ChartKey for WardKey {
    fn title(&self) -> String {
        format!(
            "{}({})-{}({})",
            self.local_body.local_body,
            self.local_body.district_name(),
            self.post,
            self.ward
        )
    }

    fn pages(&self) -> Vec<PageUnit> {
        if self.post == WARD_CHAIRPERSON {
            vec![PageUnit::LocalBody(self.local_body.clone())]
        } else {
            vec![]
        }
    }
}

impl ChartKey for WinKey<LocalBodyId> {
    fn title(&self) -> String {
        format!(
            "{}({})-{}",
            self.unit.local_body,
            self.unit.district_name(),
            self.category
        )
    }

    fn pages(&self) -> Vec<PageUnit> {
        vec![PageUnit::LocalBody(self.unit.clone())]
    }
}

impl ChartKey for WinKey<DistrictId> {
    fn title(&self) -> String {
        format!("{}-  {}", self.unit.district, self.category)
    }

    fn pages(&self) -> Vec<PageUnit> {
        vec![PageUnit::District(self.unit.clone())]
    }
}

impl ChartKey for WinKey<ProvinceId> {
    fn title(&self) -> String {
        format!("{}({})", self.unit, self.category)
    }

    fn pages(&self) -> Vec<PageUnit> {
        vec![PageUnit::Province(self.unit)]
    }
}

impl ChartKey for WinKey<Country> {
    fn title(&self) -> String {
        self.category.clone()
    }

    fn pages(&self) -> Vec<PageUnit> {
        vec![PageUnit::Country]
    }
}

/// Normalizes the records and builds all the groupings.
///
/// Every record lands in exactly one main group, in one ward group if it has a
/// ward number, and in one group of each win grouping if it was elected.
pub fn group_records(records: &[Record]) -> Groupings {
    info!("Grouping {:?} records", records.len());
    let mut builder = Builder::new();
    for r in records.iter() {
        builder.add_record(r.clone());
    }
    let groupings = builder.build();
    let [main, ward, win_lb, win_d, win_p, win_c] = groupings.sizes();
    info!(
        "group_records: main: {} ward: {} win: local body {} district {} province {} country {}",
        main, ward, win_lb, win_d, win_p, win_c
    );
    groupings
}

/// The party tally of every group of a win grouping.
pub fn tally_groups<K: Ord + Clone>(groups: &Groups<K>) -> BTreeMap<K, Tally> {
    let res: BTreeMap<K, Tally> = groups
        .iter()
        .map(|(k, records)| (k.clone(), Tally::from_records(records)))
        .collect();
    debug!("tally_groups: {} tallies", res.len());
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record;

    const UML_FULL: &str = "नेकपा (एकीकृत मार्क्सवादी-लेनिनवादी)";
    const UML: &str = "नेकपा (एमाले)";
    const NC: &str = "नेपाली काँग्रेस";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn lb(state: u32, district: &str, local_body: &str) -> LocalBodyId {
        LocalBodyId {
            district: DistrictId {
                province: ProvinceId(state),
                district: district.to_string(),
            },
            local_body: local_body.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(3, "ललितपुर", "गोदावरी नगरपालिका", CHIEF, "", NC, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", CHIEF, "", UML_FULL, "L"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", DEPUTY_CHIEF, "", UML_FULL, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", WARD_CHAIRPERSON, "1", NC, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", WARD_CHAIRPERSON, "1", UML_FULL, ""),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", WARD_CHAIRPERSON, "2", UML_FULL, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", MEMBER, "1", NC, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", WOMAN_MEMBER, "1", UML_FULL, "E"),
            record(3, "ललितपुर", "गोदावरी नगरपालिका", DALIT_WOMAN_MEMBER, "2", NC, "E"),
            record(3, "ललितपुर", "बागमती गाउँपालिका", CHAIRPERSON, "", UML_FULL, "E"),
            record(3, "काठमाडौं", "काठमाडौं महानगरपालिका", CHIEF, "", "स्वतन्त्र", "E"),
            record(1, "झापा", "मेचीनगर नगरपालिका", CHIEF, "", NC, "E"),
        ]
    }

    #[test]
    fn every_record_in_one_main_group() {
        init();
        let records = sample();
        let g = group_records(&records);
        let total: usize = g.main.values().map(|v| v.len()).sum();
        assert_eq!(total, records.len());
        for r in records.iter() {
            let n = g
                .main
                .iter()
                .filter(|(k, v)| {
                    k.post == r.post_name
                        && k.local_body.local_body == r.local_body_name
                        && v.iter().any(|x| x.candidate_name == r.candidate_name)
                })
                .count();
            assert_eq!(n, 1);
        }
    }

    #[test]
    fn ward_groups_only_hold_ward_records() {
        let records = sample();
        let g = group_records(&records);
        let total: usize = g.ward.values().map(|v| v.len()).sum();
        assert_eq!(total, records.iter().filter(|r| r.has_ward()).count());
        let key = WardKey {
            local_body: lb(3, "ललितपुर", "गोदावरी नगरपालिका"),
            post: WARD_CHAIRPERSON.to_string(),
            ward: "1".to_string(),
        };
        assert_eq!(g.ward[&key].len(), 2);
        // Raw post names are kept outside of the win groupings.
        assert!(g.ward.keys().any(|k| k.post == WOMAN_MEMBER));
    }

    #[test]
    fn win_groupings_only_hold_elected() {
        let g = group_records(&sample());
        let all = g
            .win_local_body
            .values()
            .chain(g.win_district.values())
            .chain(g.win_province.values())
            .chain(g.win_country.values())
            .flatten();
        for r in all {
            assert!(r.is_elected());
        }
        let elected = sample().iter().filter(|r| r.is_elected()).count();
        let total: usize = g.win_country.values().map(|v| v.len()).sum();
        assert_eq!(total, elected);
        let total: usize = g.win_local_body.values().map(|v| v.len()).sum();
        assert_eq!(total, elected);
    }

    #[test]
    fn member_posts_share_win_key() {
        let g = group_records(&sample());
        let key = WinKey {
            unit: lb(3, "ललितपुर", "गोदावरी नगरपालिका"),
            category: MEMBER.to_string(),
        };
        assert_eq!(g.win_local_body[&key].len(), 3);
        assert!(!g.win_country.keys().any(|k| k.category == WOMAN_MEMBER));
        assert!(!g.win_country.keys().any(|k| k.category == DALIT_WOMAN_MEMBER));
    }

    #[test]
    fn tallies_count_parties() {
        let g = group_records(&sample());
        let tallies = tally_groups(&g.win_country);
        for (k, tally) in tallies.iter() {
            let records = &g.win_country[k];
            assert_eq!(tally.total(), records.len() as u64);
            for (party, count) in tally.iter() {
                let n = records.iter().filter(|r| r.party_name == party).count();
                assert_eq!(count, n as u64);
            }
        }
        let chief = WinKey {
            unit: Country,
            category: CHIEF.to_string(),
        };
        assert_eq!(tallies[&chief].count(NC), 2);
        assert_eq!(tallies[&chief].count(UML), 0);
        assert_eq!(tallies[&chief].len(), 2);
    }

    #[test]
    fn groups_are_normalized() {
        let g = group_records(&sample());
        for r in g.main.values().flatten() {
            assert_ne!(r.party_name, UML_FULL);
        }
        let province = WinKey {
            unit: ProvinceId(3),
            category: CHAIRPERSON.to_string(),
        };
        assert_eq!(tally_groups(&g.win_province)[&province].count(UML), 1);
    }

    #[test]
    fn names_with_separators_do_not_collide() {
        // The keys are structured, a name containing the separator of a
        // flat encoding does not merge two groups.
        let records = vec![
            record(3, "क__ख", "ग", CHIEF, "", NC, "E"),
            record(3, "क", "ख__ग", CHIEF, "", NC, "E"),
        ];
        let g = group_records(&records);
        assert_eq!(g.main.len(), 2);
        assert_eq!(g.win_local_body.len(), 2);
    }

    #[test]
    fn head_chart_on_two_pages() {
        let key = MainKey {
            local_body: lb(1, "A", "X"),
            post: CHAIRPERSON.to_string(),
        };
        assert_eq!(
            key.pages(),
            vec![
                PageUnit::LocalBody(lb(1, "A", "X")),
                PageUnit::District(lb(1, "A", "X").district),
            ]
        );
        assert_eq!(key.title(), "X(A)-अध्यक्ष");
        let deputy = MainKey {
            local_body: lb(1, "A", "X"),
            post: DEPUTY_CHIEF.to_string(),
        };
        assert_eq!(deputy.pages(), vec![PageUnit::LocalBody(lb(1, "A", "X"))]);
        let member = MainKey {
            local_body: lb(1, "A", "X"),
            post: MEMBER.to_string(),
        };
        assert!(member.pages().is_empty());
    }

    #[test]
    fn ward_chart_pages() {
        let chair = WardKey {
            local_body: lb(1, "A", "X"),
            post: WARD_CHAIRPERSON.to_string(),
            ward: "4".to_string(),
        };
        assert_eq!(chair.title(), "X(A)-वडा अध्यक्ष(4)");
        assert_eq!(chair.pages().len(), 1);
        let member = WardKey {
            post: MEMBER.to_string(),
            ..chair
        };
        assert!(member.pages().is_empty());
    }

    #[test]
    fn win_titles() {
        let d = lb(2, "सप्तरी", "राजविराज नगरपालिका").district;
        let k = WinKey {
            unit: d.clone(),
            category: CHIEF.to_string(),
        };
        assert_eq!(k.title(), "सप्तरी-  प्रमुख");
        let k = WinKey {
            unit: ProvinceId(2),
            category: CHIEF.to_string(),
        };
        assert_eq!(k.title(), "मधेश प्रदेश(प्रमुख)");
        let k = WinKey {
            unit: Country,
            category: MEMBER.to_string(),
        };
        assert_eq!(k.title(), MEMBER);
        assert_eq!(k.pages(), vec![PageUnit::Country]);
    }

    #[test]
    fn page_components() {
        assert!(PageUnit::Country.components().is_empty());
        assert_eq!(
            PageUnit::Province(ProvinceId(3)).components(),
            vec!["वाग्मती प्रदेश"]
        );
        assert_eq!(
            PageUnit::LocalBody(lb(3, "ललितपुर", "ललितपुर महानगरपालिका")).components(),
            vec!["वाग्मती प्रदेश", "ललितपुर", "ललितपुर महानगरपालिका"]
        );
        let key = MainKey {
            local_body: lb(9, "A", "X"),
            post: "a/b".to_string(),
        };
        assert_eq!(key.components(), vec!["9", "A", "X"]);
        assert_eq!(key.file_name(), "a_b.csv");
    }
}

// Administrative units and the posts elected in them.

use std::fmt::Display;

/// The seven provinces, indexed by their id minus one.
pub const PROVINCE_NAMES: [&str; 7] = [
    "प्रदेश नं. १",
    "मधेश प्रदेश",
    "वाग्मती प्रदेश",
    "गण्डकी प्रदेश",
    "लुम्बिनी प्रदेश",
    "कर्णाली प्रदेश",
    "सुदूरपश्चिम प्रदेश",
];

// Head of a municipality.
pub const CHIEF: &str = "प्रमुख";
pub const DEPUTY_CHIEF: &str = "उपप्रमुख";
// Head of a rural municipality.
pub const CHAIRPERSON: &str = "अध्यक्ष";
pub const VICE_CHAIRPERSON: &str = "उपाध्यक्ष";
pub const WARD_CHAIRPERSON: &str = "वडा अध्यक्ष";
pub const MEMBER: &str = "सदस्य";
pub const WOMAN_MEMBER: &str = "महिला सदस्य";
pub const DALIT_WOMAN_MEMBER: &str = "दलित महिला सदस्य";

/// The post under which wins are counted.
///
/// All the ward member seats are counted together as "सदस्य".
pub fn post_category(post: &str) -> &str {
    match post {
        MEMBER | WOMAN_MEMBER | DALIT_WOMAN_MEMBER => MEMBER,
        x => x,
    }
}

/// The head of a local body, featured on the district page.
pub fn is_head_post(post: &str) -> bool {
    post == CHIEF || post == CHAIRPERSON
}

/// The head of a local body or their deputy.
pub fn is_executive_post(post: &str) -> bool {
    is_head_post(post) || post == DEPUTY_CHIEF || post == VICE_CHAIRPERSON
}

/// Makes a hierarchy name usable as exactly one directory level.
///
/// Separators become `_`. The names `""`, `"."` and `".."` get a trailing `_`, since
/// they would not add a level of their own.
pub fn path_component(name: &str) -> String {
    match name {
        "" | "." | ".." => format!("{}_", name),
        x => x.replace(['/', '\\'], "_"),
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct ProvinceId(pub u32);

impl ProvinceId {
    /// The human-readable name, if the id is one of the seven provinces.
    pub fn name(&self) -> Option<&'static str> {
        match self.0 {
            1..=7 => Some(PROVINCE_NAMES[(self.0 - 1) as usize]),
            _ => None,
        }
    }

    /// The name used in titles and folders. Unknown ids keep their number.
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(n) => n.to_string(),
            None => self.0.to_string(),
        }
    }
}

impl Display for ProvinceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct DistrictId {
    pub province: ProvinceId,
    pub district: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct LocalBodyId {
    pub district: DistrictId,
    pub local_body: String,
}

impl LocalBodyId {
    pub fn province(&self) -> ProvinceId {
        self.district.province
    }

    pub fn district_name(&self) -> &str {
        &self.district.district
    }
}

/// The whole country, the root of the hierarchy.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd, Default)]
pub struct Country;

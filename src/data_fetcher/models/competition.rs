use super::common::{
    Area, Listing, Searchable, any_field_contains, lenient, lenient_count, lenient_option,
    lenient_vec,
};
use serde::{Deserialize, Serialize};

/// A league or tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_option")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub area: Option<Area>,
    #[serde(default, alias = "emblemUrl", deserialize_with = "lenient_option")]
    pub emblem: Option<String>,
}

impl Competition {
    pub fn area_name(&self) -> Option<&str> {
        self.area.as_ref().and_then(|a| a.name.as_deref())
    }
}

impl Searchable for Competition {
    fn matches_search(&self, needle: &str) -> bool {
        any_field_contains(&[Some(self.name.as_str()), self.area_name()], needle)
    }
}

/// Body of `GET /competitions`
#[derive(Debug, Default, Deserialize)]
pub struct CompetitionsResponse {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub competitions: Vec<Competition>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl From<CompetitionsResponse> for Listing<Competition> {
    fn from(response: CompetitionsResponse) -> Self {
        Listing {
            items: response.competitions,
            count: response.count,
        }
    }
}

use super::common::{
    Area, Listing, Searchable, any_field_contains, lenient, lenient_count, lenient_option,
    lenient_vec,
};
use serde::{Deserialize, Serialize};

/// A football club as returned by `/teams` and `/teams/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_option")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub tla: Option<String>,
    #[serde(default, alias = "crestUrl", deserialize_with = "lenient_option")]
    pub crest: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub area: Option<Area>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub founded: Option<i32>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub venue: Option<String>,
}

impl Team {
    pub fn area_name(&self) -> Option<&str> {
        self.area.as_ref().and_then(|a| a.name.as_deref())
    }
}

impl Searchable for Team {
    fn matches_search(&self, needle: &str) -> bool {
        any_field_contains(&[Some(self.name.as_str()), self.area_name()], needle)
    }
}

/// Body of `GET /teams`
#[derive(Debug, Default, Deserialize)]
pub struct TeamsResponse {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl From<TeamsResponse> for Listing<Team> {
    fn from(response: TeamsResponse) -> Self {
        Listing {
            items: response.teams,
            count: response.count,
        }
    }
}

use super::record::{Identified, Record};
use super::status::MemberStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub role: Option<String>,
    /// Monthly base salary in whole currency units.
    pub salary: Option<u64>,
    pub pay_period: Option<String>,
    pub department: Option<String>,
    pub status: MemberStatus,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl TeamMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

impl Identified for TeamMember {
    const KIND: &'static str = "team member";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TeamMember {
    type Status = MemberStatus;

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> MemberStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.role.as_deref());
        fields.extend(self.department.as_deref());
        fields
    }
}

/// Upper-cased first letter of every word: "john smith" → "JS".
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

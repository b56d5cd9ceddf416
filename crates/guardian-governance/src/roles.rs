//! Voter resolution over the constitution's roles.
//!
//! Eligibility is always by email. A person listed under several voter roles
//! is one voter.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use guardian_core::models::{Constitution, Role, VoterRef};

/// Emails reachable through `voters`, first-seen order, without duplicates.
/// Voter entries naming an undefined role are skipped.
pub fn eligible_voters(voters: &[VoterRef], roles: &BTreeMap<String, Role>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    voters
        .iter()
        .filter_map(|voter| roles.get(&voter.role))
        .flat_map(|role| role.members.iter())
        .filter(|member| seen.insert(member.email.as_str()))
        .map(|member| member.email.clone())
        .collect()
}

/// Role queries against one constitution.
#[derive(Debug, Clone, Copy)]
pub struct RoleResolver<'a> {
    voters: &'a [VoterRef],
    roles: &'a BTreeMap<String, Role>,
}

impl<'a> RoleResolver<'a> {
    pub fn new(constitution: &'a Constitution) -> Self {
        Self {
            voters: &constitution.governance.voters,
            roles: &constitution.roles,
        }
    }

    pub fn eligible_voters(&self) -> Vec<String> {
        eligible_voters(self.voters, self.roles)
    }

    /// True if `email` is a member of any voter role.
    pub fn is_voter(&self, email: &str) -> bool {
        self.voter_roles().any(|role| role.has_member(email))
    }

    /// Every role `email` belongs to, voting or not, sorted by role name.
    pub fn roles_of(&self, email: &str) -> Vec<&'a str> {
        self.roles
            .iter()
            .filter(|(_, role)| role.has_member(email))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn voter_roles(&self) -> impl Iterator<Item = &'a Role> + 'a {
        let roles = self.roles;
        self.voters.iter().filter_map(move |voter| roles.get(&voter.role))
    }
}

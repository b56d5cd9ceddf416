//! Load-time validation of governance documents.
//!
//! Deserialization already rejects unknown enum values (severities, decisions,
//! statuses). These checks cover what the type system cannot: required
//! strings, cross references and numeric ranges. Every problem is collected
//! so a user can fix a document in one pass.

use rustc_hash::FxHashSet;

use crate::errors::ValidationError;
use crate::models::{Constitution, Exception, Proposal, QuorumConfig, QuorumType, RulesFile, Vote};

const LLM_PROVIDERS: &[&str] = &["deepseek", "openai", "claude", "custom"];

/// Collects problems for one document.
struct Problems {
    subject: &'static str,
    items: Vec<String>,
}

impl Problems {
    fn new(subject: &'static str) -> Self {
        Self {
            subject,
            items: Vec::new(),
        }
    }

    fn require(&mut self, value: &str, field: &str) {
        if value.trim().is_empty() {
            self.items.push(format!("{field} must not be empty"));
        }
    }

    fn push(&mut self, problem: String) {
        self.items.push(problem);
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.subject, self.items))
        }
    }
}

fn check_quorum(problems: &mut Problems, quorum: &QuorumConfig, field: &str) {
    match quorum.quorum_type {
        QuorumType::Unspecified => problems.push(format!(
            "{field}.type must be one of: majority, two_thirds, unanimous, custom"
        )),
        QuorumType::Custom if !(quorum.threshold > 0.0 && quorum.threshold <= 1.0) => {
            problems.push(format!(
                "{field}.threshold must be between 0 (exclusive) and 1 (inclusive) for custom quorum type"
            ))
        }
        _ => {}
    }
}

pub fn validate_constitution(c: &Constitution) -> Result<(), ValidationError> {
    let mut problems = Problems::new("constitution");
    let gov = &c.governance;

    if gov.voters.is_empty() {
        problems.push("governance.voters must not be empty".to_string());
    }
    for (i, voter) in gov.voters.iter().enumerate() {
        if voter.role.is_empty() {
            problems.push(format!("governance.voters[{i}].role must not be empty"));
        } else if !c.roles.contains_key(&voter.role) {
            problems.push(format!(
                "governance.voters references role {:?} which is not defined in roles",
                voter.role
            ));
        }
    }

    check_quorum(&mut problems, &gov.quorum, "governance.quorum");
    if gov.proposal_ttl_days < 0 {
        problems.push("governance.proposal_ttl_days must not be negative".to_string());
    }
    for (rule_id, rule_override) in &gov.per_rule_overrides {
        check_quorum(
            &mut problems,
            &rule_override.quorum,
            &format!("governance.per_rule_overrides[{rule_id}].quorum"),
        );
    }

    if c.roles.is_empty() {
        problems.push("roles must not be empty".to_string());
    }
    for (name, role) in &c.roles {
        if role.members.is_empty() {
            problems.push(format!("roles[{name}].members must not be empty"));
        }
        for (i, member) in role.members.iter().enumerate() {
            problems.require(&member.email, &format!("roles[{name}].members[{i}].email"));
        }
    }

    let provider = c.llm.provider.as_str();
    if !provider.is_empty() && !LLM_PROVIDERS.contains(&provider) {
        problems.push(format!(
            "llm.provider {provider:?} is invalid; must be one of: {}",
            LLM_PROVIDERS.join(", ")
        ));
    }
    if provider == "custom" && c.llm.endpoint.is_empty() {
        problems.push("llm.endpoint is required when provider is custom".to_string());
    }

    problems.finish()
}

pub fn validate_rules(rules: &RulesFile) -> Result<(), ValidationError> {
    let mut problems = Problems::new("rules");
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for (i, rule) in rules.rules.iter().enumerate() {
        if rule.id.is_empty() {
            problems.push(format!("rules[{i}].id must not be empty"));
        } else if !seen.insert(rule.id.as_str()) {
            problems.push(format!("rules[{i}].id {:?} is duplicated", rule.id));
        }
        problems.require(&rule.description, &format!("rules[{i}].description"));
        problems.require(&rule.rule_type, &format!("rules[{i}].type"));
    }

    problems.finish()
}

pub fn validate_proposal(p: &Proposal) -> Result<(), ValidationError> {
    let mut problems = Problems::new("proposal");
    problems.require(&p.id, "id");
    problems.require(&p.rule_id, "rule_id");
    problems.require(&p.change.description, "change.description");
    problems.require(&p.reason, "reason");
    problems.require(&p.created_by, "created_by");
    problems.finish()
}

pub fn validate_vote(v: &Vote) -> Result<(), ValidationError> {
    let mut problems = Problems::new("vote");
    problems.require(&v.proposal_id, "proposal_id");
    problems.require(&v.voter_email, "voter_email");
    problems.finish()
}

pub fn validate_exception(e: &Exception) -> Result<(), ValidationError> {
    let mut problems = Problems::new("exception");
    problems.require(&e.id, "id");
    problems.require(&e.rule_id, "rule_id");
    if e.paths.is_empty() {
        problems.push("paths must not be empty".to_string());
    }
    problems.require(&e.reason, "reason");
    problems.require(&e.created_by, "created_by");
    if e.expires_at.is_some_and(|expires_at| expires_at < e.created_at) {
        problems.push("expires_at must not be before created_at".to_string());
    }
    problems.finish()
}

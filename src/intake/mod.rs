use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BlueprintError;

pub const DEFAULT_PROJECT_TYPE: &str = "Landing Page";

/// Project types offered by the intake prompt. Free text is accepted too.
pub const PROJECT_TYPE_OPTIONS: [&str; 5] = [
    "Landing Page",
    "Web Application",
    "Mobile App",
    "Dashboard",
    "E-commerce",
];

/// Phase 0 intake. Serialized field-for-field as the webhook body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    pub brand_name: String,
    pub market_industry: String,
    pub project_type: String,
    pub primary_target_audience: String,
    pub primary_user_goal: String,
    pub business_goal: String,
    pub must_include: String,
    pub must_avoid: String,
    pub design_guidelines: String,
}

impl Default for IntakeRecord {
    fn default() -> Self {
        Self {
            brand_name: String::new(),
            market_industry: String::new(),
            project_type: DEFAULT_PROJECT_TYPE.into(),
            primary_target_audience: String::new(),
            primary_user_goal: String::new(),
            business_goal: String::new(),
            must_include: String::new(),
            must_avoid: String::new(),
            design_guidelines: String::new(),
        }
    }
}

impl IntakeRecord {
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::BrandName => &self.brand_name,
            IntakeField::MarketIndustry => &self.market_industry,
            IntakeField::ProjectType => &self.project_type,
            IntakeField::PrimaryTargetAudience => &self.primary_target_audience,
            IntakeField::PrimaryUserGoal => &self.primary_user_goal,
            IntakeField::BusinessGoal => &self.business_goal,
            IntakeField::MustInclude => &self.must_include,
            IntakeField::MustAvoid => &self.must_avoid,
            IntakeField::DesignGuidelines => &self.design_guidelines,
        }
    }

    fn slot_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::BrandName => &mut self.brand_name,
            IntakeField::MarketIndustry => &mut self.market_industry,
            IntakeField::ProjectType => &mut self.project_type,
            IntakeField::PrimaryTargetAudience => &mut self.primary_target_audience,
            IntakeField::PrimaryUserGoal => &mut self.primary_user_goal,
            IntakeField::BusinessGoal => &mut self.business_goal,
            IntakeField::MustInclude => &mut self.must_include,
            IntakeField::MustAvoid => &mut self.must_avoid,
            IntakeField::DesignGuidelines => &mut self.design_guidelines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeField {
    BrandName,
    MarketIndustry,
    ProjectType,
    PrimaryTargetAudience,
    PrimaryUserGoal,
    BusinessGoal,
    MustInclude,
    MustAvoid,
    DesignGuidelines,
}

impl IntakeField {
    /// Form order: project basics, then user & goal, then constraints & tone.
    pub const ALL: [IntakeField; 9] = [
        IntakeField::BrandName,
        IntakeField::MarketIndustry,
        IntakeField::ProjectType,
        IntakeField::PrimaryTargetAudience,
        IntakeField::PrimaryUserGoal,
        IntakeField::BusinessGoal,
        IntakeField::MustInclude,
        IntakeField::MustAvoid,
        IntakeField::DesignGuidelines,
    ];

    /// Key used in the JSON body sent to the webhook.
    pub fn wire_key(self) -> &'static str {
        match self {
            IntakeField::BrandName => "brandName",
            IntakeField::MarketIndustry => "marketIndustry",
            IntakeField::ProjectType => "projectType",
            IntakeField::PrimaryTargetAudience => "primaryTargetAudience",
            IntakeField::PrimaryUserGoal => "primaryUserGoal",
            IntakeField::BusinessGoal => "businessGoal",
            IntakeField::MustInclude => "mustInclude",
            IntakeField::MustAvoid => "mustAvoid",
            IntakeField::DesignGuidelines => "designGuidelines",
        }
    }

    pub fn kebab_key(self) -> &'static str {
        match self {
            IntakeField::BrandName => "brand-name",
            IntakeField::MarketIndustry => "market-industry",
            IntakeField::ProjectType => "project-type",
            IntakeField::PrimaryTargetAudience => "primary-target-audience",
            IntakeField::PrimaryUserGoal => "primary-user-goal",
            IntakeField::BusinessGoal => "business-goal",
            IntakeField::MustInclude => "must-include",
            IntakeField::MustAvoid => "must-avoid",
            IntakeField::DesignGuidelines => "design-guidelines",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntakeField::BrandName => "Brand Name",
            IntakeField::MarketIndustry => "Market / Industry",
            IntakeField::ProjectType => "Project Type",
            IntakeField::PrimaryTargetAudience => "Primary Target Audience",
            IntakeField::PrimaryUserGoal => "Primary User Goal",
            IntakeField::BusinessGoal => "Business Goal / Desired Action",
            IntakeField::MustInclude => "Must Include",
            IntakeField::MustAvoid => "Must Avoid",
            IntakeField::DesignGuidelines => "Design Guidelines / Tone (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            IntakeField::BrandName => "e.g. Lumina Health",
            IntakeField::MarketIndustry => "e.g. Digital Healthcare, B2C Telemedicine",
            IntakeField::ProjectType => "Landing Page, Web Application, Mobile App, Dashboard, E-commerce",
            IntakeField::PrimaryTargetAudience => "e.g. Adults 30–55 with chronic lifestyle conditions",
            IntakeField::PrimaryUserGoal => "What does the user want to achieve?",
            IntakeField::BusinessGoal => "What is the conversion event?",
            IntakeField::MustInclude => "Non-negotiable features or sections...",
            IntakeField::MustAvoid => "Patterns or content to stay away from...",
            IntakeField::DesignGuidelines => "e.g. Calm, medically credible, highly accessible...",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

impl FromStr for IntakeField {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        IntakeField::ALL
            .into_iter()
            .find(|f| f.wire_key() == name || f.kebab_key() == name)
            .ok_or_else(|| BlueprintError::UnknownField(name.to_string()))
    }
}

/// Session-scoped holder of the intake record. `update` is the only mutator.
#[derive(Debug, Clone, Default)]
pub struct IntakeState {
    record: IntakeRecord,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: IntakeField, value: impl Into<String>) {
        *self.record.slot_mut(field) = value.into();
    }

    pub fn update_by_name(&mut self, name: &str, value: impl Into<String>) -> crate::errors::Result<()> {
        let field: IntakeField = name.parse()?;
        self.update(field, value);
        Ok(())
    }

    pub fn get(&self, field: IntakeField) -> &str {
        self.record.get(field)
    }

    /// Detached copy of the current record.
    pub fn snapshot(&self) -> IntakeRecord {
        self.record.clone()
    }
}

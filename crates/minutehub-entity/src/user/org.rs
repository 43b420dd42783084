//! Organizational unit enumerations: departments, teams, and sales regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use minutehub_core::AppError;

/// Company departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Executive management.
    Executive,
    /// Finance.
    Finance,
    /// Engineering and facilities.
    Engineering,
    /// Business development.
    #[serde(rename = "Business Development")]
    BusinessDevelopment,
    /// Regulatory affairs.
    Regulatory,
    /// Research and development.
    #[serde(rename = "R&D")]
    ResearchDevelopment,
    /// Sales.
    Sales,
    /// Marketing.
    Marketing,
    /// Production.
    Production,
    /// Supply chain and logistics.
    #[serde(rename = "Supply Chain")]
    SupplyChain,
    /// Quality assurance.
    #[serde(rename = "Quality Assurance")]
    QualityAssurance,
    /// Quality control.
    #[serde(rename = "Quality Control")]
    QualityControl,
    /// Export.
    Export,
    /// Information technology.
    #[serde(rename = "IT")]
    It,
}

impl Department {
    /// All departments, in directory order.
    pub const ALL: [Department; 14] = [
        Self::Executive,
        Self::Finance,
        Self::Engineering,
        Self::BusinessDevelopment,
        Self::Regulatory,
        Self::ResearchDevelopment,
        Self::Sales,
        Self::Marketing,
        Self::Production,
        Self::SupplyChain,
        Self::QualityAssurance,
        Self::QualityControl,
        Self::Export,
        Self::It,
    ];

    /// Return the department as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "Executive",
            Self::Finance => "Finance",
            Self::Engineering => "Engineering",
            Self::BusinessDevelopment => "Business Development",
            Self::Regulatory => "Regulatory",
            Self::ResearchDevelopment => "R&D",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Production => "Production",
            Self::SupplyChain => "Supply Chain",
            Self::QualityAssurance => "Quality Assurance",
            Self::QualityControl => "Quality Control",
            Self::Export => "Export",
            Self::It => "IT",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| AppError::validation(format!("Invalid department: '{s}'")))
    }
}

/// Cross-department working teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Not assigned to a team.
    #[default]
    None,
    /// The Achievers team.
    Achievers,
    /// The Passionate team.
    Passionate,
    /// The Concord team.
    Concord,
    /// The Dynamic team.
    Dynamic,
}

/// Sales regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Not assigned to a region.
    #[default]
    None,
    /// Sales region 1.
    #[serde(rename = "Region 1")]
    Region1,
    /// Sales region 2.
    #[serde(rename = "Region 2")]
    Region2,
    /// Sales region 3.
    #[serde(rename = "Region 3")]
    Region3,
}

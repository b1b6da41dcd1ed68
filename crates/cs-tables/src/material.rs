//! Conductor materials, installation methods and supply phases.

use crate::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conductor material. Each material has its own reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Copper,
    #[serde(alias = "aluminum")]
    Aluminium,
}

impl Material {
    pub const ALL: [Material; 2] = [Material::Copper, Material::Aluminium];

    pub fn as_str(self) -> &'static str {
        match self {
            Material::Copper => "copper",
            Material::Aluminium => "aluminium",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copper" | "cu" => Ok(Material::Copper),
            "aluminium" | "aluminum" | "al" => Ok(Material::Aluminium),
            _ => Err(TableError::UnknownMaterial(s.to_string())),
        }
    }
}

/// Physical routing of the cable, which sets how well it sheds heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallationMethod {
    /// Direct in ground
    Ground,
    /// Drawn through ducts
    Ducts,
    /// Free air, trays and ladders
    Air,
}

impl InstallationMethod {
    pub const ALL: [InstallationMethod; 3] = [
        InstallationMethod::Ground,
        InstallationMethod::Ducts,
        InstallationMethod::Air,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstallationMethod::Ground => "ground",
            InstallationMethod::Ducts => "ducts",
            InstallationMethod::Air => "air",
        }
    }
}

impl fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallationMethod {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ground" | "underground" => Ok(InstallationMethod::Ground),
            "ducts" | "duct" => Ok(InstallationMethod::Ducts),
            "air" | "free-air" | "free_air" => Ok(InstallationMethod::Air),
            _ => Err(TableError::UnknownInstallationMethod(s.to_string())),
        }
    }
}

/// Supply phase configuration, selecting which voltage-drop coefficient applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SinglePhase,
    ThreePhase,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::SinglePhase => f.write_str("1-phase"),
            Phase::ThreePhase => f.write_str("3-phase"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_parses_aliases() {
        assert_eq!("Copper".parse::<Material>().unwrap(), Material::Copper);
        assert_eq!(" cu ".parse::<Material>().unwrap(), Material::Copper);
        assert_eq!("aluminum".parse::<Material>().unwrap(), Material::Aluminium);
        assert_eq!("AL".parse::<Material>().unwrap(), Material::Aluminium);
    }

    #[test]
    fn unknown_material_is_rejected() {
        let err = "gold".parse::<Material>().unwrap_err();
        assert!(matches!(err, TableError::UnknownMaterial(ref s) if s == "gold"));
    }

    #[test]
    fn installation_method_round_trips_through_display() {
        for method in InstallationMethod::ALL {
            let parsed: InstallationMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("conduit".parse::<InstallationMethod>().is_err());
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&Material::Aluminium).unwrap();
        assert_eq!(json, "\"aluminium\"");
        let parsed: Material = serde_json::from_str("\"aluminum\"").unwrap();
        assert_eq!(parsed, Material::Aluminium);
        let method: InstallationMethod = serde_json::from_str("\"ducts\"").unwrap();
        assert_eq!(method, InstallationMethod::Ducts);
    }
}

//! The closed catalog of Eurostat `geo` codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{LifexpError, Result};

/// A validated member of the region catalog.
///
/// Covers every `geo` code appearing in the Eurostat life-expectancy
/// dataset: individual countries plus aggregate/series codes (EU and EA
/// compositions, EEA, EFTA). Aggregates are valid catalog members but are
/// rejected as filter targets by [`Region::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Al,
    Am,
    At,
    Az,
    Be,
    Bg,
    By,
    Ch,
    Cy,
    Cz,
    De,
    Dk,
    Ee,
    El,
    Es,
    Fi,
    Fr,
    Ge,
    Hr,
    Hu,
    Ie,
    Is,
    It,
    Li,
    Lt,
    Lu,
    Lv,
    Md,
    Me,
    Mk,
    Mt,
    Nl,
    No,
    Pl,
    Pt,
    Ro,
    Rs,
    Ru,
    Se,
    Si,
    Sk,
    Sm,
    Tr,
    Ua,
    Uk,
    Xk,
    // Aggregate and series codes
    DeTot,
    Ea18,
    Ea19,
    Eea30,
    Eea31,
    Efta,
    Eu27Former,
    Eu27,
    Eu28,
    Fx,
}

impl Region {
    /// Every member of the catalog, countries first.
    pub const ALL: &'static [Region] = &[
        Region::Al,
        Region::Am,
        Region::At,
        Region::Az,
        Region::Be,
        Region::Bg,
        Region::By,
        Region::Ch,
        Region::Cy,
        Region::Cz,
        Region::De,
        Region::Dk,
        Region::Ee,
        Region::El,
        Region::Es,
        Region::Fi,
        Region::Fr,
        Region::Ge,
        Region::Hr,
        Region::Hu,
        Region::Ie,
        Region::Is,
        Region::It,
        Region::Li,
        Region::Lt,
        Region::Lu,
        Region::Lv,
        Region::Md,
        Region::Me,
        Region::Mk,
        Region::Mt,
        Region::Nl,
        Region::No,
        Region::Pl,
        Region::Pt,
        Region::Ro,
        Region::Rs,
        Region::Ru,
        Region::Se,
        Region::Si,
        Region::Sk,
        Region::Sm,
        Region::Tr,
        Region::Ua,
        Region::Uk,
        Region::Xk,
        Region::DeTot,
        Region::Ea18,
        Region::Ea19,
        Region::Eea30,
        Region::Eea31,
        Region::Efta,
        Region::Eu27Former,
        Region::Eu27,
        Region::Eu28,
        Region::Fx,
    ];

    /// The exact Eurostat code for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Al => "AL",
            Region::Am => "AM",
            Region::At => "AT",
            Region::Az => "AZ",
            Region::Be => "BE",
            Region::Bg => "BG",
            Region::By => "BY",
            Region::Ch => "CH",
            Region::Cy => "CY",
            Region::Cz => "CZ",
            Region::De => "DE",
            Region::Dk => "DK",
            Region::Ee => "EE",
            Region::El => "EL",
            Region::Es => "ES",
            Region::Fi => "FI",
            Region::Fr => "FR",
            Region::Ge => "GE",
            Region::Hr => "HR",
            Region::Hu => "HU",
            Region::Ie => "IE",
            Region::Is => "IS",
            Region::It => "IT",
            Region::Li => "LI",
            Region::Lt => "LT",
            Region::Lu => "LU",
            Region::Lv => "LV",
            Region::Md => "MD",
            Region::Me => "ME",
            Region::Mk => "MK",
            Region::Mt => "MT",
            Region::Nl => "NL",
            Region::No => "NO",
            Region::Pl => "PL",
            Region::Pt => "PT",
            Region::Ro => "RO",
            Region::Rs => "RS",
            Region::Ru => "RU",
            Region::Se => "SE",
            Region::Si => "SI",
            Region::Sk => "SK",
            Region::Sm => "SM",
            Region::Tr => "TR",
            Region::Ua => "UA",
            Region::Uk => "UK",
            Region::Xk => "XK",
            Region::DeTot => "DE_TOT",
            Region::Ea18 => "EA18",
            Region::Ea19 => "EA19",
            Region::Eea30 => "EEA30_2007",
            Region::Eea31 => "EEA31",
            Region::Efta => "EFTA",
            Region::Eu27Former => "EU27_2007",
            Region::Eu27 => "EU27_2020",
            Region::Eu28 => "EU28",
            Region::Fx => "FX",
        }
    }

    /// Look up a code in the catalog. Case-insensitive.
    pub fn from_code(code: &str) -> Result<Region> {
        let upper = code.trim().to_ascii_uppercase();
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.code() == upper)
            .ok_or_else(|| LifexpError::InvalidRegion(code.to_string()))
    }

    /// Whether this code denotes an individual country rather than an
    /// aggregate or statistical series.
    pub fn is_country(&self) -> bool {
        !matches!(
            self,
            Region::DeTot
                | Region::Ea18
                | Region::Ea19
                | Region::Eea30
                | Region::Eea31
                | Region::Efta
                | Region::Eu27Former
                | Region::Eu27
                | Region::Eu28
                | Region::Fx
        )
    }

    /// The filterable members of the catalog.
    pub fn countries() -> impl Iterator<Item = Region> {
        Region::ALL.iter().copied().filter(Region::is_country)
    }

    /// Check that this region is a valid filter target.
    ///
    /// Aggregate codes exist in the raw data but are not meaningful
    /// filter targets for a per-country output artifact.
    pub fn validate(&self) -> Result<()> {
        if self.is_country() {
            Ok(())
        } else {
            Err(LifexpError::InvalidRegion(self.code().to_string()))
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = LifexpError;

    fn from_str(s: &str) -> Result<Region> {
        Region::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Region::from_code("PT").unwrap(), Region::Pt);
        assert_eq!(Region::from_code("AL").unwrap(), Region::Al);
        assert_eq!(Region::from_code("EU27_2020").unwrap(), Region::Eu27);
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(Region::from_code("pt").unwrap(), Region::Pt);
        assert_eq!(Region::from_code(" de_tot ").unwrap(), Region::DeTot);
    }

    #[test]
    fn test_from_code_invalid() {
        let err = Region::from_code("ZZ").unwrap_err();
        assert!(matches!(err, LifexpError::InvalidRegion(_)));
    }

    #[test]
    fn test_aggregates_are_not_countries() {
        assert!(Region::Pt.is_country());
        assert!(!Region::Eu28.is_country());
        assert!(!Region::DeTot.is_country());
        assert!(Region::Pt.validate().is_ok());
        assert!(Region::Ea19.validate().is_err());
    }

    #[test]
    fn test_countries_excludes_aggregates() {
        let countries: Vec<Region> = Region::countries().collect();
        assert_eq!(countries.len(), Region::ALL.len() - 10);
        assert!(!countries.contains(&Region::Efta));
    }

    #[test]
    fn test_roundtrip_all_codes() {
        for region in Region::ALL {
            assert_eq!(Region::from_code(region.code()).unwrap(), *region);
        }
    }
}

//! Grid supply point (GSP) group codes and the regions they name.

use std::fmt;

/// UK electricity distribution regions, keyed by GSP group letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Eastern England
    A,
    /// East Midlands
    B,
    /// London
    C,
    /// Merseyside and North Wales
    D,
    /// West Midlands
    E,
    /// North Eastern England
    F,
    /// North Western England
    G,
    /// Southern England
    H,
    /// South Eastern England
    J,
    /// Southern Wales
    K,
    /// South Western England
    L,
    /// Yorkshire
    M,
    /// Southern Scotland
    N,
    /// Northern Scotland
    P,
}

impl Region {
    /// The single-letter group code.
    pub fn code(&self) -> &'static str {
        match self {
            Region::A => "A",
            Region::B => "B",
            Region::C => "C",
            Region::D => "D",
            Region::E => "E",
            Region::F => "F",
            Region::G => "G",
            Region::H => "H",
            Region::J => "J",
            Region::K => "K",
            Region::L => "L",
            Region::M => "M",
            Region::N => "N",
            Region::P => "P",
        }
    }

    /// Human-readable region name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::A => "Eastern England",
            Region::B => "East Midlands",
            Region::C => "London",
            Region::D => "Merseyside and North Wales",
            Region::E => "West Midlands",
            Region::F => "North Eastern England",
            Region::G => "North Western England",
            Region::H => "Southern England",
            Region::J => "South Eastern England",
            Region::K => "Southern Wales",
            Region::L => "South Western England",
            Region::M => "Yorkshire",
            Region::N => "Southern Scotland",
            Region::P => "Northern Scotland",
        }
    }

    /// All fourteen regions.
    pub fn all() -> &'static [Region] {
        &[
            Region::A,
            Region::B,
            Region::C,
            Region::D,
            Region::E,
            Region::F,
            Region::G,
            Region::H,
            Region::J,
            Region::K,
            Region::L,
            Region::M,
            Region::N,
            Region::P,
        ]
    }

    /// Look up a GSP group code such as `_A` or `a`.
    pub fn from_gsp_code(code: &str) -> Option<Region> {
        let cleaned = clean_gsp_code(code);
        Region::all().iter().copied().find(|r| r.code() == cleaned)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn clean_gsp_code(code: &str) -> String {
    code.to_uppercase().replace('_', "")
}

/// Resolve a GSP group code to its region name.
///
/// Unknown codes do not fail: they come back as `Unknown Region (<code>)`
/// with the cleaned code, so a bad lookup is visible without aborting.
///
/// # Example
///
/// ```
/// use octopus_energy::region_name_from_gsp_code;
///
/// assert_eq!(region_name_from_gsp_code("_C"), "London");
/// assert_eq!(region_name_from_gsp_code("z"), "Unknown Region (Z)");
/// ```
pub fn region_name_from_gsp_code(code: &str) -> String {
    match Region::from_gsp_code(code) {
        Some(region) => region.name().to_string(),
        None => format!("Unknown Region ({})", clean_gsp_code(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(region_name_from_gsp_code("a"), "Eastern England");
        assert_eq!(region_name_from_gsp_code("_A"), "Eastern England");
        assert_eq!(region_name_from_gsp_code("A"), "Eastern England");
        assert_eq!(region_name_from_gsp_code("_p"), "Northern Scotland");
    }

    #[test]
    fn test_unknown_codes_soft_fail() {
        assert_eq!(region_name_from_gsp_code("Z"), "Unknown Region (Z)");
        assert_eq!(region_name_from_gsp_code("_i"), "Unknown Region (I)");
        assert_eq!(region_name_from_gsp_code("o"), "Unknown Region (O)");
        assert_eq!(region_name_from_gsp_code(""), "Unknown Region ()");
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(Region::all().len(), 14);
        for region in Region::all() {
            assert_eq!(Region::from_gsp_code(region.code()), Some(*region));
        }
    }
}

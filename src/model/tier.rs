use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }

    /// Marker colour used by the vulnerability map.
    pub fn color(self) -> &'static str {
        match self {
            Tier::Low => "#90EE90",
            Tier::Medium => "orange",
            Tier::High => "red",
        }
    }
}

pub fn tier_order() -> &'static [Tier] {
    &[Tier::High, Tier::Medium, Tier::Low]
}

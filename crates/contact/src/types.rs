use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Service categories offered on the site. The wire value (stored in
/// `contact_submissions.service_interest` and `service_inquiries.service_type`)
/// is the kebab-case form used by the select options.
#[derive(EnumString, Display, VariantArray, Clone, Debug, PartialEq, AsRefStr)]
pub enum ServiceCategory {
    #[strum(serialize = "it-infrastructure")]
    ItInfrastructure,
    #[strum(serialize = "networking")]
    Networking,
    #[strum(serialize = "cctv")]
    Cctv,
    #[strum(serialize = "power-backup")]
    PowerBackup,
    #[strum(serialize = "solar-energy")]
    SolarEnergy,
    #[strum(serialize = "engineering")]
    Engineering,
    #[strum(serialize = "consultation")]
    Consultation,
}

impl ServiceCategory {
    /// Human-readable label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ItInfrastructure => "IT Infrastructure",
            Self::Networking => "Networking Solutions",
            Self::Cctv => "CCTV & Security Systems",
            Self::PowerBackup => "Power Backup Solutions",
            Self::SolarEnergy => "Solar Energy Systems",
            Self::Engineering => "Engineering Services",
            Self::Consultation => "General Consultation",
        }
    }
}

/// Budget bands for the detailed quote form.
#[derive(EnumString, Display, VariantArray, Clone, Debug, PartialEq, AsRefStr)]
pub enum BudgetRange {
    #[strum(serialize = "under-1lakh")]
    Under1Lakh,
    #[strum(serialize = "1-5lakh")]
    OneToFiveLakh,
    #[strum(serialize = "5-10lakh")]
    FiveToTenLakh,
    #[strum(serialize = "10-25lakh")]
    TenToTwentyFiveLakh,
    #[strum(serialize = "above-25lakh")]
    Above25Lakh,
    #[strum(serialize = "consultation")]
    Consultation,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Under1Lakh => "Under ₹1 Lakh",
            Self::OneToFiveLakh => "₹1 - 5 Lakhs",
            Self::FiveToTenLakh => "₹5 - 10 Lakhs",
            Self::TenToTwentyFiveLakh => "₹10 - 25 Lakhs",
            Self::Above25Lakh => "Above ₹25 Lakhs",
            Self::Consultation => "Need Consultation",
        }
    }
}

/// Initial status written with every new lead row.
pub const STATUS_NEW: &str = "new";

/// Fixed tag recorded on every inquiry row created from the website form.
pub const INQUIRY_SOURCE_WEBSITE: &str = "website";

/// Default urgency for inquiries derived from a form submission.
pub const URGENCY_NORMAL: &str = "normal";

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn service_category_round_trips_wire_values() {
        assert_eq!(
            ServiceCategory::from_str("solar-energy").unwrap(),
            ServiceCategory::SolarEnergy
        );
        assert_eq!(ServiceCategory::SolarEnergy.to_string(), "solar-energy");
        assert!(ServiceCategory::from_str("time-travel").is_err());
    }

    #[test]
    fn budget_range_round_trips_wire_values() {
        assert_eq!(
            BudgetRange::from_str("1-5lakh").unwrap(),
            BudgetRange::OneToFiveLakh
        );
        assert_eq!(BudgetRange::Above25Lakh.as_ref(), "above-25lakh");
    }
}

//! The festival table.
//!
//! Declaration order is output order: monthly observances first, then solar
//! ingresses, then the annual lunar festivals roughly in calendar order.

use chrono::Weekday;
use panchang_base::{Masa, Paksha, Rashi, Tithi};

use crate::festival::{
    FestivalNames, FestivalRule, LunarMatch, MonthSelector, RuleCondition, TimingPredicate,
};

const PRADOSH_PREFIXES: &[(Weekday, &str)] = &[
    (Weekday::Mon, "Soma"),
    (Weekday::Tue, "Bhauma"),
    (Weekday::Wed, "Budha"),
    (Weekday::Thu, "Guru"),
    (Weekday::Fri, "Shukra"),
    (Weekday::Sat, "Shani"),
    (Weekday::Sun, "Ravi"),
];

const fn on(months: MonthSelector, paksha: Option<Paksha>, tithi: Tithi) -> LunarMatch {
    LunarMatch {
        months,
        paksha,
        tithi,
    }
}

const fn monthly(names: &'static [&'static str], paksha: Option<Paksha>, tithi: Tithi) -> FestivalRule {
    FestivalRule {
        names: FestivalNames::Fixed(names),
        condition: RuleCondition::LunarMatch(on(MonthSelector::Any, paksha, tithi)),
    }
}

const fn annual(
    names: &'static [&'static str],
    masa: Masa,
    paksha: Option<Paksha>,
    tithi: Tithi,
) -> FestivalRule {
    FestivalRule {
        names: FestivalNames::Fixed(names),
        condition: RuleCondition::LunarMatch(on(MonthSelector::One(masa), paksha, tithi)),
    }
}

const fn refined(
    names: &'static [&'static str],
    months: MonthSelector,
    paksha: Option<Paksha>,
    tithi: Tithi,
    predicate: TimingPredicate,
) -> FestivalRule {
    FestivalRule {
        names: FestivalNames::Fixed(names),
        condition: RuleCondition::TimingRefinement {
            base: on(months, paksha, tithi),
            predicate,
        },
    }
}

const fn ingress(names: &'static [&'static str], target: Rashi) -> FestivalRule {
    FestivalRule {
        names: FestivalNames::Fixed(names),
        condition: RuleCondition::SolarCrossing { target },
    }
}

const SHUKLA: Option<Paksha> = Some(Paksha::Shukla);
const KRISHNA: Option<Paksha> = Some(Paksha::Krishna);

pub const FESTIVAL_RULES: &[FestivalRule] = &[
    // Monthly
    monthly(&["Amavasya"], None, Tithi::Amavasya),
    monthly(&["Purnima"], None, Tithi::Purnima),
    monthly(&["Ekadashi"], None, Tithi::Ekadashi),
    monthly(&["Sankashti Chaturthi"], KRISHNA, Tithi::Chaturthi),
    monthly(&["Masik Shivaratri"], KRISHNA, Tithi::Chaturdashi),
    FestivalRule {
        names: FestivalNames::WeekdayPrefixed {
            base: "Pradosh Vrat",
            prefixes: PRADOSH_PREFIXES,
        },
        condition: RuleCondition::LunarMatch(on(MonthSelector::Any, None, Tithi::Trayodashi)),
    },
    monthly(&["Chandra Darshana"], SHUKLA, Tithi::Pratipada),
    // Solar
    ingress(&["Makar Sankranti", "Pongal"], Rashi::Makara),
    ingress(&["Baisakhi", "Vaisakhi"], Rashi::Mesha),
    // Annual
    annual(&["Vasant Panchami", "Saraswati Puja"], Masa::Magha, SHUKLA, Tithi::Panchami),
    refined(
        &["Maha Shivaratri"],
        MonthSelector::AnyOf(&[Masa::Magha, Masa::Phalguna]),
        KRISHNA,
        Tithi::Chaturdashi,
        TimingPredicate::AtLocalMidnight,
    ),
    annual(
        &["Holika Dahan", "Chhoti Holi", "Phalguna Purnima"],
        Masa::Phalguna,
        None,
        Tithi::Purnima,
    ),
    annual(
        &["Holi", "Dhulandi", "Rangwali Holi"],
        Masa::Phalguna,
        KRISHNA,
        Tithi::Pratipada,
    ),
    FestivalRule {
        names: FestivalNames::Fixed(&["Ugadi", "Gudi Padwa", "Chaitra Navratri Begins"]),
        condition: RuleCondition::YearStart,
    },
    annual(&["Rama Navami"], Masa::Chaitra, SHUKLA, Tithi::Navami),
    annual(&["Hanuman Jayanti"], Masa::Chaitra, None, Tithi::Purnima),
    annual(&["Akshaya Tritiya"], Masa::Vaishakha, SHUKLA, Tithi::Tritiya),
    annual(&["Buddha Purnima"], Masa::Vaishakha, None, Tithi::Purnima),
    annual(&["Nirjala Ekadashi"], Masa::Jyeshtha, SHUKLA, Tithi::Ekadashi),
    annual(&["Ratha Yatra"], Masa::Ashadha, SHUKLA, Tithi::Dvitiya),
    annual(&["Devshayani Ekadashi"], Masa::Ashadha, SHUKLA, Tithi::Ekadashi),
    annual(&["Guru Purnima"], Masa::Ashadha, None, Tithi::Purnima),
    annual(&["Hariyali Teej"], Masa::Shravana, SHUKLA, Tithi::Tritiya),
    annual(&["Nag Panchami"], Masa::Shravana, SHUKLA, Tithi::Panchami),
    annual(
        &["Raksha Bandhan", "Shravana Purnima"],
        Masa::Shravana,
        None,
        Tithi::Purnima,
    ),
    refined(
        &["Janmashtami", "Krishna Jayanti"],
        MonthSelector::AnyOf(&[Masa::Shravana, Masa::Bhadrapada]),
        KRISHNA,
        Tithi::Ashtami,
        TimingPredicate::AtLocalMidnight,
    ),
    refined(
        &["Ganesh Chaturthi", "Vinayaka Chaturthi"],
        MonthSelector::One(Masa::Bhadrapada),
        SHUKLA,
        Tithi::Chaturthi,
        TimingPredicate::DuringMadhyana,
    ),
    annual(
        &["Anant Chaturdashi", "Ganesh Visarjan"],
        Masa::Bhadrapada,
        SHUKLA,
        Tithi::Chaturdashi,
    ),
    annual(&["Pitru Paksha Begins"], Masa::Bhadrapada, KRISHNA, Tithi::Pratipada),
    annual(&["Mahalaya Amavasya"], Masa::Bhadrapada, None, Tithi::Amavasya),
    annual(&["Sharad Navratri Begins"], Masa::Ashwin, SHUKLA, Tithi::Pratipada),
    annual(&["Maha Saptami"], Masa::Ashwin, SHUKLA, Tithi::Saptami),
    annual(&["Durga Ashtami", "Maha Ashtami"], Masa::Ashwin, SHUKLA, Tithi::Ashtami),
    annual(&["Maha Navami"], Masa::Ashwin, SHUKLA, Tithi::Navami),
    annual(&["Vijayadashami", "Dussehra"], Masa::Ashwin, SHUKLA, Tithi::Dashami),
    annual(&["Sharad Purnima"], Masa::Ashwin, None, Tithi::Purnima),
    annual(&["Karwa Chauth"], Masa::Kartika, KRISHNA, Tithi::Chaturthi),
    annual(&["Dhanteras"], Masa::Kartika, KRISHNA, Tithi::Trayodashi),
    annual(
        &["Naraka Chaturdashi", "Choti Diwali"],
        Masa::Kartika,
        KRISHNA,
        Tithi::Chaturdashi,
    ),
    annual(&["Diwali", "Lakshmi Puja"], Masa::Kartika, None, Tithi::Amavasya),
    annual(&["Govardhan Puja"], Masa::Kartika, SHUKLA, Tithi::Pratipada),
    annual(&["Bhai Dooj", "Yama Dwitiya"], Masa::Kartika, SHUKLA, Tithi::Dvitiya),
    annual(&["Chhath Puja"], Masa::Kartika, SHUKLA, Tithi::Shashthi),
    annual(&["Devutthana Ekadashi"], Masa::Kartika, SHUKLA, Tithi::Ekadashi),
    annual(
        &["Kartik Purnima", "Dev Deepawali"],
        Masa::Kartika,
        None,
        Tithi::Purnima,
    ),
    annual(&["Gita Jayanti"], Masa::Margashirsha, SHUKLA, Tithi::Ekadashi),
    annual(&["Ratha Saptami"], Masa::Magha, SHUKLA, Tithi::Saptami),
    annual(&["Magha Purnima"], Masa::Magha, None, Tithi::Purnima),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_names() -> Vec<&'static str> {
        FESTIVAL_RULES
            .iter()
            .flat_map(|r| match r.names {
                FestivalNames::Fixed(names) => names.to_vec(),
                FestivalNames::WeekdayPrefixed { base, .. } => vec![base],
            })
            .collect()
    }

    #[test]
    fn names_are_unique() {
        let names = all_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn monthly_rules_come_first() {
        let first_specific = FESTIVAL_RULES
            .iter()
            .position(|r| !matches!(r.condition, RuleCondition::LunarMatch(LunarMatch { months: MonthSelector::Any, .. })))
            .unwrap();
        assert_eq!(first_specific, 7);
        assert!(FESTIVAL_RULES[first_specific..].iter().all(|r| !matches!(
            r.condition,
            RuleCondition::LunarMatch(LunarMatch {
                months: MonthSelector::Any,
                ..
            })
        )));
    }

    #[test]
    fn pradosh_has_a_prefix_for_every_weekday() {
        assert_eq!(PRADOSH_PREFIXES.len(), 7);
        let days: HashSet<_> = PRADOSH_PREFIXES.iter().map(|(d, _)| *d).collect();
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn ugadi_is_the_only_year_start_rule() {
        let year_start: Vec<_> = FESTIVAL_RULES
            .iter()
            .filter(|r| r.condition == RuleCondition::YearStart)
            .collect();
        assert_eq!(year_start.len(), 1);
        assert!(matches!(year_start[0].names, FestivalNames::Fixed(["Ugadi", ..])));
    }

    #[test]
    fn every_timing_predicate_gates_a_lunar_rule() {
        for rule in FESTIVAL_RULES {
            if let RuleCondition::TimingRefinement { base, .. } = rule.condition {
                assert!(!matches!(base.months, MonthSelector::Any));
            }
        }
    }
}

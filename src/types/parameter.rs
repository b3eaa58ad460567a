use clap::ValueEnum;
use std::fmt;

pub const PARAMETER_COUNT: usize = 7;

/// Ordinal position of an option within its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn key(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

// Each parameter gets its own closed option enum. `ALL` is listed low to high
// so that `ALL[level as usize]` is the option sitting at `level`.
macro_rules! parameter_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($label:literal, $level:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: [$name; 3] = [$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn level(self) -> Level {
                match self {
                    $($name::$variant => Level::$level),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.into_iter().find(|option| option.label() == label)
            }

            pub fn at(level: Level) -> Self {
                Self::ALL[level as usize]
            }
        }
    };
}

parameter_options!(CapitalAvailability {
    Low => ("Low", Low),
    Medium => ("Medium", Medium),
    High => ("High", High),
});

parameter_options!(TechRefreshCycle {
    Rare => ("Rare", Low),
    Moderate => ("Moderate", Medium),
    Frequent => ("Frequent", High),
});

parameter_options!(TaxPreference {
    NotImportant => ("Not Important", Low),
    Somewhat => ("Somewhat", Medium),
    VeryImportant => ("Very Important", High),
});

parameter_options!(MaintenanceSupport {
    Low => ("Low", Low),
    Medium => ("Medium", Medium),
    High => ("High", High),
});

parameter_options!(ScalabilityNeeds {
    Low => ("Low", Low),
    Medium => ("Medium", Medium),
    High => ("High", High),
});

parameter_options!(AssetLongevity {
    Short => ("Short", Low),
    Medium => ("Medium", Medium),
    Long => ("Long", High),
});

parameter_options!(DisposalComplexity {
    Easy => ("Easy", Low),
    Moderate => ("Moderate", Medium),
    Complex => ("Complex", High),
});

/// One evaluation dimension. Declaration order is the weight vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    CapitalAvailability,
    TechRefreshCycle,
    TaxPreference,
    MaintenanceSupport,
    ScalabilityNeeds,
    AssetLongevity,
    DisposalComplexity,
}

impl Parameter {
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Parameter::CapitalAvailability,
        Parameter::TechRefreshCycle,
        Parameter::TaxPreference,
        Parameter::MaintenanceSupport,
        Parameter::ScalabilityNeeds,
        Parameter::AssetLongevity,
        Parameter::DisposalComplexity,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Parameter::CapitalAvailability => "Capital Availability",
            Parameter::TechRefreshCycle => "Tech Refresh Cycle",
            Parameter::TaxPreference => "Tax Preference",
            Parameter::MaintenanceSupport => "Maintenance & Support",
            Parameter::ScalabilityNeeds => "Scalability Needs",
            Parameter::AssetLongevity => "Asset Longevity",
            Parameter::DisposalComplexity => "Disposal Complexity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|parameter| parameter.name().eq_ignore_ascii_case(name))
    }

    /// Option labels ordered low to high.
    pub fn options(self) -> [&'static str; 3] {
        Level::ALL.map(|level| self.answer_at(level).label())
    }

    /// Resolves a label against this parameter's own options only.
    pub fn parse_answer(self, label: &str) -> Option<Answer> {
        let label = label.trim();
        match self {
            Parameter::CapitalAvailability => {
                CapitalAvailability::from_label(label).map(Answer::CapitalAvailability)
            }
            Parameter::TechRefreshCycle => {
                TechRefreshCycle::from_label(label).map(Answer::TechRefreshCycle)
            }
            Parameter::TaxPreference => TaxPreference::from_label(label).map(Answer::TaxPreference),
            Parameter::MaintenanceSupport => {
                MaintenanceSupport::from_label(label).map(Answer::MaintenanceSupport)
            }
            Parameter::ScalabilityNeeds => {
                ScalabilityNeeds::from_label(label).map(Answer::ScalabilityNeeds)
            }
            Parameter::AssetLongevity => {
                AssetLongevity::from_label(label).map(Answer::AssetLongevity)
            }
            Parameter::DisposalComplexity => {
                DisposalComplexity::from_label(label).map(Answer::DisposalComplexity)
            }
        }
    }

    pub fn answer_at(self, level: Level) -> Answer {
        match self {
            Parameter::CapitalAvailability => {
                Answer::CapitalAvailability(CapitalAvailability::at(level))
            }
            Parameter::TechRefreshCycle => Answer::TechRefreshCycle(TechRefreshCycle::at(level)),
            Parameter::TaxPreference => Answer::TaxPreference(TaxPreference::at(level)),
            Parameter::MaintenanceSupport => {
                Answer::MaintenanceSupport(MaintenanceSupport::at(level))
            }
            Parameter::ScalabilityNeeds => Answer::ScalabilityNeeds(ScalabilityNeeds::at(level)),
            Parameter::AssetLongevity => Answer::AssetLongevity(AssetLongevity::at(level)),
            Parameter::DisposalComplexity => {
                Answer::DisposalComplexity(DisposalComplexity::at(level))
            }
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selected option, tagged with the parameter it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    CapitalAvailability(CapitalAvailability),
    TechRefreshCycle(TechRefreshCycle),
    TaxPreference(TaxPreference),
    MaintenanceSupport(MaintenanceSupport),
    ScalabilityNeeds(ScalabilityNeeds),
    AssetLongevity(AssetLongevity),
    DisposalComplexity(DisposalComplexity),
}

impl Answer {
    pub fn parameter(self) -> Parameter {
        match self {
            Answer::CapitalAvailability(_) => Parameter::CapitalAvailability,
            Answer::TechRefreshCycle(_) => Parameter::TechRefreshCycle,
            Answer::TaxPreference(_) => Parameter::TaxPreference,
            Answer::MaintenanceSupport(_) => Parameter::MaintenanceSupport,
            Answer::ScalabilityNeeds(_) => Parameter::ScalabilityNeeds,
            Answer::AssetLongevity(_) => Parameter::AssetLongevity,
            Answer::DisposalComplexity(_) => Parameter::DisposalComplexity,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Answer::CapitalAvailability(option) => option.level(),
            Answer::TechRefreshCycle(option) => option.level(),
            Answer::TaxPreference(option) => option.level(),
            Answer::MaintenanceSupport(option) => option.level(),
            Answer::ScalabilityNeeds(option) => option.level(),
            Answer::AssetLongevity(option) => option.level(),
            Answer::DisposalComplexity(option) => option.level(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::CapitalAvailability(option) => option.label(),
            Answer::TechRefreshCycle(option) => option.label(),
            Answer::TaxPreference(option) => option.label(),
            Answer::MaintenanceSupport(option) => option.label(),
            Answer::ScalabilityNeeds(option) => option.label(),
            Answer::AssetLongevity(option) => option.label(),
            Answer::DisposalComplexity(option) => option.label(),
        }
    }
}

/// One slot per parameter; a slot can only hold an answer of its own parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    slots: [Option<Answer>; PARAMETER_COUNT],
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every parameter answered at the same ordinal level.
    #[cfg(test)]
    pub fn uniform(level: Level) -> Self {
        let mut answers = Self::new();
        for parameter in Parameter::ALL {
            answers.set(parameter.answer_at(level));
        }
        answers
    }

    pub fn with(mut self, answer: Answer) -> Self {
        self.set(answer);
        self
    }

    pub fn set(&mut self, answer: Answer) {
        self.slots[answer.parameter().index()] = Some(answer);
    }

    pub fn get(&self, parameter: Parameter) -> Option<Answer> {
        self.slots[parameter.index()]
    }

    pub fn missing(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|parameter| self.get(*parameter).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_listed_in_weight_order() {
        let names: Vec<_> = Parameter::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "Capital Availability",
                "Tech Refresh Cycle",
                "Tax Preference",
                "Maintenance & Support",
                "Scalability Needs",
                "Asset Longevity",
                "Disposal Complexity",
            ]
        );
        for (index, parameter) in Parameter::ALL.iter().enumerate() {
            assert_eq!(parameter.index(), index);
        }
    }

    #[test]
    fn options_are_ordered_low_to_high() {
        assert_eq!(
            Parameter::TaxPreference.options(),
            ["Not Important", "Somewhat", "Very Important"]
        );
        assert_eq!(
            Parameter::AssetLongevity.options(),
            ["Short", "Medium", "Long"]
        );
        for parameter in Parameter::ALL {
            for (level, label) in Level::ALL.into_iter().zip(parameter.options()) {
                let answer = parameter
                    .parse_answer(label)
                    .expect("listed option should parse");
                assert_eq!(answer.level(), level);
                assert_eq!(answer.parameter(), parameter);
            }
        }
    }

    #[test]
    fn labels_do_not_leak_across_parameters() {
        assert!(Parameter::CapitalAvailability.parse_answer("Long").is_none());
        assert!(Parameter::AssetLongevity.parse_answer("High").is_none());
        assert!(Parameter::TechRefreshCycle.parse_answer("Medium").is_none());
        assert_eq!(
            Parameter::AssetLongevity.parse_answer("Long"),
            Some(Answer::AssetLongevity(AssetLongevity::Long))
        );
    }

    #[test]
    fn parse_answer_trims_but_is_case_sensitive() {
        assert_eq!(
            Parameter::DisposalComplexity.parse_answer("  Complex "),
            Some(Answer::DisposalComplexity(DisposalComplexity::Complex))
        );
        assert!(Parameter::DisposalComplexity.parse_answer("complex").is_none());
        assert!(Parameter::DisposalComplexity.parse_answer("").is_none());
    }

    #[test]
    fn parameter_lookup_by_name_ignores_case() {
        assert_eq!(
            Parameter::from_name("maintenance & support"),
            Some(Parameter::MaintenanceSupport)
        );
        assert_eq!(Parameter::from_name("Budget"), None);
    }

    #[test]
    fn answer_set_tracks_missing_slots() {
        assert!(AnswerSet::uniform(Level::Medium).missing().is_empty());

        let answers = Parameter::ALL
            .into_iter()
            .filter(|parameter| *parameter != Parameter::ScalabilityNeeds)
            .map(|parameter| parameter.answer_at(Level::Medium))
            .fold(AnswerSet::new(), AnswerSet::with);
        assert_eq!(answers.missing(), vec![Parameter::ScalabilityNeeds]);

        let answers = answers.with(Answer::ScalabilityNeeds(ScalabilityNeeds::High));
        assert!(answers.missing().is_empty());
        assert_eq!(
            answers.get(Parameter::ScalabilityNeeds).map(Answer::label),
            Some("High")
        );
        assert_eq!(AnswerSet::new().missing().len(), PARAMETER_COUNT);
    }
}

//! Rule engine - deterministic ability inference.
//!
//! # Algorithm
//!
//! Passes run in a fixed order over the profile:
//! 1. Major: first rule with an alias inside the major text wins, then stop.
//! 2. Interest: every interest phrase is checked against every interest rule.
//! 3. MBTI: every letter of the code (left to right) applies its rule.
//! 4. Challenge: exact phrase match; suppression first, then direct effects.
//! 5. Finalize: clip every aspect to `[-1, 1]`.
//!
//! Effects use diminishing returns: a delta `d` applied to a current value `v`
//! moves it by `d * (1 - |v|)`.

use tracing::debug;

use super::knowledge_base::builtin_rule_table;
use super::profile::UserProfile;
use super::report::{AbilityReport, RuleFiring};
use super::rules::{matches_any_alias, Effects, Rule, RuleKind, RuleTable};
use crate::domain::foundation::AspectVector;

/// Bounds of every finalized ability value.
pub const ABILITY_MIN: f64 = -1.0;
pub const ABILITY_MAX: f64 = 1.0;

/// Applies one delta with diminishing returns.
pub fn diminished(current: f64, delta: f64) -> f64 {
    let room = 1.0 - current.abs();
    current + delta * room
}

/// Applies each effect to the matching aspect with diminishing returns.
/// Entries naming unknown aspects are skipped.
pub fn apply_effects(abilities: &mut AspectVector, effects: &Effects) {
    for (aspect, delta) in effects.resolved() {
        abilities[aspect] = diminished(abilities[aspect], delta);
    }
}

/// Multiplies strictly positive aspects by their factor. Zero and negative
/// values are left untouched. Entries naming unknown aspects are skipped.
pub fn apply_suppression(abilities: &mut AspectVector, factors: &Effects) {
    for (aspect, factor) in factors.resolved() {
        if abilities[aspect] > 0.0 {
            abilities[aspect] *= factor;
        }
    }
}

/// Runs a rule table over user profiles.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'t> {
    table: &'t RuleTable,
}

impl RuleEngine<'static> {
    /// Engine over the built-in knowledge base.
    pub fn builtin() -> Self {
        Self::new(builtin_rule_table())
    }
}

impl<'t> RuleEngine<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Infers abilities starting from the profile's current vector, stores the
    /// finalized vector on the profile and returns the report.
    pub fn apply(&self, profile: &mut UserProfile) -> AbilityReport {
        let (abilities, fired) = self.infer(profile);
        profile.set_abilities(abilities);
        AbilityReport::new(&abilities, fired)
    }

    /// Pure inference: returns the finalized vector and the fired rules
    /// without touching the profile.
    pub fn infer(&self, profile: &UserProfile) -> (AspectVector, Vec<RuleFiring>) {
        let mut abilities = *profile.abilities();
        let mut fired = Vec::new();

        self.major_pass(profile, &mut abilities, &mut fired);
        self.interest_pass(profile, &mut abilities, &mut fired);
        self.mbti_pass(profile, &mut abilities, &mut fired);
        self.challenge_pass(profile, &mut abilities, &mut fired);

        let abilities = abilities.clipped(ABILITY_MIN, ABILITY_MAX);
        debug!(rules_fired = fired.len(), "ability inference complete");
        (abilities, fired)
    }

    fn major_pass(
        &self,
        profile: &UserProfile,
        abilities: &mut AspectVector,
        fired: &mut Vec<RuleFiring>,
    ) {
        for rule in self.table.rules() {
            if let Rule::Major { aliases, effects } = rule {
                if matches_any_alias(aliases, &profile.major) {
                    apply_effects(abilities, effects);
                    record(fired, RuleKind::Major, &profile.major);
                    break;
                }
            }
        }
    }

    fn interest_pass(
        &self,
        profile: &UserProfile,
        abilities: &mut AspectVector,
        fired: &mut Vec<RuleFiring>,
    ) {
        for interest in &profile.interests {
            for rule in self.table.rules() {
                if let Rule::Interest { aliases, effects } = rule {
                    if matches_any_alias(aliases, interest) {
                        apply_effects(abilities, effects);
                        record(fired, RuleKind::Interest, interest);
                    }
                }
            }
        }
    }

    fn mbti_pass(
        &self,
        profile: &UserProfile,
        abilities: &mut AspectVector,
        fired: &mut Vec<RuleFiring>,
    ) {
        for code_letter in profile.mbti.chars() {
            for rule in self.table.rules() {
                if let Rule::Mbti { letter, effects } = rule {
                    if *letter == code_letter {
                        apply_effects(abilities, effects);
                        record(fired, RuleKind::Mbti, code_letter.to_string());
                    }
                }
            }
        }
    }

    fn challenge_pass(
        &self,
        profile: &UserProfile,
        abilities: &mut AspectVector,
        fired: &mut Vec<RuleFiring>,
    ) {
        for challenge in &profile.challenges {
            for rule in self.table.rules() {
                match rule {
                    Rule::Challenge {
                        phrase,
                        suppression,
                        direct_effects,
                    } if phrase == challenge => {
                        apply_suppression(abilities, suppression);
                        apply_effects(abilities, direct_effects);
                        record(fired, RuleKind::Challenge, challenge);
                    }
                    Rule::Challenge { .. }
                    | Rule::Major { .. }
                    | Rule::Interest { .. }
                    | Rule::Mbti { .. } => {}
                }
            }
        }
    }
}

fn record(fired: &mut Vec<RuleFiring>, kind: RuleKind, trigger: impl Into<String>) {
    let firing = RuleFiring::new(kind, trigger);
    debug!(kind = %firing.kind, trigger = %firing.trigger, "rule fired");
    fired.push(firing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::abilities::rules::effects;
    use crate::domain::foundation::Aspect;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn profile(major: &str, interests: &[&str], mbti: &str, challenges: &[&str]) -> UserProfile {
        UserProfile::new(
            major,
            interests.iter().map(|s| s.to_string()).collect(),
            mbti,
            challenges.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn computer_science_major_scenario() {
        let mut p = profile("Computer Science and Technology", &[], "", &[]);
        let report = RuleEngine::builtin().apply(&mut p);
        let a = p.abilities();

        assert!(approx(a[Aspect::ProgrammingAbility], 0.5));
        assert!(approx(a[Aspect::ProblemSolving], 0.4));
        assert!(approx(a[Aspect::AnalyticalSkills], 0.4));
        assert!(approx(a[Aspect::MathematicalSkills], 0.3));
        for aspect in [
            Aspect::Creativity,
            Aspect::CommunicationSkills,
            Aspect::LeadershipSkills,
            Aspect::BusinessAcumen,
            Aspect::Teamwork,
            Aspect::Adaptability,
        ] {
            assert_eq!(a[aspect], 0.0);
        }
        assert_eq!(report.fired().len(), 1);
        assert_eq!(report.fired()[0].kind, RuleKind::Major);
    }

    #[test]
    fn only_first_matching_major_applies() {
        let table = RuleTable::new(vec![
            Rule::major(&["physics"], effects(&[("Mathematical Skills", 0.5)])),
            Rule::major(&["phys"], effects(&[("Creativity", 0.5)])),
        ])
        .unwrap();
        let (a, fired) = RuleEngine::new(&table).infer(&profile("Applied Physics", &[], "", &[]));
        assert!(approx(a[Aspect::MathematicalSkills], 0.5));
        assert_eq!(a[Aspect::Creativity], 0.0);
        assert_eq!(fired.len(), 1);
    }

    #[test]
    fn major_match_is_case_insensitive() {
        let (a, _) = RuleEngine::builtin().infer(&profile("cst", &[], "", &[]));
        assert!(approx(a[Aspect::ProgrammingAbility], 0.5));
    }

    #[test]
    fn unmatched_major_is_a_no_op() {
        let p = profile("Underwater Basket Weaving", &[], "", &[]);
        let (a, fired) = RuleEngine::builtin().infer(&p);
        assert_eq!(a, AspectVector::ZERO);
        assert!(fired.is_empty());
    }

    #[test]
    fn one_interest_can_fire_several_rules() {
        let table = RuleTable::new(vec![
            Rule::interest(&["chess"], effects(&[("Analytical Skills", 0.3)])),
            Rule::interest(&["board"], effects(&[("Teamwork", 0.3)])),
        ])
        .unwrap();
        let (a, fired) = RuleEngine::new(&table).infer(&profile("", &["chess board club"], "", &[]));
        assert!(approx(a[Aspect::AnalyticalSkills], 0.3));
        assert!(approx(a[Aspect::Teamwork], 0.3));
        assert_eq!(fired.len(), 2);
    }

    #[test]
    fn repeated_interests_compound_with_diminishing_returns() {
        let table = RuleTable::new(vec![Rule::interest(
            &["coding"],
            effects(&[("Programming Ability", 0.4)]),
        )])
        .unwrap();
        let (a, _) = RuleEngine::new(&table).infer(&profile("", &["coding", "more coding"], "", &[]));
        // 0.4, then 0.4 + 0.4 * 0.6
        assert!(approx(a[Aspect::ProgrammingAbility], 0.64));
    }

    #[test]
    fn mbti_letters_apply_left_to_right() {
        let (a, fired) = RuleEngine::builtin().infer(&profile("", &[], "EI", &[]));
        // E: Communication +0.3; I: -0.2 * (1 - 0.3) = -0.14
        assert!(approx(a[Aspect::CommunicationSkills], 0.16));
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].trigger, "E");
    }

    #[test]
    fn mbti_letter_without_rule_is_ignored() {
        let (a, fired) = RuleEngine::builtin().infer(&profile("", &[], "X", &[]));
        assert_eq!(a, AspectVector::ZERO);
        assert!(fired.is_empty());
    }

    #[test]
    fn dislikes_group_projects_scenario() {
        let mut seeded = AspectVector::ZERO;
        seeded[Aspect::Teamwork] = 0.5;
        let mut p = profile("", &[], "", &["dislikes group projects"]).with_initial_abilities(seeded);
        RuleEngine::builtin().apply(&mut p);

        let teamwork = p.abilities()[Aspect::Teamwork];
        // 0.5 * 0.2 = 0.1, then 0.1 + (-0.2 * 0.9) = -0.08
        assert!(approx(teamwork, -0.08));
        assert_eq!(format!("{:.2}", teamwork), "-0.08");
    }

    #[test]
    fn challenge_requires_exact_phrase() {
        let p = profile("", &[], "", &["Dislikes Group Projects"]);
        let (_, fired) = RuleEngine::builtin().infer(&p);
        assert!(fired.is_empty());
    }

    #[test]
    fn suppression_precedes_direct_effects() {
        let table = RuleTable::new(vec![Rule::challenge(
            "c",
            effects(&[("Creativity", 0.5)]),
            effects(&[("Creativity", 0.2)]),
        )])
        .unwrap();
        let mut seeded = AspectVector::ZERO;
        seeded[Aspect::Creativity] = 0.6;
        let p = profile("", &[], "", &["c"]).with_initial_abilities(seeded);
        let (a, _) = RuleEngine::new(&table).infer(&p);
        // 0.6 * 0.5 = 0.3, then 0.3 + 0.2 * 0.7 = 0.44
        assert!(approx(a[Aspect::Creativity], 0.44));
    }

    #[test]
    fn unknown_aspect_effects_are_ignored() {
        let table = RuleTable::new(vec![Rule::major(
            &["x"],
            effects(&[("Juggling", 0.9), ("Teamwork", 0.1)]),
        )])
        .unwrap();
        let (a, _) = RuleEngine::new(&table).infer(&profile("x", &[], "", &[]));
        assert!(approx(a[Aspect::Teamwork], 0.1));
        assert!(approx(a.as_slice().iter().sum::<f64>(), 0.1));
    }

    #[test]
    fn finalize_clips_out_of_range_seed() {
        let mut seeded = AspectVector::ZERO;
        seeded[Aspect::Creativity] = 3.0;
        let p = profile("", &[], "", &[]).with_initial_abilities(seeded);
        let (a, _) = RuleEngine::builtin().infer(&p);
        assert_eq!(a[Aspect::Creativity], 1.0);
    }

    #[test]
    fn infer_does_not_mutate_profile() {
        let p = profile("Finance", &["chess"], "INTJ", &[]);
        let _ = RuleEngine::builtin().infer(&p);
        assert_eq!(*p.abilities(), AspectVector::ZERO);
    }

    #[test]
    fn full_profile_stays_in_bounds() {
        let mut p = UserProfile::from_answers(
            "Software Engineering",
            "coding, chess, debating, startup, music",
            "ENTJ",
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19",
        );
        let report = RuleEngine::builtin().apply(&mut p);
        assert!(report
            .scores()
            .iter()
            .all(|(_, s)| (ABILITY_MIN..=ABILITY_MAX).contains(s)));
    }

    proptest! {
        #[test]
        fn diminishing_returns_is_bounded_and_increasing(
            start in -0.99f64..0.99,
            delta in 0.01f64..0.5,
            steps in 1usize..20,
        ) {
            let mut v = start;
            for _ in 0..steps {
                let next = diminished(v, delta);
                prop_assert!(next > v);
                prop_assert!(next < 1.0);
                v = next;
            }
        }

        #[test]
        fn single_application_matches_formula(v in -1.0f64..1.0, d in -1.0f64..1.0) {
            prop_assert!(approx(diminished(v, d), v + d * (1.0 - v.abs())));
        }

        #[test]
        fn suppression_never_touches_non_positive(v in -1.0f64..=0.0, f in 0.01f64..=1.0) {
            let mut a = AspectVector::ZERO;
            a[Aspect::Teamwork] = v;
            apply_suppression(&mut a, &effects(&[("Teamwork", f)]));
            prop_assert_eq!(a[Aspect::Teamwork], v);
        }

        #[test]
        fn suppression_scales_positive_exactly(v in 0.001f64..1.0, f in 0.01f64..=1.0) {
            let mut a = AspectVector::ZERO;
            a[Aspect::Teamwork] = v;
            apply_suppression(&mut a, &effects(&[("Teamwork", f)]));
            prop_assert_eq!(a[Aspect::Teamwork], v * f);
        }

        #[test]
        fn any_profile_yields_bounded_abilities(
            major_idx in 0usize..23,
            interests in proptest::collection::vec("[a-z ]{0,20}", 0..5),
            mbti in "[EISNTFJP]{0,4}",
            codes in proptest::collection::vec(1usize..=19, 0..8),
        ) {
            let majors = ["CST", "SWE", "AIT", "DSC", "CYS", "DMT", "ECM", "ACC", "FIN", "IBU",
                "CHS", "ENG", "ADT", "JRN", "COS", "EEE", "CME", "EGE", "MAT", "PHY", "MBT",
                "MEC", "TCM"];
            let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            let p = UserProfile::from_answers(
                majors[major_idx],
                &interests.join(","),
                &mbti,
                &codes.join(","),
            );
            let (a, _) = RuleEngine::builtin().infer(&p);
            prop_assert!(a.iter().all(|(_, v)| (ABILITY_MIN..=ABILITY_MAX).contains(&v)));
        }
    }
}

//! Built-in knowledge base.
//!
//! Four rule groups: academic majors, interests and talents, MBTI letters,
//! and self-reported challenges. Order matters for majors (first match wins).

use once_cell::sync::Lazy;

use super::rules::{effects, Effects, Rule, RuleTable};

static BUILTIN: Lazy<RuleTable> = Lazy::new(|| RuleTable::from_rules_unchecked(builtin_rules()));

/// The built-in rule table, constructed on first use.
pub fn builtin_rule_table() -> &'static RuleTable {
    &BUILTIN
}

fn builtin_rules() -> Vec<Rule> {
    vec![
        // Majors
        Rule::major(
            &["Computer Science and Technology", "CST"],
            effects(&[
                ("Programming Ability", 0.5),
                ("Problem-Solving", 0.4),
                ("Analytical Skills", 0.4),
                ("Mathematical Skills", 0.3),
            ]),
        ),
        Rule::major(
            &["Software Engineering", "SWE"],
            effects(&[
                ("Programming Ability", 0.5),
                ("Problem-Solving", 0.4),
                ("Teamwork", 0.3),
                ("Analytical Skills", 0.1),
            ]),
        ),
        Rule::major(
            &["Artificial Intelligence", "AIT"],
            effects(&[
                ("Mathematical Skills", 0.5),
                ("Programming Ability", 0.4),
                ("Analytical Skills", 0.4),
                ("Creativity", 0.3),
            ]),
        ),
        Rule::major(
            &["Data Science & Big Data Technology", "DSC"],
            effects(&[
                ("Mathematical Skills", 0.4),
                ("Analytical Skills", 0.4),
                ("Programming Ability", 0.3),
                ("Business Acumen", 0.2),
            ]),
        ),
        Rule::major(
            &["Cyberspace Security", "CYS"],
            effects(&[
                ("Problem-Solving", 0.4),
                ("Analytical Skills", 0.3),
                ("Programming Ability", 0.3),
                ("Teamwork", -0.1),
            ]),
        ),
        Rule::major(
            &["Digital Media Technology", "DMT"],
            effects(&[
                ("Creativity", 0.5),
                ("Teamwork", 0.3),
                ("Programming Ability", 0.2),
                ("Analytical Skills", -0.1),
            ]),
        ),
        Rule::major(
            &["E-commerce", "ECM"],
            effects(&[
                ("Business Acumen", 0.5),
                ("Communication Skills", 0.3),
                ("Adaptability", 0.2),
                ("Teamwork", 0.2),
            ]),
        ),
        Rule::major(
            &["Accounting", "ACC"],
            effects(&[
                ("Analytical Skills", 0.4),
                ("Business Acumen", 0.3),
                ("Mathematical Skills", 0.2),
                ("Creativity", -0.2),
            ]),
        ),
        Rule::major(
            &["Finance", "FIN"],
            effects(&[
                ("Business Acumen", 0.5),
                ("Mathematical Skills", 0.4),
                ("Analytical Skills", 0.3),
                ("Communication Skills", 0.2),
            ]),
        ),
        Rule::major(
            &["International Business", "IBU"],
            effects(&[
                ("Communication Skills", 0.5),
                ("Business Acumen", 0.4),
                ("Adaptability", 0.3),
                ("Leadership Skills", 0.1),
            ]),
        ),
        Rule::major(
            &["Chinese Studies", "CHS"],
            effects(&[
                ("Communication Skills", 0.4),
                ("Creativity", 0.3),
                ("Analytical Skills", 0.1),
                ("Programming Ability", -0.4),
            ]),
        ),
        Rule::major(
            &["English Studies", "ENG"],
            effects(&[
                ("Communication Skills", 0.5),
                ("Adaptability", 0.2),
                ("Teamwork", 0.2),
                ("Mathematical Skills", -0.2),
            ]),
        ),
        Rule::major(
            &["Advertising", "ADT"],
            effects(&[
                ("Creativity", 0.5),
                ("Communication Skills", 0.4),
                ("Business Acumen", 0.3),
                ("Teamwork", 0.2),
            ]),
        ),
        Rule::major(
            &["Journalism", "JRN"],
            effects(&[
                ("Communication Skills", 0.5),
                ("Adaptability", 0.3),
                ("Analytical Skills", 0.2),
                ("Problem-Solving", 0.2),
            ]),
        ),
        Rule::major(
            &["Communication Studies", "COS"],
            effects(&[
                ("Communication Skills", 0.5),
                ("Creativity", 0.4),
                ("Teamwork", 0.3),
                ("Adaptability", 0.2),
            ]),
        ),
        Rule::major(
            &["Electronic and Information Engineering", "EEE"],
            effects(&[
                ("Problem-Solving", 0.4),
                ("Mathematical Skills", 0.4),
                ("Analytical Skills", 0.3),
                ("Programming Ability", 0.2),
            ]),
        ),
        Rule::major(
            &["Chemical Engineering and Technology", "CME"],
            effects(&[
                ("Analytical Skills", 0.5),
                ("Problem-Solving", 0.4),
                ("Mathematical Skills", 0.3),
                ("Teamwork", 0.1),
            ]),
        ),
        Rule::major(
            &["New Energy Science and Engineering", "EGE"],
            effects(&[
                ("Problem-Solving", 0.4),
                ("Mathematical Skills", 0.3),
                ("Analytical Skills", 0.3),
                ("Adaptability", 0.2),
            ]),
        ),
        Rule::major(
            &["Mathematics and Applied Mathematics", "MAT"],
            effects(&[
                ("Mathematical Skills", 0.6),
                ("Analytical Skills", 0.5),
                ("Problem-Solving", 0.4),
                ("Communication Skills", -0.2),
            ]),
        ),
        Rule::major(
            &["Physics", "PHY"],
            effects(&[
                ("Mathematical Skills", 0.5),
                ("Analytical Skills", 0.5),
                ("Problem-Solving", 0.4),
                ("Communication Skills", -0.1),
            ]),
        ),
        Rule::major(
            &["Marine Technology", "MBT"],
            effects(&[
                ("Problem-Solving", 0.4),
                ("Analytical Skills", 0.3),
                ("Adaptability", 0.3),
                ("Programming Ability", 0.2),
            ]),
        ),
        Rule::major(
            &["Marine Science", "MEC"],
            effects(&[
                ("Analytical Skills", 0.5),
                ("Problem-Solving", 0.3),
                ("Adaptability", 0.2),
                ("Teamwork", 0.2),
            ]),
        ),
        Rule::major(
            &["Traditional Chinese Medicine", "TCM"],
            effects(&[
                ("Analytical Skills", 0.4),
                ("Communication Skills", 0.3),
                ("Problem-Solving", 0.2),
                ("Adaptability", 0.2),
            ]),
        ),

        // Interests and talents
        Rule::interest(
            &["programming contest", "coding", "developing"],
            effects(&[
                ("Programming Ability", 0.4),
                ("Problem-Solving", 0.3),
                ("Mathematical Skills", 0.2),
            ]),
        ),
        Rule::interest(
            &["math modeling", "modeling"],
            effects(&[
                ("Mathematical Skills", 0.4),
                ("Analytical Skills", 0.3),
                ("Problem-Solving", 0.3),
            ]),
        ),
        Rule::interest(
            &["scientific research", "research", "lab work"],
            effects(&[("Analytical Skills", 0.5), ("Problem-Solving", 0.3), ("Teamwork", -0.1)]),
        ),
        Rule::interest(
            &["strategy games", "chess", "logic puzzles"],
            effects(&[
                ("Analytical Skills", 0.3),
                ("Problem-Solving", 0.3),
                ("Adaptability", -0.1),
            ]),
        ),
        Rule::interest(
            &["electronics DIY", "model making"],
            effects(&[("Problem-Solving", 0.3), ("Creativity", 0.2), ("Analytical Skills", 0.1)]),
        ),
        Rule::interest(
            &["reading books", "visiting museums"],
            effects(&[("Analytical Skills", 0.2), ("Adaptability", 0.1)]),
        ),
        Rule::interest(
            &["attending academic lectures"],
            effects(&[("Adaptability", 0.2), ("Analytical Skills", 0.1)]),
        ),
        Rule::interest(
            &["debating", "public speaking", "hosting"],
            effects(&[
                ("Communication Skills", 0.5),
                ("Analytical Skills", 0.3),
                ("Leadership Skills", 0.2),
            ]),
        ),
        Rule::interest(
            &["student union", "club management", "organizing events"],
            effects(&[("Leadership Skills", 0.4), ("Teamwork", 0.3), ("Business Acumen", 0.2)]),
        ),
        Rule::interest(
            &["team sports", "basketball", "football"],
            effects(&[("Teamwork", 0.4), ("Adaptability", 0.3), ("Leadership Skills", 0.2)]),
        ),
        Rule::interest(
            &["volunteering", "social work"],
            effects(&[("Teamwork", 0.4), ("Communication Skills", 0.3), ("Adaptability", 0.3)]),
        ),
        Rule::interest(
            &["content creation", "podcast", "vlog"],
            effects(&[
                ("Communication Skills", 0.4),
                ("Creativity", 0.3),
                ("Business Acumen", 0.1),
            ]),
        ),
        Rule::interest(
            &["online gaming", "MMORPG", "esports"],
            effects(&[("Teamwork", 0.3), ("Problem-Solving", 0.2), ("Adaptability", 0.2)]),
        ),
        Rule::interest(
            &["art", "drawing", "design"],
            effects(&[("Creativity", 0.5), ("Adaptability", 0.2), ("Analytical Skills", -0.1)]),
        ),
        Rule::interest(
            &["creative writing", "writing novels"],
            effects(&[("Creativity", 0.4), ("Communication Skills", 0.3)]),
        ),
        Rule::interest(
            &["photography", "filmmaking"],
            effects(&[("Creativity", 0.3), ("Adaptability", 0.1)]),
        ),
        Rule::interest(
            &["music", "instrument", "singing", "dancing"],
            effects(&[("Creativity", 0.3), ("Teamwork", 0.1), ("Adaptability", 0.2)]),
        ),
        Rule::interest(
            &["cooking", "baking"],
            effects(&[("Creativity", 0.2), ("Problem-Solving", 0.1), ("Adaptability", 0.2)]),
        ),
        Rule::interest(
            &["fashion", "makeup"],
            effects(&[("Creativity", 0.4), ("Business Acumen", 0.1)]),
        ),
        Rule::interest(
            &["board games", "TTRPG"],
            effects(&[
                ("Creativity", 0.3),
                ("Teamwork", 0.3),
                ("Communication Skills", 0.2),
                ("Problem-Solving", 0.2),
            ]),
        ),
        Rule::interest(
            &["startup", "entrepreneurship"],
            effects(&[
                ("Business Acumen", 0.5),
                ("Leadership Skills", 0.3),
                ("Problem-Solving", 0.3),
            ]),
        ),
        Rule::interest(
            &["investing", "stock market"],
            effects(&[
                ("Business Acumen", 0.5),
                ("Analytical Skills", 0.3),
                ("Mathematical Skills", 0.2),
            ]),
        ),
        Rule::interest(
            &["traveling", "exploring"],
            effects(&[
                ("Adaptability", 0.4),
                ("Communication Skills", 0.1),
                ("Problem-Solving", 0.1),
            ]),
        ),
        Rule::interest(
            &["learning languages"],
            effects(&[("Communication Skills", 0.3), ("Adaptability", 0.2)]),
        ),

        // Personality letters
        Rule::mbti(
            'E',
            effects(&[
                ("Communication Skills", 0.3),
                ("Teamwork", 0.2),
                ("Leadership Skills", 0.1),
            ]),
        ),
        Rule::mbti(
            'I',
            effects(&[
                ("Analytical Skills", 0.2),
                ("Problem-Solving", 0.1),
                ("Communication Skills", -0.2),
            ]),
        ),
        Rule::mbti(
            'S',
            effects(&[("Problem-Solving", 0.2), ("Teamwork", 0.1), ("Creativity", -0.2)]),
        ),
        Rule::mbti(
            'N',
            effects(&[("Creativity", 0.3), ("Adaptability", 0.1), ("Analytical Skills", 0.1)]),
        ),
        Rule::mbti(
            'T',
            effects(&[
                ("Analytical Skills", 0.3),
                ("Problem-Solving", 0.2),
                ("Business Acumen", 0.1),
            ]),
        ),
        Rule::mbti(
            'F',
            effects(&[
                ("Communication Skills", 0.3),
                ("Teamwork", 0.2),
                ("Analytical Skills", -0.1),
            ]),
        ),
        Rule::mbti(
            'J',
            effects(&[
                ("Leadership Skills", 0.2),
                ("Problem-Solving", 0.1),
                ("Adaptability", -0.2),
            ]),
        ),
        Rule::mbti(
            'P',
            effects(&[("Adaptability", 0.3), ("Creativity", 0.2), ("Leadership Skills", -0.1)]),
        ),

        // Self-reported challenges
        Rule::challenge(
            "dislikes group projects",
            effects(&[
                ("Teamwork", 0.2),
                ("Communication Skills", 0.7),
                ("Leadership Skills", 0.8),
            ]),
            effects(&[("Teamwork", -0.2)]),
        ),
        Rule::challenge(
            "dislikes public speaking or presentations",
            effects(&[("Communication Skills", 0.1), ("Leadership Skills", 0.5)]),
            effects(&[("Communication Skills", -0.3)]),
        ),
        Rule::challenge(
            "hard to come up with new, original ideas",
            effects(&[("Creativity", 0.1)]),
            effects(&[("Creativity", -0.3), ("Problem-Solving", -0.1)]),
        ),
        Rule::challenge(
            "gets a headache from complex data or math",
            effects(&[("Mathematical Skills", 0.1), ("Analytical Skills", 0.4)]),
            effects(&[("Mathematical Skills", -0.3)]),
        ),
        Rule::challenge(
            "prefers clear instructions over ambiguous tasks",
            effects(&[("Adaptability", 0.3), ("Creativity", 0.5)]),
            effects(&[("Adaptability", -0.2), ("Problem-Solving", -0.1)]),
        ),
        Rule::challenge(
            "tends to lose the big picture when facing too much information",
            effects(&[("Analytical Skills", 0.2)]),
            effects(&[("Analytical Skills", -0.2), ("Problem-Solving", -0.2)]),
        ),
        Rule::challenge(
            "not interested in business operations or how companies make profit",
            effects(&[("Business Acumen", 0.1)]),
            effects(&[("Business Acumen", -0.4)]),
        ),
        Rule::challenge(
            "gets anxious under pressure or tight deadlines",
            effects(&[("Adaptability", 0.4), ("Problem-Solving", 0.6)]),
            effects(&[("Adaptability", -0.3), ("Problem-Solving", -0.1)]),
        ),
        Rule::challenge(
            "finds it difficult to persuade others",
            effects(&[("Communication Skills", 0.4), ("Leadership Skills", 0.4)]),
            effects(&[("Communication Skills", -0.2), ("Business Acumen", -0.1)]),
        ),
        Rule::challenge(
            "prefers to complete tasks independently rather than leading a team",
            effects(&[("Leadership Skills", 0.2), ("Teamwork", 0.5)]),
            effects(&[("Leadership Skills", -0.3)]),
        ),
        Rule::challenge(
            "tends to procrastinate, deadlines are the main motivation",
            effects(&[("Problem-Solving", 0.7), ("Leadership Skills", 0.8)]),
            effects(&[("Adaptability", -0.2)]),
        ),
        Rule::challenge(
            "afraid of or dislikes handling interpersonal conflicts",
            effects(&[
                ("Communication Skills", 0.6),
                ("Leadership Skills", 0.5),
                ("Teamwork", 0.7),
            ]),
            effects(&[("Communication Skills", -0.1), ("Leadership Skills", -0.2)]),
        ),
        Rule::challenge(
            "gets bored easily by repetitive, routine tasks",
            Effects::none(),
            effects(&[("Adaptability", -0.4), ("Analytical Skills", -0.1)]),
        ),
        Rule::challenge(
            "dislikes networking or actively building new connections",
            effects(&[("Communication Skills", 0.7), ("Business Acumen", 0.6)]),
            effects(&[("Communication Skills", -0.2)]),
        ),
        Rule::challenge(
            "afraid of making mistakes, tends to be a perfectionist",
            effects(&[("Creativity", 0.5), ("Adaptability", 0.4)]),
            effects(&[("Problem-Solving", 0.1), ("Analytical Skills", 0.1), ("Creativity", -0.1)]),
        ),
        Rule::challenge(
            "finds it hard to maintain focus for long periods",
            effects(&[("Analytical Skills", 0.6), ("Problem-Solving", 0.7)]),
            effects(&[("Adaptability", -0.2)]),
        ),
        Rule::challenge(
            "not good at reporting work to superiors or clients",
            effects(&[("Communication Skills", 0.6), ("Business Acumen", 0.7)]),
            effects(&[("Communication Skills", -0.2)]),
        ),
        Rule::challenge(
            "struggles with purely theoretical concepts, needs hands-on practice",
            effects(&[("Analytical Skills", 0.7)]),
            effects(&[("Mathematical Skills", -0.2), ("Analytical Skills", -0.1)]),
        ),
        Rule::challenge(
            "hesitates when making decisions",
            effects(&[("Leadership Skills", 0.6), ("Problem-Solving", 0.6)]),
            effects(&[("Adaptability", -0.2)]),
        ),
    ]
}

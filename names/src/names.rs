//! Built-in name tables
//!
//! Static first and last names per descent. Surnames that inflect by sex
//! (Russian) carry male and female buckets; the rest are unisex.

use once_cell::sync::Lazy;

use crate::components::{Descent, Sex};
use crate::table::NameTable;

const ENGLISH_MALE_FIRST: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
    "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
    "George", "Edward", "Ronald", "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob",
    "Gary", "Nicholas", "Eric", "Stephen", "Jonathan", "Larry", "Justin", "Scott",
    "Benjamin", "Samuel", "Frank", "Gregory", "Raymond", "Patrick", "Jack",
    "Henry", "Nathan", "Douglas", "Peter", "Walter", "Harold", "Roger", "Carl",
];

const ENGLISH_FEMALE_FIRST: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra",
    "Ashley", "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol",
    "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Laura", "Sharon",
    "Cynthia", "Kathleen", "Amy", "Shirley", "Angela", "Helen", "Anna", "Brenda",
    "Pamela", "Nicole", "Emma", "Samantha", "Katherine", "Christine", "Rachel",
    "Catherine", "Janet", "Ruth", "Heather", "Diane", "Virginia", "Julie",
];

const ENGLISH_UNISEX_FIRST: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery",
    "Quinn", "Robin", "Sam", "Charlie", "Frankie", "Leslie", "Sidney",
];

const RUSSIAN_MALE_FIRST: &[&str] = &[
    "Aleksandr", "Aleksei", "Andrei", "Anton", "Boris", "Dmitri", "Fyodor",
    "Grigori", "Igor", "Ivan", "Konstantin", "Leonid", "Maksim", "Mikhail",
    "Nikolai", "Oleg", "Pavel", "Pyotr", "Roman", "Sergei", "Vadim", "Viktor",
    "Vladimir", "Yuri",
];

const RUSSIAN_FEMALE_FIRST: &[&str] = &[
    "Alina", "Anastasia", "Anna", "Darya", "Ekaterina", "Elena", "Irina",
    "Ksenia", "Larisa", "Lyudmila", "Marina", "Natalya", "Olga", "Polina",
    "Svetlana", "Tatyana", "Valentina", "Vera", "Yulia", "Zoya",
];

const RUSSIAN_UNISEX_FIRST: &[&str] = &["Sasha", "Valya", "Zhenya", "Shura"];

const GERMAN_MALE_FIRST: &[&str] = &[
    "Andreas", "Bernd", "Dieter", "Felix", "Friedrich", "Georg", "Hans",
    "Heinrich", "Jens", "Jürgen", "Karl", "Klaus", "Lukas", "Matthias",
    "Rainer", "Stefan", "Thomas", "Uwe", "Werner", "Wolfgang",
];

const GERMAN_FEMALE_FIRST: &[&str] = &[
    "Anja", "Birgit", "Claudia", "Gisela", "Greta", "Heike", "Ingrid", "Jutta",
    "Katrin", "Lena", "Monika", "Petra", "Sabine", "Sophie", "Ursula",
];

const GERMAN_UNISEX_FIRST: &[&str] = &["Kai", "Toni", "Luca", "Kim"];

const FRENCH_MALE_FIRST: &[&str] = &[
    "Antoine", "Baptiste", "Christophe", "Étienne", "François", "Guillaume",
    "Henri", "Jacques", "Julien", "Laurent", "Louis", "Mathieu", "Nicolas",
    "Olivier", "Philippe", "Pierre", "Sébastien", "Thierry", "Yves",
];

const FRENCH_FEMALE_FIRST: &[&str] = &[
    "Amélie", "Brigitte", "Camille", "Céline", "Chloé", "Élise", "Françoise",
    "Isabelle", "Juliette", "Manon", "Margaux", "Nathalie", "Sophie", "Sylvie",
    "Valérie",
];

const FRENCH_UNISEX_FIRST: &[&str] = &["Dominique", "Claude", "Maxime", "Sacha"];

const ENGLISH_LAST: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis",
    "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Martin", "Thompson",
    "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young", "Allen",
    "King", "Wright", "Scott", "Hill", "Green", "Adams", "Nelson", "Baker",
    "Hall", "Campbell", "Mitchell", "Carter", "Roberts", "Phillips", "Evans",
    "Turner", "Parker", "Edwards", "Collins", "Stewart", "Morris", "Cook",
    "Rogers", "Morgan", "Cooper", "Bailey", "Reed", "Howard", "Ward", "Abramson",
];

const RUSSIAN_MALE_LAST: &[&str] = &[
    "Ivanov", "Petrov", "Smirnov", "Kuznetsov", "Popov", "Sokolov", "Lebedev",
    "Kozlov", "Novikov", "Morozov", "Volkov", "Solovyov", "Vasilyev", "Zaitsev",
    "Pavlov", "Semyonov", "Golubev", "Vinogradov", "Bogdanov", "Vorobyov",
];

const RUSSIAN_FEMALE_LAST: &[&str] = &[
    "Ivanova", "Petrova", "Smirnova", "Kuznetsova", "Popova", "Sokolova",
    "Lebedeva", "Kozlova", "Novikova", "Morozova", "Volkova", "Solovyova",
    "Vasilyeva", "Zaitseva", "Pavlova", "Semyonova", "Golubeva", "Vinogradova",
    "Bogdanova", "Vorobyova",
];

const GERMAN_LAST: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner",
    "Becker", "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter",
    "Klein", "Wolf", "Schröder", "Neumann", "Schwarz", "Zimmermann",
];

const FRENCH_LAST: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit",
    "Durand", "Leroy", "Moreau", "Simon", "Laurent", "Lefebvre", "Michel",
    "Garcia", "David", "Bertrand", "Roux", "Vincent", "Fournier",
];

/// Built-in first names
pub static FIRST_NAMES: Lazy<NameTable> = Lazy::new(|| {
    NameTable::from_static(&[
        (Descent::English, Sex::Male, ENGLISH_MALE_FIRST),
        (Descent::English, Sex::Female, ENGLISH_FEMALE_FIRST),
        (Descent::English, Sex::Unisex, ENGLISH_UNISEX_FIRST),
        (Descent::Russian, Sex::Male, RUSSIAN_MALE_FIRST),
        (Descent::Russian, Sex::Female, RUSSIAN_FEMALE_FIRST),
        (Descent::Russian, Sex::Unisex, RUSSIAN_UNISEX_FIRST),
        (Descent::German, Sex::Male, GERMAN_MALE_FIRST),
        (Descent::German, Sex::Female, GERMAN_FEMALE_FIRST),
        (Descent::German, Sex::Unisex, GERMAN_UNISEX_FIRST),
        (Descent::French, Sex::Male, FRENCH_MALE_FIRST),
        (Descent::French, Sex::Female, FRENCH_FEMALE_FIRST),
        (Descent::French, Sex::Unisex, FRENCH_UNISEX_FIRST),
    ])
});

/// Built-in last names
pub static LAST_NAMES: Lazy<NameTable> = Lazy::new(|| {
    NameTable::from_static(&[
        (Descent::English, Sex::Unisex, ENGLISH_LAST),
        (Descent::Russian, Sex::Male, RUSSIAN_MALE_LAST),
        (Descent::Russian, Sex::Female, RUSSIAN_FEMALE_LAST),
        (Descent::German, Sex::Unisex, GERMAN_LAST),
        (Descent::French, Sex::Unisex, FRENCH_LAST),
    ])
});

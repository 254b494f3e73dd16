//! Word lists backing the heuristic tagger and entity chunker.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Closed-class words and frequent irregular forms with their Penn tags.
static CLOSED_CLASS: &[(&str, &str)] = &[
    // wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"), ("which", "WDT"),
    ("where", "WRB"), ("when", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("another", "DT"), ("both", "DT"),
    ("either", "DT"), ("neither", "DT"),
    // prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("through", "IN"),
    ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"), ("below", "IN"),
    ("under", "IN"), ("over", "IN"), ("between", "IN"), ("against", "IN"), ("among", "IN"),
    ("since", "IN"), ("until", "IN"), ("upon", "IN"), ("within", "IN"), ("without", "IN"),
    ("across", "IN"), ("behind", "IN"), ("near", "IN"), ("than", "IN"), ("as", "IN"),
    ("because", "IN"), ("if", "IN"), ("while", "IN"), ("although", "IN"), ("though", "IN"),
    ("whether", "IN"), ("like", "IN"), ("per", "IN"), ("via", "IN"), ("to", "TO"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"), ("there", "EX"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    // auxiliaries
    ("is", "VBZ"), ("has", "VBZ"), ("does", "VBZ"), ("are", "VBP"), ("am", "VBP"),
    ("have", "VBP"), ("do", "VBP"), ("was", "VBD"), ("were", "VBD"), ("had", "VBD"),
    ("did", "VBD"), ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
    // irregular verbs
    ("wrote", "VBD"), ("won", "VBD"), ("became", "VBD"), ("began", "VBD"), ("made", "VBD"),
    ("built", "VBD"), ("led", "VBD"), ("took", "VBD"), ("gave", "VBD"), ("went", "VBD"),
    ("came", "VBD"), ("said", "VBD"), ("sold", "VBD"), ("bought", "VBD"), ("held", "VBD"),
    ("left", "VBD"), ("grew", "VBD"), ("knew", "VBD"), ("saw", "VBD"), ("ran", "VBD"),
    ("found", "VBD"), ("written", "VBN"), ("born", "VBN"),
    ("known", "VBN"), ("given", "VBN"), ("taken", "VBN"), ("begun", "VBN"),
    ("grown", "VBN"), ("shown", "VBN"), ("seen", "VBN"),
    // adverbs
    ("not", "RB"), ("also", "RB"), ("very", "RB"), ("often", "RB"), ("never", "RB"),
    ("always", "RB"), ("only", "RB"), ("just", "RB"), ("too", "RB"), ("still", "RB"),
    ("already", "RB"), ("however", "RB"), ("so", "RB"), ("then", "RB"), ("now", "RB"),
    // adjectives used by answer-type rules
    ("many", "JJ"), ("much", "JJ"), ("few", "JJ"), ("little", "JJ"), ("great", "JJ"),
    ("tall", "JJ"), ("wide", "JJ"), ("big", "JJ"), ("far", "JJ"), ("large", "JJ"),
    ("small", "JJ"), ("long", "JJ"), ("high", "JJ"), ("first", "JJ"), ("last", "JJ"),
    ("new", "JJ"), ("old", "JJ"), ("other", "JJ"), ("same", "JJ"), ("such", "JJ"),
    ("several", "JJ"), ("more", "JJR"), ("most", "JJS"),
    // number words
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"), ("billion", "CD"),
];

pub(crate) static CLOSED_CLASS_TAGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CLOSED_CLASS.iter().copied().collect());

/// Countries, regions and major cities (single and multi-word).
pub(crate) static LOCATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // continents and regions
        "Africa", "Antarctica", "Asia", "Australia", "Europe", "America", "North America",
        "South America", "Latin America", "Middle East", "Scandinavia", "Caribbean",
        // countries
        "Afghanistan", "Argentina", "Austria", "Bangladesh", "Belgium", "Brazil", "Canada",
        "Chile", "China", "Colombia", "Cuba", "Denmark", "Egypt", "England", "Ethiopia",
        "Finland", "France", "Germany", "Ghana", "Greece", "Hungary", "Iceland", "India",
        "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Jamaica", "Japan", "Kenya",
        "Korea", "Mexico", "Morocco", "Nepal", "Netherlands", "New Zealand", "Nigeria",
        "Norway", "Pakistan", "Peru", "Philippines", "Poland", "Portugal", "Russia",
        "Saudi Arabia", "Scotland", "Singapore", "South Africa", "South Korea", "Spain",
        "Sweden", "Switzerland", "Syria", "Taiwan", "Thailand", "Turkey", "Ukraine",
        "United Kingdom", "United States", "United States of America", "USA", "UK", "U.S",
        "Venezuela", "Vietnam", "Wales",
        // states and provinces
        "California", "Texas", "Florida", "New York", "Ohio", "Georgia", "Virginia",
        "Washington", "Massachusetts", "Illinois", "Michigan", "Ontario", "Quebec",
        "Bavaria", "Houston",
        // cities
        "Amsterdam", "Athens", "Bangkok", "Barcelona", "Beijing", "Berlin", "Boston",
        "Brussels", "Budapest", "Cairo", "Chicago", "Copenhagen", "Delhi", "Dublin",
        "Edinburgh", "Hong Kong", "Istanbul", "Jerusalem", "Lisbon", "London", "Los Angeles",
        "Madrid", "Manchester", "Melbourne", "Mexico City", "Milan", "Montreal", "Moscow",
        "Mumbai", "Munich", "Nairobi", "Oslo", "Paris", "Prague", "Rio de Janeiro", "Rome",
        "San Francisco", "Seoul", "Shanghai", "Stockholm", "Sydney", "Tokyo", "Toronto",
        "Vancouver", "Venice", "Vienna", "Warsaw", "Zurich", "Cupertino",
    ]
    .into_iter()
    .collect()
});

/// Tokens that mark an organization name.
pub(crate) static ORGANIZATION_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Inc", "Corp", "Corporation", "Company", "Co", "Ltd", "LLC", "Group", "University",
        "Institute", "Association", "Bank", "Agency", "Foundation", "Records", "Airlines",
        "College", "Council", "Party", "Committee", "Society", "Museum", "Church", "Club",
        "Department", "Ministry", "Organization", "Organisation", "Federation", "League",
        "Union", "Academy", "School", "Studios", "Entertainment", "Motors", "Labs",
    ]
    .into_iter()
    .collect()
});

/// Organization markers that may be followed by "of" inside a name.
pub(crate) static OF_CONNECTING_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "University", "Institute", "Bank", "Department", "Ministry", "Museum", "Church",
        "College", "Academy", "School", "Society",
    ]
    .into_iter()
    .collect()
});

/// Honorifics and titles preceding a person's name.
pub(crate) static PERSON_TITLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Mr", "Mrs", "Ms", "Dr", "Sir", "Dame", "Lord", "Lady", "King", "Queen", "Prince",
        "Princess", "President", "Senator", "General", "Captain", "Professor", "Pope",
        "Saint", "Emperor", "Empress",
    ]
    .into_iter()
    .collect()
});

//! Static topic to subtopic mapping offered by the topic quiz view.
//!
//! Order matters: the dropdowns list topics and subtopics exactly as they
//! appear here.

pub const TOPICS: &[(&str, &[&str])] = &[
    (
        "OS",
        &[
            "OS Basics",
            "Structure of OS",
            "Types of OS",
            "Process Management",
            "CPU Scheduling",
            "Threads",
            "Process Synchronization",
            "Critical Section Problem",
            "Deadlocks",
            "Memory Management",
            "Page Replacement",
            "Storage Management",
        ],
    ),
    (
        "DBMS",
        &[
            "Basics of DBMS",
            "ER Model",
            "Relational Model",
            "Relational Algebra",
            "Functional Dependencies",
            "Normalisation",
            "TnC Control",
            "Indexing, B and B+ Trees",
            "File Organisation",
        ],
    ),
    (
        "Java",
        &[
            "Data Types",
            "Operators",
            "Control Statements",
            "Loops",
            "Arrays",
            "Strings",
            "Classes",
            "Interfaces",
            "Packages",
            "OOPS",
            "Exceptions",
            "Multithreading",
            "Collections",
            "File Handling",
            "JDBC",
        ],
    ),
    (
        "JavaScript",
        &[
            "Basics",
            "Variables",
            "Operators",
            "Control Statements",
            "Functions",
            "Arrays",
            "Objects",
            "DOM",
            "Events",
            "ES6",
            "AJAX",
            "JSON",
            "NodeJS",
            "ReactJS",
            "AngularJS",
            "VueJS",
        ],
    ),
];

pub fn topics() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|(topic, _)| *topic)
}

/// Subtopics of `topic` in display order; empty for an unknown topic.
pub fn subtopics(topic: &str) -> &'static [&'static str] {
    TOPICS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, subtopics)| *subtopics)
        .unwrap_or(&[])
}

pub fn contains(topic: &str, subtopic: &str) -> bool {
    subtopics(topic).contains(&subtopic)
}

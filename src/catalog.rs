// src/catalog.rs

//! Question content for quizzes.
//!
//! Three topics ship with hand-written questions. Any other topic gets placeholder
//! questions generated from the topic name.

use crate::{config::CATALOG_TOPIC_SIZE, models::question::Question};

/// A pre-authored question, kept as static data.
struct CatalogQuestion {
    id: &'static str,
    text: &'static str,
    options: [&'static str; 4],
    correct_answer: i64,
}

impl CatalogQuestion {
    fn to_question(&self) -> Question {
        Question {
            question_id: self.id.to_string(),
            question: self.text.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer,
        }
    }
}

static JAVASCRIPT: [CatalogQuestion; CATALOG_TOPIC_SIZE] = [
    CatalogQuestion {
        id: "1",
        text: "What is the correct way to declare a variable in JavaScript?",
        options: [
            "var name = \"John\"",
            "variable name = \"John\"",
            "v name = \"John\"",
            "declare name = \"John\"",
        ],
        correct_answer: 0,
    },
    CatalogQuestion {
        id: "2",
        text: "Which method is used to add an element to the end of an array?",
        options: ["push()", "add()", "append()", "insert()"],
        correct_answer: 0,
    },
    CatalogQuestion {
        id: "3",
        text: "What does JSON stand for?",
        options: [
            "JavaScript Object Notation",
            "Java Standard Object Notation",
            "JavaScript Oriented Notation",
            "Java Script Object Network",
        ],
        correct_answer: 0,
    },
    CatalogQuestion {
        id: "4",
        text: "Which operator is used for strict equality in JavaScript?",
        options: ["==", "===", "=", "!="],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "5",
        text: "What is the result of typeof null in JavaScript?",
        options: ["null", "undefined", "object", "string"],
        correct_answer: 2,
    },
];

static REACT: [CatalogQuestion; CATALOG_TOPIC_SIZE] = [
    CatalogQuestion {
        id: "1",
        text: "What is React?",
        options: [
            "A database",
            "A JavaScript library for building user interfaces",
            "A server-side framework",
            "A programming language",
        ],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "2",
        text: "What is JSX?",
        options: [
            "A JavaScript extension",
            "A syntax extension for JavaScript",
            "A CSS framework",
            "A database query language",
        ],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "3",
        text: "What is the purpose of useState in React?",
        options: [
            "To create global state",
            "To manage component state",
            "To fetch data",
            "To handle events",
        ],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "4",
        text: "What is the virtual DOM?",
        options: [
            "A real DOM element",
            "A JavaScript representation of the DOM",
            "A CSS framework",
            "A database",
        ],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "5",
        text: "What is the correct way to pass data to a child component?",
        options: [
            "Through global variables",
            "Through props",
            "Through CSS",
            "Through localStorage",
        ],
        correct_answer: 1,
    },
];

static PYTHON: [CatalogQuestion; CATALOG_TOPIC_SIZE] = [
    CatalogQuestion {
        id: "1",
        text: "What is the correct way to create a list in Python?",
        options: ["list = []", "list = {}", "list = ()", "list = <>"],
        correct_answer: 0,
    },
    CatalogQuestion {
        id: "2",
        text: "Which keyword is used to define a function in Python?",
        options: ["function", "def", "func", "define"],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "3",
        text: "What is the result of 3 ** 2 in Python?",
        options: ["6", "9", "5", "1"],
        correct_answer: 1,
    },
    CatalogQuestion {
        id: "4",
        text: "Which method is used to add an item to a list?",
        options: ["add()", "insert()", "append()", "Both append() and insert()"],
        correct_answer: 3,
    },
    CatalogQuestion {
        id: "5",
        text: "What is PEP 8?",
        options: [
            "A Python library",
            "A Python Enhancement Proposal for code style",
            "A Python framework",
            "A Python database",
        ],
        correct_answer: 1,
    },
];

/// Lowercased topic name -> questions, in catalog order.
static CATALOG: [(&str, &[CatalogQuestion]); 3] = [
    ("javascript", &JAVASCRIPT),
    ("react", &REACT),
    ("python", &PYTHON),
];

fn lookup(topic: &str) -> Option<&'static [CatalogQuestion]> {
    let topic = topic.to_lowercase();
    CATALOG
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, questions)| *questions)
}

/// Names of the topics that have hand-written questions.
pub fn catalog_topics() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Case-insensitive check against the catalog.
pub fn is_cataloged(topic: &str) -> bool {
    lookup(topic).is_some()
}

/// Produces the ordered question list for a quiz.
///
/// Cataloged topics yield at most `CATALOG_TOPIC_SIZE` questions. Other topics get
/// exactly `count` generated questions. A count of zero or less yields nothing.
pub fn produce_questions(topic: &str, count: i64) -> Vec<Question> {
    let count = usize::try_from(count).unwrap_or(0);

    match lookup(topic) {
        Some(questions) => questions
            .iter()
            .take(count)
            .map(CatalogQuestion::to_question)
            .collect(),
        None => (0..count).map(|i| synthesize_question(topic, i)).collect(),
    }
}

/// Placeholder question for a topic outside the catalog.
/// The correct answer rotates through the four slots and carries no meaning.
fn synthesize_question(topic: &str, index: usize) -> Question {
    let number = index + 1;
    Question {
        question_id: number.to_string(),
        question: format!(
            "What is the most important aspect of {}? (Question {})",
            topic, number
        ),
        options: vec![
            format!("Theory of {}", topic),
            format!("Practice in {}", topic),
            format!("Both theory and practice of {}", topic),
            format!("Memorization of {}", topic),
        ],
        correct_answer: (index % 4) as i64,
    }
}

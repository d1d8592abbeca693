use serde::Serialize;

/// The five fields collected by the form, serialized verbatim as the
/// request body for `/generate-book`. All fields default to "" and are
/// submitted as-is; there is no required-field gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookRequest {
    pub age: String,
    pub lesson: String,
    pub topic: String,
    pub hero: String,
    pub characteristics: String,
}

impl BookRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Lesson => &self.lesson,
            Field::Topic => &self.topic,
            Field::Hero => &self.hero,
            Field::Characteristics => &self.characteristics,
        }
    }

    /// Snapshot copy with exactly one field replaced.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Age => &mut next.age,
            Field::Lesson => &mut next.lesson,
            Field::Topic => &mut next.topic,
            Field::Hero => &mut next.hero,
            Field::Characteristics => &mut next.characteristics,
        };
        *slot = value.into();
        next
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self = self.with_field(field, value);
    }
}

/* =========================
   Form fields
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Lesson,
    Topic,
    Hero,
    Characteristics,
}

const AGE_SUGGESTIONS: &[&str] = &[
    "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18",
];
const LESSON_SUGGESTIONS: &[&str] = &["Alphabet", "Numbers", "Colors"];
const TOPIC_SUGGESTIONS: &[&str] = &["Adventure", "Fantasy", "Mystery"];
const HERO_SUGGESTIONS: &[&str] = &["Adam", "Haley"];
const CHARACTERISTIC_SUGGESTIONS: &[&str] = &["Brave", "Curious", "Kind"];

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Lesson,
        Field::Topic,
        Field::Hero,
        Field::Characteristics,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Lesson => "lesson",
            Field::Topic => "topic",
            Field::Hero => "hero",
            Field::Characteristics => "characteristics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "What is the age of your listener?",
            Field::Lesson => "Select Lesson",
            Field::Topic => "Topic of the story",
            Field::Hero => {
                "If you'd like the listener of the story to be the hero, what is his/her name?"
            }
            Field::Characteristics => "What are some characteristics of your listener?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Age => "Select or type an age",
            Field::Lesson => "Select or type a lesson",
            Field::Topic => "Select or type a topic",
            Field::Hero => "Select or type a response",
            Field::Characteristics => "Select or type characteristics",
        }
    }

    /// Fixed example values offered next to the input. The input itself
    /// still accepts arbitrary free text.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Field::Age => AGE_SUGGESTIONS,
            Field::Lesson => LESSON_SUGGESTIONS,
            Field::Topic => TOPIC_SUGGESTIONS,
            Field::Hero => HERO_SUGGESTIONS,
            Field::Characteristics => CHARACTERISTIC_SUGGESTIONS,
        }
    }
}

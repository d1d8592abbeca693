use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope returned by `/generate-book`. The backend wraps the story in
/// a top-level `response` field, which may be null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBookReply {
    #[serde(default)]
    pub response: Option<StoryResponse>,
}

/// A generated story. `content` and `descriptions` are required: a reply
/// missing either fails decode and the caller keeps whatever it was
/// already showing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResponse {
    #[serde(default)]
    pub title: String,

    pub content: Vec<StoryPage>,

    /// Physical descriptions of characters and objects, keyed by name.
    /// Iteration order carries no meaning; sorted keys keep the view
    /// stable between redraws.
    pub descriptions: BTreeMap<String, String>,
}

/// One page of the story: a paragraph plus the prompt and caption for the
/// illustration that goes with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryPage {
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub image_prompt: String,
    #[serde(default)]
    pub image_caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_reply() {
        let json = r#"{
            "response": {
                "title": "The Brave Little Fox",
                "content": [
                    {
                        "paragraph": "Once upon a time...",
                        "image_prompt": "a fox in a forest",
                        "image_caption": "Fergus sets out"
                    }
                ],
                "descriptions": {
                    "Fergus": "a small orange fox with a blue scarf"
                }
            }
        }"#;

        let reply: GenerateBookReply = serde_json::from_str(json).unwrap();
        let story = reply.response.unwrap();

        assert_eq!(story.title, "The Brave Little Fox");
        assert_eq!(story.content.len(), 1);
        assert_eq!(story.content[0].image_caption, "Fergus sets out");
        assert_eq!(
            story.descriptions["Fergus"],
            "a small orange fox with a blue scarf"
        );
    }

    #[test]
    fn null_response_decodes_to_none() {
        let reply: GenerateBookReply =
            serde_json::from_str(r#"{"response": null}"#).unwrap();
        assert!(reply.response.is_none());
    }

    #[test]
    fn absent_response_decodes_to_none() {
        let reply: GenerateBookReply = serde_json::from_str("{}").unwrap();
        assert!(reply.response.is_none());
    }

    #[test]
    fn empty_content_and_descriptions_are_valid() {
        let json = r#"{"response": {"title": "T", "content": [], "descriptions": {}}}"#;
        let reply: GenerateBookReply = serde_json::from_str(json).unwrap();
        let story = reply.response.unwrap();

        assert_eq!(story.title, "T");
        assert!(story.content.is_empty());
        assert!(story.descriptions.is_empty());
    }

    #[test]
    fn missing_content_fails_decode() {
        let json = r#"{"response": {"title": "T", "descriptions": {}}}"#;
        assert!(serde_json::from_str::<GenerateBookReply>(json).is_err());
    }

    #[test]
    fn missing_descriptions_fails_decode() {
        let json = r#"{"response": {"title": "T", "content": []}}"#;
        assert!(serde_json::from_str::<GenerateBookReply>(json).is_err());
    }

    #[test]
    fn page_fields_default_to_empty() {
        let json = r#"{"response": {"title": "T", "content": [{}], "descriptions": {}}}"#;
        let reply: GenerateBookReply = serde_json::from_str(json).unwrap();
        let story = reply.response.unwrap();

        assert_eq!(story.content[0].paragraph, "");
        assert_eq!(story.content[0].image_prompt, "");
    }
}

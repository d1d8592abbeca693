use crate::model::story::StoryResponse;

/// One line of the flattened story view. The builder does all the text
/// formatting; the panel only styles and paints.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryLine {
    Title(String),
    Paragraph(String),
    /// `/imagine <prompt>`, ready to paste into an image generator.
    ImagePrompt(String),
    /// `[<caption>]`
    Caption(String),
    Separator,
    /// `<name>: <description>`
    Description(String),
}

pub fn story_lines(story: &StoryResponse) -> Vec<StoryLine> {
    let mut lines = vec![StoryLine::Title(story.title.clone())];

    for page in &story.content {
        lines.push(StoryLine::Paragraph(page.paragraph.clone()));
        lines.push(StoryLine::ImagePrompt(format!(
            "/imagine {}",
            page.image_prompt
        )));
        lines.push(StoryLine::Caption(format!("[{}]", page.image_caption)));
    }

    lines.push(StoryLine::Separator);

    for (name, description) in &story.descriptions {
        lines.push(StoryLine::Description(format!("{name}: {description}")));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::story::StoryPage;

    fn single_page_story() -> StoryResponse {
        StoryResponse {
            title: "T".into(),
            content: vec![StoryPage {
                paragraph: "P".into(),
                image_prompt: "I".into(),
                image_caption: "C".into(),
            }],
            descriptions: [("moral".to_string(), "be kind".to_string())].into(),
        }
    }

    #[test]
    fn single_page_story_line_order() {
        assert_eq!(
            story_lines(&single_page_story()),
            vec![
                StoryLine::Title("T".into()),
                StoryLine::Paragraph("P".into()),
                StoryLine::ImagePrompt("/imagine I".into()),
                StoryLine::Caption("[C]".into()),
                StoryLine::Separator,
                StoryLine::Description("moral: be kind".into()),
            ]
        );
    }

    #[test]
    fn empty_story_keeps_only_title_and_separator() {
        let story = StoryResponse {
            title: "T".into(),
            content: Vec::new(),
            descriptions: Default::default(),
        };

        assert_eq!(
            story_lines(&story),
            vec![StoryLine::Title("T".into()), StoryLine::Separator]
        );
    }

    #[test]
    fn descriptions_come_out_in_sorted_key_order() {
        let mut story = single_page_story();
        story.descriptions.insert("ball".into(), "a red ball".into());
        story.descriptions.insert("Spot".into(), "a yellow dog".into());

        let tail: Vec<_> = story_lines(&story)
            .into_iter()
            .filter(|line| matches!(line, StoryLine::Description(_)))
            .collect();

        assert_eq!(
            tail,
            vec![
                StoryLine::Description("Spot: a yellow dog".into()),
                StoryLine::Description("ball: a red ball".into()),
                StoryLine::Description("moral: be kind".into()),
            ]
        );
    }
}
